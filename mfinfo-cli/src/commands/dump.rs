//! The `dump` command.
//!
//! Prints the complete probe document of one file as pretty JSON. The output
//! can be fed back to `show --probe-json`.

use crate::cli::DumpArgs;
use crate::commands::probe_executor;
use crate::error::{CliErrorContext, CliResult};
use mfinfo_core::check_dependency;
use std::io::{self, Write};
use std::process::ExitCode;

pub fn run_dump(args: DumpArgs) -> CliResult<ExitCode> {
    if args.probe_json.is_none() {
        check_dependency("ffprobe")?;
    }

    let probe = probe_executor(args.probe_json.as_deref());
    let probed = probe
        .probe(&args.path)
        .cli_with_context(|| format!("Failed to probe {}", args.path.display()))?;

    let json = probed.diagnostic_json()?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;

    Ok(ExitCode::SUCCESS)
}
