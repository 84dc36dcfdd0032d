// ============================================================================
// mfinfo-cli/src/commands/show.rs
// ============================================================================
//
// SHOW COMMAND: Display the metadata report of the first selected file
//
// Builds the viewer configuration from the arguments, wires the argument
// selector, the probe and a stdout surface together and hands them to the
// core viewer session. The report is printed only when a file was probed
// successfully; failures are logged by the core.

// ---- Internal crate imports ----
use crate::cli::{OutputFormat, ShowArgs};
use crate::commands::probe_executor;
use crate::error::{CliErrorContext, CliResult};
use crate::selection::ArgsFileSelector;
use crate::terminal::{JsonSurface, TerminalTable};

// ---- External crate imports ----
use mfinfo_core::{ViewOutcome, ViewerConfig, ViewerConfigBuilder, show_selected_file};

// ---- Standard library imports ----
use std::io;
use std::process::ExitCode;

/// Builds the viewer configuration from the `show` arguments.
pub fn build_config(args: &ShowArgs) -> CliResult<ViewerConfig> {
    let mut builder = ViewerConfigBuilder::new().log_diagnostics(!args.no_diagnostics);
    if let Some(extensions) = &args.extensions {
        builder = builder.extensions(extensions);
    }

    let config = builder.build();
    config.validate().cli_context("Invalid --extensions")?;
    Ok(config)
}

/// Runs the `show` command.
///
/// Exit code is success when a report was printed or nothing was selected,
/// failure when the selected file could not be probed.
pub fn run_show(args: ShowArgs, color: bool) -> CliResult<ExitCode> {
    let config = build_config(&args)?;
    let probe = probe_executor(args.probe_json.as_deref());
    let mut selector = ArgsFileSelector::new(args.paths, config.extensions.clone());
    let stdout = io::stdout().lock();

    let outcome = match args.format {
        OutputFormat::Table => {
            let mut table = TerminalTable::new(stdout, color);
            let outcome = show_selected_file(&mut selector, probe.as_ref(), &mut table, &config)?;
            if outcome.is_displayed() {
                table.finish()?;
            }
            outcome
        }
        OutputFormat::Json => {
            let mut surface = JsonSurface::new(stdout);
            let outcome = show_selected_file(&mut selector, probe.as_ref(), &mut surface, &config)?;
            if outcome.is_displayed() {
                surface.finish()?;
            }
            outcome
        }
    };

    Ok(match outcome {
        ViewOutcome::Displayed { .. } | ViewOutcome::NothingSelected => ExitCode::SUCCESS,
        ViewOutcome::ProbeFailed { .. } => ExitCode::FAILURE,
    })
}
