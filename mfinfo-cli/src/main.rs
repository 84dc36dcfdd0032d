// mfinfo-cli/src/main.rs
//
// Entry point of the `mfinfo` binary.
//
// Responsibilities:
// - Parsing command-line arguments (clap).
// - Setting up logging on stderr.
// - Dispatching to the `show` / `dump` commands.
// - Turning errors into a message on stderr and a failing exit code.

use clap::Parser;
use mfinfo_cli::terminal::should_use_color;
use mfinfo_cli::{Cli, Commands, logging, run_dump, run_show};
use std::process::ExitCode;
use supports_color::Stream;

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init(cli.verbose, should_use_color(cli.no_color, Stream::Stderr));

    let result = match cli.command {
        Commands::Show(args) => run_show(args, should_use_color(cli.no_color, Stream::Stdout)),
        Commands::Dump(args) => run_dump(args),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
