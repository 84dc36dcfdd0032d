// mfinfo-cli/src/lib.rs
//
// Library portion of the mfinfo CLI application.
// Contains argument definitions, command logic and output surfaces.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod selection;
pub mod terminal;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, DumpArgs, OutputFormat, ShowArgs};
pub use commands::dump::run_dump;
pub use commands::show::run_show;
