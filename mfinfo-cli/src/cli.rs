// mfinfo-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "mfinfo: Media file info viewer",
    long_about = "Shows container and stream metadata of a video file (size, duration, \
                  format, codec, resolution, frame rate, aspect ratio, bitrate, channels) \
                  as a key-value report, using ffprobe."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (RUST_LOG takes precedence when set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output (NO_COLOR is honored as well)
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shows the metadata report of the first selected video file
    Show(ShowArgs),
    /// Prints the full probe document of a file as JSON
    Dump(DumpArgs),
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Video files or directories to choose from; only the first match is shown
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Report output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Read a saved ffprobe JSON document instead of running ffprobe
    #[arg(long, value_name = "FILE")]
    pub probe_json: Option<PathBuf>,

    /// Accepted file extensions, comma separated (default: mp4,mpeg,avi,vob,mpg,mov,m2t)
    #[arg(long, value_name = "EXT", value_delimiter = ',', env = "MFINFO_EXTENSIONS")]
    pub extensions: Option<Vec<String>>,

    /// Do not log the probe document (it is logged at debug level otherwise)
    #[arg(long)]
    pub no_diagnostics: bool,
}

#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Media file to probe
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Read a saved ffprobe JSON document instead of running ffprobe
    #[arg(long, value_name = "FILE")]
    pub probe_json: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned key-value table grouped by section
    Table,
    /// JSON array of {section, key, value} objects
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::parse_from([
            "mfinfo",
            "show",
            "a.mp4",
            "b.mov",
            "--format",
            "json",
            "--extensions",
            "mp4,mkv",
            "-v",
        ]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Show(args) => {
                assert_eq!(
                    args.paths,
                    vec![PathBuf::from("a.mp4"), PathBuf::from("b.mov")]
                );
                assert_eq!(args.format, OutputFormat::Json);
                assert_eq!(
                    args.extensions,
                    Some(vec!["mp4".to_string(), "mkv".to_string()])
                );
                assert!(!args.no_diagnostics);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }
}
