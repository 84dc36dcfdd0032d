//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

use mfinfo_core::external::{CrateFfprobeExecutor, FfprobeExecutor, SavedProbeExecutor};
use std::path::Path;

/// The `dump` command: prints the raw probe document of a file.
pub mod dump;

/// The `show` command: selects a file and prints its metadata report.
pub mod show;

/// Picks the probe: a saved document when one was given, ffprobe otherwise.
pub(crate) fn probe_executor(probe_json: Option<&Path>) -> Box<dyn FfprobeExecutor> {
    match probe_json {
        Some(document) => {
            log::debug!("Using saved probe document {}", document.display());
            Box::new(SavedProbeExecutor::new(document))
        }
        None => Box::new(CrateFfprobeExecutor::new()),
    }
}
