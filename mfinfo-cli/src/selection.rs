//! File selection from command-line arguments.
//!
//! Each argument is either a video file or a directory. Directories expand to
//! their allowlisted files (top level, sorted); everything else that does not
//! pass the allowlist is reported and skipped.

use mfinfo_core::discovery::{FileSelector, find_supported_files, is_supported_video_file};
use mfinfo_core::{CoreError, CoreResult};
use std::path::PathBuf;

use crate::error::CliErrorContext;

/// `FileSelector` over the paths given on the command line.
#[derive(Debug, Clone)]
pub struct ArgsFileSelector {
    paths: Vec<PathBuf>,
    extensions: Vec<String>,
}

impl ArgsFileSelector {
    pub fn new(paths: Vec<PathBuf>, extensions: Vec<String>) -> Self {
        Self { paths, extensions }
    }
}

impl FileSelector for ArgsFileSelector {
    fn select(&mut self) -> CoreResult<Vec<PathBuf>> {
        let mut selected = Vec::new();

        for path in &self.paths {
            if path.is_dir() {
                match find_supported_files(path, &self.extensions) {
                    Ok(files) => selected.extend(files),
                    Err(CoreError::NoFilesFound) => {
                        log::warn!("No supported video files in directory {}", path.display());
                    }
                    Err(e) => {
                        return Err(e).cli_with_context(|| {
                            format!("Failed to scan directory {}", path.display())
                        });
                    }
                }
            } else if is_supported_video_file(path, &self.extensions) {
                selected.push(path.clone());
            } else if !path.exists() {
                log::warn!("Skipping {}: no such file", path.display());
            } else {
                log::warn!(
                    "Skipping {}: not a supported video file (allowed: {})",
                    path.display(),
                    self.extensions.join(", ")
                );
            }
        }

        Ok(selected)
    }
}
