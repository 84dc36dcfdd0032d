//! File discovery and selection.
//!
//! This module defines which files the viewer accepts (an extension
//! allowlist), how a directory is expanded into candidate files, and the
//! [`FileSelector`] seam through which a front end hands the viewer the
//! user's choice.

use crate::error::{CoreError, CoreResult};
use crate::utils::has_extension_in;

use std::path::{Path, PathBuf};

/// Video container extensions accepted by default (case-insensitive).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp4", "mpeg", "avi", "vob", "mpg", "mov", "m2t"];

/// The default allowlist as owned strings.
#[must_use]
pub fn default_extensions() -> Vec<String> {
    SUPPORTED_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

/// Source of the user's file choice.
///
/// An empty list means the user selected nothing (e.g. cancelled). Only the
/// first path is ever displayed.
pub trait FileSelector {
    fn select(&mut self) -> CoreResult<Vec<PathBuf>>;
}

/// Fixed selection, useful for embedding and tests.
impl FileSelector for Vec<PathBuf> {
    fn select(&mut self) -> CoreResult<Vec<PathBuf>> {
        Ok(self.clone())
    }
}

/// Checks if the path is an existing file with an allowlisted extension.
#[must_use]
pub fn is_supported_video_file(path: &Path, extensions: &[String]) -> bool {
    path.is_file() && has_extension_in(path, extensions)
}

/// Finds allowlisted video files in the top level of `input_dir`.
///
/// Subdirectories are not searched. The result is sorted by path so the
/// "first" file is stable across platforms.
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - The discovered files, sorted
/// * `Err(CoreError::Io)` - The directory could not be read
/// * `Err(CoreError::NoFilesFound)` - No allowlisted files were found
///
/// # Examples
///
/// ```rust,no_run
/// use mfinfo_core::discovery::{default_extensions, find_supported_files};
/// use std::path::Path;
///
/// let files = find_supported_files(Path::new("/path/to/videos"), &default_extensions()).unwrap();
/// println!("First video: {}", files[0].display());
/// ```
pub fn find_supported_files(input_dir: &Path, extensions: &[String]) -> CoreResult<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(input_dir)?;
    let mut files: Vec<PathBuf> = read_dir
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            is_supported_video_file(&path, extensions).then_some(path)
        })
        .collect();

    if files.is_empty() {
        return Err(CoreError::NoFilesFound);
    }

    files.sort();
    Ok(files)
}
