// ============================================================================
// mfinfo-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for the mfinfo Core Library
//
// This module defines the error type shared by every fallible operation in
// the core library. The report formatter itself never fails; errors come from
// the outside world: starting ffprobe, reading its output, walking directories
// and rendering diagnostic documents.
//
// KEY COMPONENTS:
// - CoreError: the error enum (thiserror-derived)
// - CoreResult: result alias used throughout the crate
// - Helper constructors for command errors

// ---- External crate imports ----
use thiserror::Error;

// ---- Standard library imports ----
use std::io;
use std::process::ExitStatus;

/// Errors produced by the mfinfo core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Required external command '{0}' was not found")]
    DependencyNotFound(String),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Command '{0}' exited with {1}: {2}")]
    CommandFailed(String, ExitStatus, String),

    #[error("Failed to parse ffprobe output: {0}")]
    FfprobeParse(String),

    #[error("JSON error: {0}")]
    JsonParseError(String),

    #[error("Failed to render diagnostic document: {0}")]
    DiagnosticDump(String),

    #[error("No supported video files found")]
    NoFilesFound,

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    OperationFailed(String),
}

/// Result type for mfinfo core operations.
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// True when the error means the media probe could not read or parse a file.
    pub fn is_probe_failure(&self) -> bool {
        matches!(
            self,
            CoreError::DependencyNotFound(_)
                | CoreError::CommandStart(..)
                | CoreError::CommandFailed(..)
                | CoreError::FfprobeParse(_)
                | CoreError::JsonParseError(_)
                | CoreError::Io(_)
        )
    }
}

/// Builds a `CoreError::CommandStart` for a command that could not be spawned.
pub fn command_start_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(cmd.into(), err)
}

/// Builds a `CoreError::CommandFailed` from a finished command's status and stderr.
pub fn command_failed_error(
    cmd: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed(cmd.into(), status, stderr.into().trim().to_string())
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::JsonParseError(err.to_string())
    }
}
