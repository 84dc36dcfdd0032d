//! Media probing through ffprobe.
//!
//! [`CrateFfprobeExecutor`] runs ffprobe via the `ffprobe` crate.
//! [`SavedProbeExecutor`] replays a JSON document captured earlier with
//! `ffprobe -print_format json -show_format -show_streams` (or `mfinfo dump`),
//! which keeps the viewer usable without ffprobe installed.

use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use crate::external::{FileMetadataProvider, StdFsMetadataProvider};
use crate::media::{MediaInfo, ProbeDocument, media_info_from_document};
use ffprobe::{FfProbe, FfProbeError, ffprobe};
use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};

/// Result of probing one file.
#[derive(Debug, Clone)]
pub struct ProbedMedia {
    /// Media model used to build the report
    pub info: MediaInfo,
    /// Complete probe document, kept for diagnostics
    pub document: Value,
}

impl ProbedMedia {
    /// Builds the media model for `path` from a raw probe document.
    pub fn from_document(
        path: &Path,
        document: Value,
        files: &dyn FileMetadataProvider,
    ) -> CoreResult<Self> {
        let parsed = ProbeDocument::from_value(&document)?;
        let info = media_info_from_document(path, &parsed, files);
        Ok(Self { info, document })
    }

    /// Pretty-printed probe document for logs.
    pub fn diagnostic_json(&self) -> CoreResult<String> {
        serde_json::to_string_pretty(&self.document)
            .map_err(|e| CoreError::DiagnosticDump(e.to_string()))
    }
}

/// Something that can turn a media file path into a [`ProbedMedia`].
pub trait FfprobeExecutor {
    /// Probes the file. Errors mean the file could not be read or parsed.
    fn probe(&self, path: &Path) -> CoreResult<ProbedMedia>;
}

/// Probes files by running ffprobe through the `ffprobe` crate.
#[derive(Debug, Clone, Default)]
pub struct CrateFfprobeExecutor;

impl CrateFfprobeExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl FfprobeExecutor for CrateFfprobeExecutor {
    fn probe(&self, path: &Path) -> CoreResult<ProbedMedia> {
        log::debug!("Running ffprobe (via crate) for media info on: {}", path.display());

        let metadata = ffprobe(path).map_err(|err| {
            log::debug!("ffprobe failed for {}: {:?}", path.display(), err);
            map_ffprobe_error(err)
        })?;

        let document = document_from_ffprobe(&metadata)?;
        ProbedMedia::from_document(path, document, &StdFsMetadataProvider)
    }
}

/// Converts the `ffprobe` crate's result into a plain JSON probe document.
fn document_from_ffprobe(metadata: &FfProbe) -> CoreResult<Value> {
    serde_json::to_value(metadata)
        .map_err(|e| CoreError::JsonParseError(format!("ffprobe output re-serialization: {e}")))
}

/// Replays a probe document stored on disk.
#[derive(Debug, Clone)]
pub struct SavedProbeExecutor {
    document_path: PathBuf,
}

impl SavedProbeExecutor {
    pub fn new(document_path: impl Into<PathBuf>) -> Self {
        Self {
            document_path: document_path.into(),
        }
    }
}

impl FfprobeExecutor for SavedProbeExecutor {
    fn probe(&self, path: &Path) -> CoreResult<ProbedMedia> {
        log::debug!(
            "Loading saved probe document {} for {}",
            self.document_path.display(),
            path.display()
        );

        let text = std::fs::read_to_string(&self.document_path)?;
        let document: Value = serde_json::from_str(&text).map_err(|e| {
            CoreError::JsonParseError(format!(
                "probe document {}: {e}",
                self.document_path.display()
            ))
        })?;

        ProbedMedia::from_document(path, document, &StdFsMetadataProvider)
    }
}

fn map_ffprobe_error(err: FfProbeError) -> CoreError {
    match err {
        FfProbeError::Io(io_err) if io_err.kind() == io::ErrorKind::NotFound => {
            CoreError::DependencyNotFound("ffprobe".to_string())
        }
        FfProbeError::Io(io_err) => command_start_error("ffprobe", io_err),
        FfProbeError::Status(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            command_failed_error("ffprobe", output.status, stderr)
        }
        FfProbeError::Deserialize(err) => {
            CoreError::JsonParseError(format!("ffprobe output deserialization: {err}"))
        }
        // FfProbeError is non_exhaustive
        #[allow(unreachable_patterns)]
        _ => CoreError::FfprobeParse(format!("Unknown ffprobe error: {err:?}")),
    }
}
