//! Core library of the mfinfo media file info viewer.
//!
//! This crate probes a video file with ffprobe, maps the probe document into
//! a small media model and turns that model into an ordered key-value report
//! that any display surface can show.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mfinfo_core::{CrateFfprobeExecutor, MemorySurface, ViewerConfig, show_selected_file};
//! use std::path::PathBuf;
//!
//! let mut selection = vec![PathBuf::from("/path/to/clip.mp4")];
//! let mut surface = MemorySurface::new();
//!
//! let outcome = show_selected_file(
//!     &mut selection,
//!     &CrateFfprobeExecutor::new(),
//!     &mut surface,
//!     &ViewerConfig::default(),
//! ).unwrap();
//!
//! for row in surface.rows() {
//!     println!("{} / {} = {}", row.section, row.key, row.value);
//! }
//! # let _ = outcome;
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod media;
pub mod report;
pub mod surface;
pub mod utils;
pub mod viewer;

// Re-exports for public API
pub use config::{ViewerConfig, ViewerConfigBuilder};
pub use discovery::{FileSelector, SUPPORTED_EXTENSIONS, find_supported_files};
pub use error::{CoreError, CoreResult};
pub use external::{
    CrateFfprobeExecutor, FfprobeExecutor, ProbedMedia, SavedProbeExecutor, check_dependency,
};
pub use media::{CodecType, FieldOrder, MediaInfo, Rational, Stream};
pub use report::{ReportRow, build_report};
pub use surface::{MemorySurface, ReportSurface, render_report};
pub use utils::{format_bytes, format_duration};
pub use viewer::{ViewOutcome, show_selected_file};
