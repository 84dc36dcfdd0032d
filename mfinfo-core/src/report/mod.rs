// ============================================================================
// mfinfo-core/src/report/mod.rs
// ============================================================================
//
// REPORT FORMATTER: MediaInfo -> ordered (section, key, value) rows
//
// The report is what every display surface shows: a fixed "File" section
// followed by one section per classified stream, in stream order. All values
// are final display text; surfaces only lay them out.
//
// KEY COMPONENTS:
// - ReportRow: one row of the report
// - build_report: the whole report for a MediaInfo
// - build_file_section / build_stream_section: the two section builders
// - format: value formatters (rate, aspect ratio, bit rate)
//
// The formatter is a pure function of its input and never fails.

pub mod format;

// ---- External crate imports ----
use serde::Serialize;

// ---- Internal crate imports ----
use crate::media::{CodecType, MediaInfo, Stream};

pub use format::{compute_rate, format_aspect_ratio, format_bit_rate};

/// Label of the container-level section.
pub const FILE_SECTION: &str = "File";

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub section: String,
    pub key: String,
    pub value: String,
}

impl ReportRow {
    pub fn new(
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            section: section.into(),
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Builds the full report: the file section, then every stream section.
///
/// # Examples
///
/// ```rust
/// use mfinfo_core::media::MediaInfo;
/// use mfinfo_core::report::build_report;
///
/// let info = MediaInfo {
///     filename: "clip.mp4".to_string(),
///     ..Default::default()
/// };
/// let rows = build_report(&info);
/// assert_eq!(rows.len(), 5);
/// assert_eq!(rows[0].value, "clip.mp4");
/// ```
#[must_use]
pub fn build_report(info: &MediaInfo) -> Vec<ReportRow> {
    let mut rows = build_file_section(info);
    for stream in &info.streams {
        rows.extend(build_stream_section(stream));
    }
    rows
}

/// The five container-level rows, passed through verbatim.
#[must_use]
pub fn build_file_section(info: &MediaInfo) -> Vec<ReportRow> {
    vec![
        ReportRow::new(FILE_SECTION, "Name", info.filename.as_str()),
        ReportRow::new(FILE_SECTION, "Size", info.file_size_text.as_str()),
        ReportRow::new(FILE_SECTION, "Duration", info.duration_text.as_str()),
        ReportRow::new(FILE_SECTION, "Format Detail", info.format_long_name.as_str()),
        ReportRow::new(FILE_SECTION, "Format", info.format_name.as_str()),
    ]
}

/// Section label of a stream, e.g. `"Stream 0 (VIDEO)"`.
#[must_use]
pub fn stream_section_label(stream: &Stream) -> String {
    format!("Stream {} ({})", stream.index, stream.codec_type)
}

/// Rows for one stream. Unclassified streams produce nothing.
///
/// Resolution, FPS and aspect ratio only appear when both dimensions are
/// positive; channels only when the count is positive.
#[must_use]
pub fn build_stream_section(stream: &Stream) -> Vec<ReportRow> {
    if stream.codec_type == CodecType::Unknown {
        return Vec::new();
    }

    let section = stream_section_label(stream);
    let mut rows = Vec::with_capacity(6);
    let mut add =
        |key: &str, value: String| rows.push(ReportRow::new(section.as_str(), key, value));

    add("Codec ID", stream.codec_id.clone());

    if stream.width > 0 && stream.height > 0 {
        add("Resolution", format!("{} : {}", stream.width, stream.height));

        let fps = compute_rate(stream.frame_rate.num, stream.frame_rate.den);
        let scan = if stream.field_order.is_interlaced() {
            "interlaced"
        } else {
            "progressive"
        };
        add("FPS", format!("{fps:.2} ({scan})"));

        add(
            "Aspect Ratio",
            format_aspect_ratio(stream.aspect_ratio.num, stream.aspect_ratio.den),
        );
    }

    add("Bitrate", format_bit_rate(stream.bit_rate));

    if stream.channels > 0 {
        add("Channels", stream.channels.to_string());
    }

    rows
}
