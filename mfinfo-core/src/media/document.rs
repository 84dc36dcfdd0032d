// ============================================================================
// mfinfo-core/src/media/document.rs
// ============================================================================
//
// PROBE DOCUMENT MAPPING: ffprobe JSON -> MediaInfo
//
// ffprobe describes a file as a JSON document with a `format` object and a
// `streams` array (`-print_format json -show_format -show_streams`). This
// module deserializes the parts mfinfo displays and maps them onto the media
// model.
//
// ffprobe writes most numbers as strings ("size": "12345", "bit_rate":
// "128000") while the `ffprobe` crate re-serializes some of them as integers,
// so every scalar field here accepts either form.

// ---- External crate imports ----
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ---- Standard library imports ----
use std::path::Path;

// ---- Internal crate imports ----
use crate::error::CoreResult;
use crate::external::FileMetadataProvider;
use crate::media::info::{CodecType, FieldOrder, MediaInfo, Rational, Stream};
use crate::utils::{format_bytes, format_duration, get_filename_safe};

/// Codec id shown when the probe reports no codec name.
pub const NO_CODEC_ID: &str = "none";

/// Size text shown when neither the probe nor the filesystem knows the size.
pub const UNKNOWN_SIZE_TEXT: &str = "N/A";

/// Subset of an ffprobe document that the report needs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeDocument {
    #[serde(default)]
    pub format: ProbeFormat,
    #[serde(default)]
    pub streams: Vec<ProbeStream>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeFormat {
    #[serde(default, deserialize_with = "lenient_text")]
    pub filename: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub format_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub format_long_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub size: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeStream {
    #[serde(default, deserialize_with = "lenient_int")]
    pub index: Option<i64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub codec_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub codec_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub width: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub height: Option<i64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub avg_frame_rate: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub field_order: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub display_aspect_ratio: Option<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub bit_rate: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub channels: Option<i64>,
}

impl ProbeDocument {
    /// Deserializes the report-relevant parts of a full ffprobe document.
    pub fn from_value(document: &Value) -> CoreResult<Self> {
        Ok(Self::deserialize(document)?)
    }
}

/// Builds the media model for `path` from its probe document.
///
/// The displayed name is the file name of the selected path, so saved
/// documents captured elsewhere still show the file the user picked.
pub fn media_info_from_document(
    path: &Path,
    document: &ProbeDocument,
    files: &dyn FileMetadataProvider,
) -> MediaInfo {
    let format = &document.format;

    let filename = get_filename_safe(path)
        .ok()
        .or_else(|| format.filename.clone())
        .unwrap_or_else(|| path.display().to_string());

    let size_bytes = format
        .size
        .as_deref()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .or_else(|| match files.get_size(path) {
            Ok(size) => Some(size),
            Err(e) => {
                log::debug!(
                    "No size in probe document and file size unavailable for {}: {}",
                    path.display(),
                    e
                );
                None
            }
        });

    let duration_secs = format
        .duration
        .as_deref()
        .and_then(|d| d.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN);

    MediaInfo {
        filename,
        file_size_text: size_bytes
            .map(format_bytes)
            .unwrap_or_else(|| UNKNOWN_SIZE_TEXT.to_string()),
        duration_text: format_duration(duration_secs),
        format_long_name: format.format_long_name.clone().unwrap_or_default(),
        format_name: format.format_name.clone().unwrap_or_default(),
        streams: document
            .streams
            .iter()
            .enumerate()
            .map(|(position, stream)| stream_from_probe(position, stream))
            .collect(),
    }
}

fn stream_from_probe(position: usize, stream: &ProbeStream) -> Stream {
    Stream {
        index: stream.index.unwrap_or(position as i64),
        codec_type: stream
            .codec_type
            .as_deref()
            .map(CodecType::from_probe_name)
            .unwrap_or_default(),
        codec_id: stream
            .codec_name
            .clone()
            .unwrap_or_else(|| NO_CODEC_ID.to_string()),
        width: stream.width.unwrap_or(0).max(0),
        height: stream.height.unwrap_or(0).max(0),
        frame_rate: stream
            .avg_frame_rate
            .as_deref()
            .map(Rational::parse)
            .unwrap_or_default(),
        field_order: stream
            .field_order
            .as_deref()
            .map(FieldOrder::from_probe_name)
            .unwrap_or_default(),
        aspect_ratio: stream
            .display_aspect_ratio
            .as_deref()
            .map(Rational::parse)
            .unwrap_or_default(),
        bit_rate: stream.bit_rate.unwrap_or(0),
        channels: stream.channels.unwrap_or(0).max(0),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
