//! Media model consumed by the report formatter.
//!
//! A [`MediaInfo`] is built once per file selection (usually from an ffprobe
//! document, see [`super::document`]) and discarded after the report has been
//! rendered. Text fields are already human-readable; numeric stream fields
//! are kept raw so the formatter decides how they are displayed.

use std::fmt;

/// Container-level metadata plus the ordered list of streams.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaInfo {
    pub filename: String,
    pub file_size_text: String,
    pub duration_text: String,
    pub format_long_name: String,
    pub format_name: String,
    pub streams: Vec<Stream>,
}

/// One elementary stream of a container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stream {
    /// Position of the stream in the container.
    pub index: i64,
    pub codec_type: CodecType,
    pub codec_id: String,
    /// Pixels; 0 when the stream is not video.
    pub width: i64,
    pub height: i64,
    pub frame_rate: Rational,
    pub field_order: FieldOrder,
    pub aspect_ratio: Rational,
    /// Bits per second; 0 when unknown.
    pub bit_rate: i64,
    /// 0 when the stream is not audio or the count is unknown.
    pub channels: i64,
}

/// A numerator/denominator pair. Either part may be zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rational {
    pub num: i64,
    pub den: i64,
}

impl Rational {
    pub const fn new(num: i64, den: i64) -> Self {
        Self { num, den }
    }

    /// Parses `"30000/1001"` or `"16:9"`. Anything else yields `0/0`.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let split = text.split_once('/').or_else(|| text.split_once(':'));

        match split {
            Some((num, den)) => match (num.trim().parse(), den.trim().parse()) {
                (Ok(num), Ok(den)) => Self { num, den },
                _ => Self::default(),
            },
            None => Self::default(),
        }
    }
}

/// Stream classification as reported by the media probe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CodecType {
    Video,
    Audio,
    Data,
    Subtitle,
    Attachment,
    /// Sentinel for streams the probe could not classify. Such streams are
    /// left out of the report.
    #[default]
    Unknown,
}

impl CodecType {
    /// Maps ffprobe's lowercase `codec_type` values.
    pub fn from_probe_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "video" => CodecType::Video,
            "audio" => CodecType::Audio,
            "data" => CodecType::Data,
            "subtitle" => CodecType::Subtitle,
            "attachment" => CodecType::Attachment,
            _ => CodecType::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CodecType::Video => "VIDEO",
            CodecType::Audio => "AUDIO",
            CodecType::Data => "DATA",
            CodecType::Subtitle => "SUBTITLE",
            CodecType::Attachment => "ATTACHMENT",
            CodecType::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for CodecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field order of a video stream.
///
/// The ordinal follows the usual libavcodec numbering; every value above
/// `Progressive` is one of the interlaced layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldOrder {
    #[default]
    Unknown,
    Progressive,
    /// Top field coded and displayed first.
    TopFirst,
    /// Bottom field coded and displayed first.
    BottomFirst,
    /// Top coded first, bottom displayed first.
    TopBottom,
    /// Bottom coded first, top displayed first.
    BottomTop,
}

impl FieldOrder {
    /// Maps ffprobe's `field_order` values.
    pub fn from_probe_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "progressive" => FieldOrder::Progressive,
            "tt" => FieldOrder::TopFirst,
            "bb" => FieldOrder::BottomFirst,
            "tb" => FieldOrder::TopBottom,
            "bt" => FieldOrder::BottomTop,
            _ => FieldOrder::Unknown,
        }
    }

    pub fn ordinal(&self) -> u8 {
        match self {
            FieldOrder::Unknown => 0,
            FieldOrder::Progressive => 1,
            FieldOrder::TopFirst => 2,
            FieldOrder::BottomFirst => 3,
            FieldOrder::TopBottom => 4,
            FieldOrder::BottomTop => 5,
        }
    }

    pub fn is_interlaced(&self) -> bool {
        self.ordinal() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rational_parse() {
        assert_eq!(Rational::parse("30000/1001"), Rational::new(30000, 1001));
        assert_eq!(Rational::parse("16:9"), Rational::new(16, 9));
        assert_eq!(Rational::parse("0/0"), Rational::new(0, 0));
        assert_eq!(Rational::parse(" 25 / 1 "), Rational::new(25, 1));

        // Unparseable input degrades to 0/0
        assert_eq!(Rational::parse("N/A"), Rational::default());
        assert_eq!(Rational::parse(""), Rational::default());
        assert_eq!(Rational::parse("25"), Rational::default());
    }

    #[test]
    fn test_codec_type_names() {
        assert_eq!(CodecType::from_probe_name("video"), CodecType::Video);
        assert_eq!(CodecType::from_probe_name("AUDIO"), CodecType::Audio);
        assert_eq!(CodecType::from_probe_name("subtitle"), CodecType::Subtitle);
        assert_eq!(CodecType::from_probe_name("nonsense"), CodecType::Unknown);
        assert_eq!(CodecType::Video.to_string(), "VIDEO");
        assert_eq!(CodecType::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn test_field_order_interlacing() {
        assert!(!FieldOrder::Unknown.is_interlaced());
        assert!(!FieldOrder::Progressive.is_interlaced());
        assert!(FieldOrder::from_probe_name("tt").is_interlaced());
        assert!(FieldOrder::from_probe_name("bb").is_interlaced());
        assert!(FieldOrder::from_probe_name("tb").is_interlaced());
        assert!(FieldOrder::from_probe_name("bt").is_interlaced());
        assert_eq!(FieldOrder::from_probe_name("unknown"), FieldOrder::Unknown);
    }
}
