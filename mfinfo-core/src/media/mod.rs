//! Media model and its construction from ffprobe documents.

pub mod document;
pub mod info;

pub use document::{ProbeDocument, media_info_from_document};
pub use info::{CodecType, FieldOrder, MediaInfo, Rational, Stream};
