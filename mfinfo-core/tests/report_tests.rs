// mfinfo-core/tests/report_tests.rs

use mfinfo_core::media::{CodecType, FieldOrder, MediaInfo, Rational, Stream};
use mfinfo_core::report::{ReportRow, build_report, build_stream_section};

fn clip_info() -> MediaInfo {
    MediaInfo {
        filename: "clip.mp4".to_string(),
        file_size_text: "12.3 MB".to_string(),
        duration_text: "00:01:20".to_string(),
        format_long_name: "QuickTime / MOV".to_string(),
        format_name: "mov,mp4,m4a,3gp,3g2,mj2".to_string(),
        streams: vec![Stream {
            index: 0,
            codec_type: CodecType::Video,
            codec_id: "h264".to_string(),
            width: 1920,
            height: 1080,
            frame_rate: Rational::new(30, 1),
            field_order: FieldOrder::Progressive,
            aspect_ratio: Rational::new(16, 9),
            bit_rate: 5_000_000,
            channels: 0,
        }],
    }
}

fn audio_stream(index: i64) -> Stream {
    Stream {
        index,
        codec_type: CodecType::Audio,
        codec_id: "aac".to_string(),
        bit_rate: 128_000,
        channels: 2,
        ..Default::default()
    }
}

fn keys(rows: &[ReportRow]) -> Vec<&str> {
    rows.iter().map(|row| row.key.as_str()).collect()
}

#[test]
fn test_clip_report_end_to_end() {
    let rows = build_report(&clip_info());
    let video = "Stream 0 (VIDEO)";

    let expected = vec![
        ReportRow::new("File", "Name", "clip.mp4"),
        ReportRow::new("File", "Size", "12.3 MB"),
        ReportRow::new("File", "Duration", "00:01:20"),
        ReportRow::new("File", "Format Detail", "QuickTime / MOV"),
        ReportRow::new("File", "Format", "mov,mp4,m4a,3gp,3g2,mj2"),
        ReportRow::new(video, "Codec ID", "h264"),
        ReportRow::new(video, "Resolution", "1920 : 1080"),
        ReportRow::new(video, "FPS", "30.00 (progressive)"),
        ReportRow::new(video, "Aspect Ratio", "1:1.78"),
        ReportRow::new(video, "Bitrate", "4.77 mb/s"),
    ];

    assert_eq!(rows, expected);
}

#[test]
fn test_file_section_passes_empty_text_through() {
    let rows = build_report(&MediaInfo::default());
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|row| row.section == "File" && row.value.is_empty()));
    assert_eq!(keys(&rows), vec!["Name", "Size", "Duration", "Format Detail", "Format"]);
}

#[test]
fn test_unknown_streams_are_skipped() {
    let unknown = Stream {
        index: 1,
        codec_type: CodecType::Unknown,
        codec_id: "bin_data".to_string(),
        width: 640,
        height: 480,
        channels: 2,
        ..Default::default()
    };
    assert!(build_stream_section(&unknown).is_empty());

    let mut info = clip_info();
    info.streams.push(unknown);
    info.streams.push(audio_stream(2));

    let rows = build_report(&info);
    assert!(rows.iter().all(|row| !row.section.contains("UNKNOWN")));
    assert!(rows.iter().any(|row| row.section == "Stream 2 (AUDIO)"));
}

#[test]
fn test_non_video_streams_have_no_picture_rows() {
    for (width, height) in [(0, 0), (1920, 0), (0, 1080)] {
        let stream = Stream {
            index: 3,
            codec_type: CodecType::Video,
            codec_id: "mjpeg".to_string(),
            width,
            height,
            frame_rate: Rational::new(25, 1),
            aspect_ratio: Rational::new(4, 3),
            ..Default::default()
        };
        let rows = build_stream_section(&stream);
        assert_eq!(keys(&rows), vec!["Codec ID", "Bitrate"], "{width}x{height}");
    }
}

#[test]
fn test_audio_stream_rows() {
    let rows = build_stream_section(&audio_stream(1));
    assert_eq!(
        rows,
        vec![
            ReportRow::new("Stream 1 (AUDIO)", "Codec ID", "aac"),
            ReportRow::new("Stream 1 (AUDIO)", "Bitrate", "125.00 kb/s"),
            ReportRow::new("Stream 1 (AUDIO)", "Channels", "2"),
        ]
    );
}

#[test]
fn test_zero_channels_has_no_channels_row() {
    let mut stream = audio_stream(1);
    stream.channels = 0;
    assert!(!keys(&build_stream_section(&stream)).contains(&"Channels"));
}

#[test]
fn test_interlaced_and_indeterminate_rates() {
    let stream = Stream {
        index: 0,
        codec_type: CodecType::Video,
        codec_id: "mpeg2video".to_string(),
        width: 720,
        height: 576,
        frame_rate: Rational::new(0, 0),
        field_order: FieldOrder::TopFirst,
        aspect_ratio: Rational::new(0, 0),
        ..Default::default()
    };
    let rows = build_stream_section(&stream);
    let value = |key: &str| rows.iter().find(|r| r.key == key).map(|r| r.value.clone());

    assert_eq!(value("FPS").as_deref(), Some("0.00 (interlaced)"));
    assert_eq!(value("Aspect Ratio").as_deref(), Some("N/A"));
    assert_eq!(value("Bitrate").as_deref(), Some("0 b/s"));
}

#[test]
fn test_unknown_field_order_counts_as_progressive() {
    let stream = Stream {
        codec_type: CodecType::Video,
        width: 1280,
        height: 720,
        frame_rate: Rational::new(30000, 1001),
        field_order: FieldOrder::Unknown,
        ..Default::default()
    };
    let rows = build_stream_section(&stream);
    assert!(rows.iter().any(|r| r.key == "FPS" && r.value == "29.97 (progressive)"));
}

#[test]
fn test_report_is_idempotent() {
    let mut info = clip_info();
    info.streams.push(audio_stream(1));
    assert_eq!(build_report(&info), build_report(&info));
}
