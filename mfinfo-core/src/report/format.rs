//! Value formatting for stream rows: frame rate, aspect ratio and bit rate.

/// Frames (or any events) per second from a rational rate.
///
/// A zero denominator means the probe could not determine the rate; the
/// result is then 0 instead of a division error.
#[must_use]
pub fn compute_rate(num: i64, den: i64) -> f64 {
    if den == 0 {
        return 0.0;
    }
    num as f64 / den as f64
}

/// Aspect ratio text such as `"1:1.78"`.
///
/// Cases are checked in order: zero denominator gives `"N/A"`, a zero
/// numerator gives `"1:<den>"`, anything else the quotient to two decimals.
#[must_use]
pub fn format_aspect_ratio(num: i64, den: i64) -> String {
    if den == 0 {
        return "N/A".to_string();
    }
    if num == 0 {
        return format!("1:{den}");
    }
    format!("1:{:.2}", num as f64 / den as f64)
}

/// Bit rate with binary (1024-based) units, e.g. 1536 -> `"1.50 kb/s"`.
///
/// Below one kilobit the raw count is printed without decimals; zero and
/// negative values land there too.
#[must_use]
pub fn format_bit_rate(bits_per_second: i64) -> String {
    const KB: f64 = (1u64 << 10) as f64;
    const MB: f64 = (1u64 << 20) as f64;
    const GB: f64 = (1u64 << 30) as f64;
    const TB: f64 = (1u64 << 40) as f64;

    let bits = bits_per_second as f64;
    let round2 = |value: f64| (value * 100.0).round() / 100.0;

    if bits >= TB {
        format!("{:.2} tb/s", round2(bits / TB))
    } else if bits >= GB {
        format!("{:.2} gb/s", round2(bits / GB))
    } else if bits >= MB {
        format!("{:.2} mb/s", round2(bits / MB))
    } else if bits >= KB {
        format!("{:.2} kb/s", round2(bits / KB))
    } else {
        format!("{bits_per_second} b/s")
    }
}
