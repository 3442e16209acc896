//! Time-code codec shared by both cue-block grammars.
//!
//! The two grammars differ only in the delimiter before the millisecond
//! field: SRT uses a comma, WebVTT uses a dot.

use once_cell::sync::Lazy;
use regex::Regex;

use super::CaptionFormat;
use crate::errors::CaptionError;

static SRT_TIMECODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<hour>\d+):(?P<min>\d{2}):(?P<sec>\d{2}),(?P<ms>\d{3})").unwrap()
});

static VTT_TIMECODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<hour>\d+):(?P<min>\d{2}):(?P<sec>\d{2})\.(?P<ms>\d{3})").unwrap()
});

/// Round a seconds value to millisecond precision.
///
/// Uses `f64::round` (half away from zero), which differs from banker's
/// rounding on exact .0005 halves. Callers never hit that case because
/// timecode arithmetic always starts from whole-millisecond inputs.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Parse a clock representation (`H+:MM:SS<delim>mmm`, searched anywhere in
/// the text) into seconds since track start.
pub fn parse_timecode(text: &str, format: CaptionFormat) -> Result<f64, CaptionError> {
    let pattern = match format {
        CaptionFormat::Srt => &SRT_TIMECODE_REGEX,
        CaptionFormat::Vtt => &VTT_TIMECODE_REGEX,
    };

    let caps = pattern
        .captures(text)
        .ok_or_else(|| CaptionError::InvalidTimecode(text.to_string()))?;

    // The pattern only admits digits, so the group parses cannot fail;
    // overly long hour fields saturate rather than panic.
    let field = |name: &str| -> f64 { caps[name].parse::<u64>().unwrap_or(u64::MAX) as f64 };

    let seconds =
        field("hour") * 3600.0 + field("min") * 60.0 + field("sec") + field("ms") / 1000.0;
    Ok(round3(seconds))
}

/// Format seconds since track start as a clock representation in the given
/// grammar.
///
/// The milliseconds field is derived by rounding the value to whole
/// milliseconds first, so `format_timecode` is an exact inverse of
/// `parse_timecode` for any millisecond-precision input.
pub fn format_timecode(seconds: f64, format: CaptionFormat) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;

    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1_000;
    let millis = total_ms % 1_000;

    format!(
        "{:02}:{:02}:{:02}{}{:03}",
        hours,
        minutes,
        secs,
        format.millis_delimiter(),
        millis
    )
}
