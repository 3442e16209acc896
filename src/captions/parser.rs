//! Cue-block parser for both caption grammars.

use once_cell::sync::Lazy;
use regex::Regex;

use super::timecode::parse_timecode;
use super::{CaptionCue, CaptionFormat};

// A cue block is an optional index line, a timecode range line, then one or
// more non-empty text lines. A `WEBVTT` header line never matches the block
// pattern, so it is skipped implicitly.
static SRT_CUE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)(?P<index>(?:^\d+\n)?)(?P<start>^\d+:\d{2}:\d{2},\d{3}) --> (?P<end>\d+:\d{2}:\d{2},\d{3})\n(?P<text>(?:.+\n)+)",
    )
    .unwrap()
});

static VTT_CUE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)(?P<index>(?:^\d+\n)?)(?P<start>^\d+:\d{2}:\d{2}\.\d{3}) --> (?P<end>\d+:\d{2}:\d{2}\.\d{3})\n(?P<text>(?:.+\n)+)",
    )
    .unwrap()
});

/// Parse raw caption text into an ordered sequence of cues.
///
/// Cues keep their literal index line when present (no cross-cue
/// validation); cues without one get their 1-based position in appearance
/// order. Text that matches no cue block at all yields an empty sequence.
pub fn parse_cue_blocks(raw_text: &str, format: CaptionFormat) -> Vec<CaptionCue> {
    let pattern = match format {
        CaptionFormat::Srt => &SRT_CUE_REGEX,
        CaptionFormat::Vtt => &VTT_CUE_REGEX,
    };

    // The block pattern requires every text line to end in a newline.
    let mut content = raw_text.replace("\r\n", "\n");
    if !content.ends_with('\n') {
        content.push('\n');
    }

    let mut cues = Vec::new();
    for caps in pattern.captures_iter(&content) {
        // Unreachable in practice: the block pattern embeds the timecode
        // pattern, so these matched substrings always parse.
        let (Ok(start), Ok(end)) = (
            parse_timecode(&caps["start"], format),
            parse_timecode(&caps["end"], format),
        ) else {
            continue;
        };

        let index = caps["index"]
            .trim()
            .parse::<usize>()
            .unwrap_or(cues.len() + 1);

        cues.push(CaptionCue::new(
            index,
            start,
            end,
            normalize_text(&caps["text"]),
        ));
    }

    cues
}

/// Flatten a multi-line cue body to a single normalized line: non-breaking
/// spaces become ordinary spaces, lines are joined with a single space, and
/// the result is trimmed.
fn normalize_text(text: &str) -> String {
    text.replace('\u{a0}', " ")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
