//! Cue-block serializer for both caption grammars.

use std::fmt::Write;

use super::timecode::format_timecode;
use super::{CaptionCue, CaptionFormat};

/// Render a cue sequence into the given grammar's text form.
///
/// Cues are emitted in sequence order with their stored indices; no
/// reordering or renumbering happens here. WebVTT output is prefixed with
/// the `WEBVTT` header line and a blank line.
pub fn render(cues: &[CaptionCue], format: CaptionFormat) -> String {
    let mut out = String::new();

    if format == CaptionFormat::Vtt {
        out.push_str("WEBVTT\n\n");
    }

    for cue in cues {
        // Writing into a String cannot fail
        let _ = write!(
            out,
            "{}\n{} --> {}\n{}\n\n",
            cue.index,
            format_timecode(cue.start, format),
            format_timecode(cue.end, format),
            cue.text
        );
    }

    out
}
