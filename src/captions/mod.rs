/*!
 * Caption data model and format engine.
 *
 * This module contains the canonical in-memory caption representation and
 * the conversions between it and the two supported cue-block text formats.
 * It is split into several submodules:
 *
 * - `timecode`: Clock-text to seconds conversion for both grammars
 * - `parser`: Cue-block parsing into canonical caption records
 * - `render`: Serialization back into either grammar's text form
 * - `sentences`: Sentence segmentation and word-timestamp merging
 * - `combine`: Structural merge of two index-aligned caption tracks
 */

use std::path::Path;

use anyhow::{Context, Result};

use crate::errors::CaptionError;
use crate::file_utils::FileManager;

// Re-export the engine operations for easier usage
pub use self::combine::combine;
pub use self::parser::parse_cue_blocks;
pub use self::render::render;
pub use self::sentences::{merge_word_timestamps, to_sentences};
pub use self::timecode::{format_timecode, parse_timecode, round3};

pub mod combine;
pub mod parser;
pub mod render;
pub mod sentences;
pub mod timecode;

/// Caption text format, selected by file suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionFormat {
    /// SubRip cue blocks, comma before milliseconds
    Srt,
    /// WebVTT cue blocks, dot before milliseconds, `WEBVTT` header
    Vtt,
}

impl CaptionFormat {
    /// Select the format from the last three characters of a path.
    /// Anything other than `srt` or `vtt` is a hard failure.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CaptionError> {
        let path_str = path.as_ref().to_string_lossy();
        match path_str.get(path_str.len().saturating_sub(3)..) {
            Some("srt") => Ok(Self::Srt),
            Some("vtt") => Ok(Self::Vtt),
            _ => Err(CaptionError::UnsupportedExtension(path_str.to_string())),
        }
    }

    /// Delimiter between whole seconds and milliseconds
    pub fn millis_delimiter(&self) -> char {
        match self {
            Self::Srt => ',',
            Self::Vtt => '.',
        }
    }

    /// File suffix for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Srt => "srt",
            Self::Vtt => "vtt",
        }
    }
}

impl std::fmt::Display for CaptionFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// One timed caption entry, the canonical record of the engine
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionCue {
    /// 1-based position in its track
    pub index: usize,

    /// Start time in seconds, millisecond precision
    pub start: f64,

    /// End time in seconds, millisecond precision
    pub end: f64,

    /// Derived length in seconds, always `round3(end - start)`
    pub duration: f64,

    /// Cue text, single line
    pub text: String,
}

impl CaptionCue {
    /// Create a cue. Times are rounded to millisecond precision and the
    /// duration is recomputed, so it can never drift from start/end.
    pub fn new(index: usize, start: f64, end: f64, text: impl Into<String>) -> Self {
        let start = round3(start);
        let end = round3(end);
        CaptionCue {
            index,
            start,
            end,
            duration: round3(end - start),
            text: text.into(),
        }
    }
}

/// A single transcribed word with its own timestamps, finer-grained than a cue
#[derive(Debug, Clone, PartialEq)]
pub struct WordToken {
    /// The spoken word
    pub text: String,

    /// Start time in seconds
    pub start: f64,

    /// End time in seconds
    pub end: f64,
}

impl WordToken {
    /// Create a word token
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        WordToken {
            text: text.into(),
            start,
            end,
        }
    }
}

/// Load a caption file into a track, selecting the grammar from the path
pub fn load_caption_file<P: AsRef<Path>>(path: P) -> Result<Vec<CaptionCue>> {
    let path = path.as_ref();
    let format = CaptionFormat::from_path(path)?;
    let content = FileManager::read_to_string(path)
        .with_context(|| format!("Failed to read caption file: {:?}", path))?;
    Ok(parse_cue_blocks(&content, format))
}

/// Render a track and write it to a file, selecting the grammar from the path
pub fn save_caption<P: AsRef<Path>>(cues: &[CaptionCue], path: P) -> Result<()> {
    let path = path.as_ref();
    let format = CaptionFormat::from_path(path)?;
    FileManager::write_to_file(path, &render(cues, format))
        .with_context(|| format!("Failed to write caption file: {:?}", path))
}
