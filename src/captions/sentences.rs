//! Sentence-boundary segmentation.
//!
//! Both operations here group time-ordered fragments into cues spanning
//! whole sentences, closing a group when a fragment ends in terminal
//! punctuation. A trailing group that never sees terminal punctuation is
//! dropped rather than flushed: it has no defined end time.

use super::{CaptionCue, WordToken};

const SENTENCE_TERMINALS: [char; 3] = ['.', '!', '?'];

fn ends_sentence(text: &str) -> bool {
    text.ends_with(SENTENCE_TERMINALS)
}

/// Accumulates fragments into one sentence-spanning cue at a time.
struct SentenceAccumulator {
    cues: Vec<CaptionCue>,
    start: Option<f64>,
    text: String,
}

impl SentenceAccumulator {
    fn new() -> Self {
        SentenceAccumulator {
            cues: Vec::new(),
            start: None,
            text: String::new(),
        }
    }

    /// Append one fragment; `start` is remembered from the first fragment
    /// of the group, `end` closes the group when the fragment ends a
    /// sentence.
    fn push(&mut self, text: &str, start: f64, end: f64) {
        if self.start.is_none() {
            self.start = Some(start);
        }

        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(text);

        if ends_sentence(text) {
            let index = self.cues.len() + 1;
            let group_start = self.start.take().unwrap_or(start);
            let text = std::mem::take(&mut self.text);
            self.cues.push(CaptionCue::new(index, group_start, end, text));
        }
    }

    /// Finish, discarding any unterminated trailing group.
    fn finish(self) -> Vec<CaptionCue> {
        self.cues
    }
}

/// Convert a flat word-timestamp stream into caption cues, grouping words
/// on sentence boundaries.
pub fn merge_word_timestamps(tokens: &[WordToken]) -> Vec<CaptionCue> {
    let mut acc = SentenceAccumulator::new();
    for token in tokens {
        acc.push(token.text.trim(), token.start, token.end);
    }
    acc.finish()
}

/// Re-group a cue sequence into coarser cues whose text spans whole
/// sentences, renumbering indices from 1.
pub fn to_sentences(cues: &[CaptionCue]) -> Vec<CaptionCue> {
    let mut acc = SentenceAccumulator::new();
    for cue in cues {
        acc.push(&cue.text, cue.start, cue.end);
    }
    acc.finish()
}
