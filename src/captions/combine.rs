//! Structural merge of two parallel caption tracks.

use super::CaptionCue;
use crate::errors::CaptionError;

/// Merge two cue-aligned tracks into one, stacking the secondary text under
/// the primary text per cue. The primary track's indices and timing are
/// kept as-is; no timing re-alignment is attempted, so the caller must
/// ensure the tracks were produced from the same cue sequence.
pub fn combine(
    primary: &[CaptionCue],
    secondary: &[CaptionCue],
) -> Result<Vec<CaptionCue>, CaptionError> {
    if primary.len() != secondary.len() {
        return Err(CaptionError::LengthMismatch {
            primary: primary.len(),
            secondary: secondary.len(),
        });
    }

    let combined = primary
        .iter()
        .zip(secondary.iter())
        .map(|(first, second)| CaptionCue {
            text: format!("{}\n{}", first.text, second.text),
            ..first.clone()
        })
        .collect();

    Ok(combined)
}
