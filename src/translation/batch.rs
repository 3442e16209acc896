/*!
 * Batch translation processing.
 *
 * Batches are sent strictly in order, one at a time. A failed batch, or a
 * response whose length disagrees with its request, stops the loop; the
 * caller receives everything translated up to that point and must treat a
 * short result as partial success.
 */

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};

use crate::captions::CaptionCue;
use crate::errors::TranslationError;
use crate::providers::TranslationBackend;

/// Batch translator for processing caption cues in fixed-size batches
pub struct BatchTranslator {
    /// The translation backend to use
    backend: Box<dyn TranslationBackend>,

    /// Cues per request, validated to 1..=500 at construction
    batch_size: usize,
}

impl BatchTranslator {
    /// Create a new batch translator. The batch size must be between 1 and
    /// 500 inclusive, matching the DeepL per-request text limit.
    pub fn new(
        backend: Box<dyn TranslationBackend>,
        batch_size: usize,
    ) -> Result<Self, TranslationError> {
        if batch_size < 1 || batch_size > 500 {
            return Err(TranslationError::InvalidBatchSize(batch_size));
        }

        Ok(Self {
            backend,
            batch_size,
        })
    }

    /// Translate a cue track, preserving indices and timing and replacing
    /// only the text of each cue.
    ///
    /// Returns the cues translated before the first failed batch; a result
    /// shorter than the input means a batch failed mid-way and the
    /// remainder was skipped.
    pub async fn translate_cues(
        &self,
        cues: &[CaptionCue],
        source_lang: &str,
        target_lang: &str,
    ) -> Vec<CaptionCue> {
        let mut translated: Vec<CaptionCue> = Vec::with_capacity(cues.len());

        let num_batches = cues.len().div_ceil(self.batch_size);
        let progress = ProgressBar::new(num_batches as u64);
        progress.set_style(
            ProgressStyle::with_template("{msg} [{bar:40}] {pos}/{len} batches")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        progress.set_message("Translating");

        for (batch_index, batch) in cues.chunks(self.batch_size).enumerate() {
            let texts: Vec<String> = batch.iter().map(|cue| cue.text.clone()).collect();

            let response = match self
                .backend
                .translate_batch(&texts, source_lang, target_lang)
                .await
            {
                Ok(response) => response,
                Err(e) => {
                    warn!(
                        "Translation batch {}/{} failed, keeping {} cues translated so far: {}",
                        batch_index + 1,
                        num_batches,
                        translated.len(),
                        e
                    );
                    break;
                }
            };

            if response.len() != batch.len() {
                warn!(
                    "Translation batch {}/{} returned {} texts for {} cues, keeping {} cues translated so far",
                    batch_index + 1,
                    num_batches,
                    response.len(),
                    batch.len(),
                    translated.len()
                );
                break;
            }

            translated.extend(
                batch
                    .iter()
                    .zip(response)
                    .map(|(cue, text)| CaptionCue { text, ..cue.clone() }),
            );

            debug!(
                "Translated batch {}/{} ({} cues)",
                batch_index + 1,
                num_batches,
                batch.len()
            );
            progress.inc(1);
        }

        progress.finish_and_clear();
        translated
    }
}
