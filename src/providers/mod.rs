/*!
 * Provider implementations for remote translation services.
 *
 * This module contains the HTTP client for the DeepL API and the trait the
 * batch translator is written against, allowing tests to substitute a mock
 * backend.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for translation backends
///
/// A backend takes a batch of strings plus source/target language codes and
/// returns the translated strings. A well-behaved backend returns exactly
/// one translation per input string; the batch translator treats a
/// different length as a failed batch.
#[async_trait]
pub trait TranslationBackend: Send + Sync + Debug {
    /// Translate a batch of texts from `source_lang` to `target_lang`
    ///
    /// # Arguments
    /// * `texts` - The texts to translate, at most 500 per call
    /// * `source_lang` - Uppercase ISO 639-1 source language code
    /// * `target_lang` - Uppercase ISO 639-1 target language code
    ///
    /// # Returns
    /// * `Result<Vec<String>, ProviderError>` - One translation per input, or an error
    async fn translate_batch(
        &self,
        texts: &[String],
        source_lang: &str,
        target_lang: &str,
    ) -> Result<Vec<String>, ProviderError>;
}

pub mod deepl;

pub use deepl::DeepL;
