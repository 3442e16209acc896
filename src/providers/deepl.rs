use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::Deserialize;

use super::TranslationBackend;
use crate::errors::ProviderError;

/// DeepL client for interacting with the DeepL translation API
#[derive(Debug)]
pub struct DeepL {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (optional, defaults to the free-tier API)
    endpoint: String,
}

/// DeepL translation response
#[derive(Debug, Deserialize)]
pub struct DeepLResponse {
    /// One entry per submitted text, in request order
    pub translations: Vec<DeepLTranslation>,
}

/// Individual translation in a DeepL response
#[derive(Debug, Deserialize)]
pub struct DeepLTranslation {
    /// The translated text
    pub text: String,

    /// Source language detected by the service
    #[serde(default)]
    pub detected_source_language: Option<String>,
}

impl DeepL {
    /// Create a new DeepL client
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Send one translation request. The form carries a repeated `text`
    /// field, one per input string.
    async fn translate_request(
        &self,
        texts: &[String],
        source_lang: &str,
        target_lang: &str,
    ) -> Result<DeepLResponse, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::AuthenticationError(
                "DeepL API key is empty".to_string(),
            ));
        }

        let api_url = if self.endpoint.is_empty() {
            "https://api-free.deepl.com/v2/translate".to_string()
        } else {
            self.endpoint.clone()
        };

        let mut form: Vec<(&str, &str)> = texts.iter().map(|t| ("text", t.as_str())).collect();
        form.push(("source_lang", source_lang));
        form.push(("target_lang", target_lang));

        let response = self
            .client
            .post(&api_url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .form(&form)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("DeepL request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("DeepL API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json::<DeepLResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(format!("DeepL response: {}", e)))
    }
}

#[async_trait]
impl TranslationBackend for DeepL {
    async fn translate_batch(
        &self,
        texts: &[String],
        source_lang: &str,
        target_lang: &str,
    ) -> Result<Vec<String>, ProviderError> {
        let response = self
            .translate_request(texts, source_lang, target_lang)
            .await?;

        Ok(response
            .translations
            .into_iter()
            .map(|item| item.text)
            .collect())
    }
}
