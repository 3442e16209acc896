/*!
 * Mock translation backend for testing
 *
 * Provides a mock implementation of the TranslationBackend trait so batch
 * translation can be exercised without external API calls. The mock
 * "translates" by uppercasing and can be told to fail or to return a
 * short response from a given batch onwards.
 */

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use vidcap::errors::ProviderError;
use vidcap::providers::TranslationBackend;

/// How the mock should behave on a given call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Return one uppercased translation per input
    Translate,
    /// Return a request-failed error
    Fail,
    /// Return one fewer translation than requested
    ShortResponse,
}

/// Mock translation backend
#[derive(Debug)]
pub struct MockBackend {
    /// Behavior per call index; calls past the end reuse the last entry
    behaviors: Vec<MockBehavior>,
    /// Number of calls received so far, shared so tests can inspect it
    /// after the backend is boxed
    calls: Arc<Mutex<usize>>,
}

impl MockBackend {
    /// A backend that translates every batch successfully
    pub fn translating() -> Self {
        Self::with_behaviors(vec![MockBehavior::Translate])
    }

    /// A backend with scripted per-call behavior
    pub fn with_behaviors(behaviors: Vec<MockBehavior>) -> Self {
        assert!(!behaviors.is_empty(), "mock needs at least one behavior");
        MockBackend {
            behaviors,
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Shared handle to the call counter
    pub fn call_counter(&self) -> Arc<Mutex<usize>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl TranslationBackend for MockBackend {
    async fn translate_batch(
        &self,
        texts: &[String],
        _source_lang: &str,
        _target_lang: &str,
    ) -> Result<Vec<String>, ProviderError> {
        let call_index = {
            let mut calls = self.calls.lock().unwrap();
            let index = *calls;
            *calls += 1;
            index
        };

        let behavior = self
            .behaviors
            .get(call_index)
            .copied()
            .unwrap_or(*self.behaviors.last().unwrap());

        match behavior {
            MockBehavior::Translate => Ok(texts.iter().map(|t| t.to_uppercase()).collect()),
            MockBehavior::Fail => Err(ProviderError::RequestFailed(
                "mock backend was told to fail".to_string(),
            )),
            MockBehavior::ShortResponse => Ok(texts
                .iter()
                .take(texts.len().saturating_sub(1))
                .map(|t| t.to_uppercase())
                .collect()),
        }
    }
}
