use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code (ISO)
    pub source_language: String,

    /// Target language code (ISO)
    pub target_language: String,

    /// Translation config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Transcription config
    #[serde(default)]
    pub transcription: TranscriptionConfig,

    /// Download config
    #[serde(default)]
    pub download: DownloadConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// DeepL translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// API key for the DeepL service
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Service endpoint URL
    #[serde(default = "default_deepl_endpoint")]
    pub endpoint: String,

    /// Cues per translation request (the DeepL form accepts at most 500
    /// text fields per call)
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Merge cues into whole sentences before translating
    #[serde(default)]
    pub trim_to_sentences: bool,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: default_deepl_endpoint(),
            batch_size: default_batch_size(),
            timeout_secs: default_timeout_secs(),
            trim_to_sentences: false,
        }
    }
}

/// Speech-to-text configuration for the whisper CLI
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranscriptionConfig {
    /// Whisper model name (e.g., "base", "small", "medium")
    #[serde(default = "default_whisper_model")]
    pub model: String,
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            model: default_whisper_model(),
        }
    }
}

/// Download configuration for the yt-dlp collaborator
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DownloadConfig {
    /// Video resolutions to try, in order of preference
    #[serde(default = "default_resolutions")]
    pub resolutions: Vec<String>,

    /// Caption formats to fetch from YouTube ("srt", "vtt")
    #[serde(default = "default_caption_formats")]
    pub caption_formats: Vec<String>,

    /// Directory that per-video output directories are created under
    #[serde(default = "default_output_root")]
    pub output_root: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            resolutions: default_resolutions(),
            caption_formats: default_caption_formats(),
            output_root: default_output_root(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_deepl_endpoint() -> String {
    "https://api-free.deepl.com/v2/translate".to_string()
}

fn default_batch_size() -> usize {
    500
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_whisper_model() -> String {
    "base".to_string()
}

fn default_resolutions() -> Vec<String> {
    vec!["1080p".to_string(), "720p".to_string()]
}

fn default_caption_formats() -> Vec<String> {
    vec!["srt".to_string()]
}

fn default_output_root() -> String {
    "outputs".to_string()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate languages
        let _source_name = crate::language_utils::get_language_name(&self.source_language)?;
        let _target_name = crate::language_utils::get_language_name(&self.target_language)?;

        // The DeepL form accepts 1 to 500 text fields per request
        if self.translation.batch_size < 1 || self.translation.batch_size > 500 {
            return Err(anyhow!(
                "translation.batch_size must be between 1 and 500, got {}",
                self.translation.batch_size
            ));
        }

        for format in &self.download.caption_formats {
            if format != "srt" && format != "vtt" {
                return Err(anyhow!(
                    "download.caption_formats entries must be 'srt' or 'vtt', got '{}'",
                    format
                ));
            }
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: "en".to_string(),
            target_language: "ja".to_string(),
            translation: TranslationConfig::default(),
            transcription: TranscriptionConfig::default(),
            download: DownloadConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
