/*!
 * Tests for application configuration
 */

use vidcap::app_config::{Config, LogLevel};

/// Test default configuration values
#[test]
fn test_config_default_shouldMatchDocumentedDefaults() {
    let config = Config::default();

    assert_eq!(config.source_language, "en");
    assert_eq!(config.target_language, "ja");
    assert_eq!(config.translation.api_key, "");
    assert_eq!(
        config.translation.endpoint,
        "https://api-free.deepl.com/v2/translate"
    );
    assert_eq!(config.translation.batch_size, 500);
    assert_eq!(config.translation.timeout_secs, 30);
    assert!(!config.translation.trim_to_sentences);
    assert_eq!(config.transcription.model, "base");
    assert_eq!(config.download.resolutions, vec!["1080p", "720p"]);
    assert_eq!(config.download.caption_formats, vec!["srt"]);
    assert_eq!(config.download.output_root, "outputs");
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test that the default configuration validates
#[test]
fn test_config_validate_withDefaults_shouldSucceed() {
    assert!(Config::default().validate().is_ok());
}

/// Test batch size bounds
#[test]
fn test_config_validate_withBatchSizeOutOfRange_shouldFail() {
    let mut config = Config::default();

    config.translation.batch_size = 0;
    assert!(config.validate().is_err());

    config.translation.batch_size = 501;
    assert!(config.validate().is_err());

    config.translation.batch_size = 1;
    assert!(config.validate().is_ok());
}

/// Test caption format whitelist
#[test]
fn test_config_validate_withUnknownCaptionFormat_shouldFail() {
    let mut config = Config::default();
    config.download.caption_formats = vec!["srt".to_string(), "ass".to_string()];
    assert!(config.validate().is_err());

    config.download.caption_formats = vec!["srt".to_string(), "vtt".to_string()];
    assert!(config.validate().is_ok());
}

/// Test language code validation
#[test]
fn test_config_validate_withInvalidLanguage_shouldFail() {
    let mut config = Config::default();
    config.target_language = "xx".to_string();
    assert!(config.validate().is_err());
}

/// Test deserializing a partial config file
#[test]
fn test_config_deserialize_withPartialJson_shouldFillDefaults() {
    let json = r#"{
        "source_language": "fr",
        "target_language": "de",
        "translation": { "api_key": "secret" }
    }"#;
    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.source_language, "fr");
    assert_eq!(config.target_language, "de");
    assert_eq!(config.translation.api_key, "secret");
    assert_eq!(config.translation.batch_size, 500);
    assert_eq!(config.transcription.model, "base");
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test serde round-trip
#[test]
fn test_config_serde_withModifiedConfig_shouldRoundTrip() {
    let mut config = Config::default();
    config.target_language = "fr".to_string();
    config.translation.batch_size = 50;
    config.translation.trim_to_sentences = true;
    config.log_level = LogLevel::Debug;

    let json = serde_json::to_string_pretty(&config).unwrap();
    let restored: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.target_language, "fr");
    assert_eq!(restored.translation.batch_size, 50);
    assert!(restored.translation.trim_to_sentences);
    assert_eq!(restored.log_level, LogLevel::Debug);
}

/// Test that log levels serialize lowercase
#[test]
fn test_log_level_serialize_shouldUseLowercaseNames() {
    assert_eq!(serde_json::to_string(&LogLevel::Warn).unwrap(), "\"warn\"");
    assert_eq!(serde_json::to_string(&LogLevel::Trace).unwrap(), "\"trace\"");
}
