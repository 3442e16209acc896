/*!
 * Error types for the vidcap application.
 *
 * This module contains custom error types for different parts of the
 * application, using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while parsing, serializing, or combining captions
#[derive(Error, Debug)]
pub enum CaptionError {
    /// Timecode text does not match the expected pattern
    #[error("Timecode does not match the expected pattern: {0}")]
    InvalidTimecode(String),

    /// Caption file path does not end in a supported suffix
    #[error("Caption file extension must be .srt or .vtt: {0}")]
    UnsupportedExtension(String),

    /// Two tracks cannot be combined because their cue counts differ
    #[error("Track length mismatch: primary has {primary} cues, secondary has {secondary}")]
    LengthMismatch {
        /// Cue count of the primary track
        primary: usize,
        /// Cue count of the secondary track
        secondary: usize,
    },
}

/// Errors that can occur when talking to the translation provider API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur when setting up translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Batch size is outside the range accepted by the provider
    #[error("Batch size must be between 1 and 500, got {0}")]
    InvalidBatchSize(usize),

    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from caption processing
    #[error("Caption error: {0}")]
    Caption(#[from] CaptionError),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
