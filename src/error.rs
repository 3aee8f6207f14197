//! Error types for the video generation plugin
//!
//! Provides strongly-typed errors that fail fast with clear messages.

use thiserror::Error;

/// Result type alias for video generation operations
pub type Result<T> = std::result::Result<T, VideoGenerationError>;

/// Video generation plugin error types
///
/// All errors are designed to fail fast with clear, actionable messages.
/// Provider errors are always caught inside the action handler and converted
/// into a structured failure result - they never escape to the host runtime.
#[derive(Debug, Error)]
pub enum VideoGenerationError {
    /// Missing API key for the generation provider
    #[error("Missing FAL_API_KEY - video generation is disabled")]
    MissingApiKey,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Service is already running
    #[error("Video generation service is already running")]
    AlreadyRunning,

    /// HTTP transport error from the generation API call
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the generation API
    #[error("Generation API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code returned by the provider
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Response payload did not contain the expected video URL
    #[error("Invalid generation response: {0}")]
    InvalidResponse(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for VideoGenerationError {
    fn from(err: serde_json::Error) -> Self {
        VideoGenerationError::SerializationError(err.to_string())
    }
}
