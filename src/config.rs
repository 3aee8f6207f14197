//! Video generation plugin configuration
//!
//! Configuration can be loaded from environment variables or constructed programmatically.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, VideoGenerationError};

/// Default base URL of the generation API
pub const DEFAULT_BASE_URL: &str = "https://fal.run";

/// Default HTTP timeout in seconds
///
/// Generation calls are long-running; the client timeout is the only waiting
/// policy layered on top of the provider.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 300;

/// Video generation plugin configuration
///
/// Contains the credential and settings required to call the text-to-video API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoGenerationConfig {
    /// API key for the generation provider (required)
    pub api_key: String,

    /// Optional free-form plugin setting, unused by the generation flow
    pub example_setting: Option<String>,

    /// Base URL of the generation API
    pub base_url: String,

    /// HTTP timeout in seconds for generation calls
    pub timeout_seconds: u64,
}

impl VideoGenerationConfig {
    /// Create a new configuration with the required credential only
    ///
    /// # Example
    ///
    /// ```
    /// use elizaos_plugin_video_generation::VideoGenerationConfig;
    ///
    /// let config = VideoGenerationConfig::new("your-api-key".to_string());
    /// ```
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            example_setting: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Required Variables
    ///
    /// - `FAL_API_KEY`: Generation API key
    ///
    /// # Optional Variables
    ///
    /// - `EXAMPLE_PLUGIN_VARIABLE`: Optional plugin setting
    ///
    /// # Errors
    ///
    /// Returns `VideoGenerationError::MissingApiKey` if the key is missing,
    /// or `ConfigError` if it is set but empty.
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var("FAL_API_KEY").map_err(|_| VideoGenerationError::MissingApiKey)?;

        if api_key.is_empty() {
            return Err(VideoGenerationError::ConfigError(
                "FAL_API_KEY cannot be empty".to_string(),
            ));
        }

        let example_setting = std::env::var("EXAMPLE_PLUGIN_VARIABLE").ok();

        Ok(Self {
            api_key,
            example_setting,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        })
    }

    /// Set the optional plugin setting (builder pattern)
    pub fn with_example_setting(mut self, value: String) -> Self {
        self.example_setting = Some(value);
        self
    }

    /// Set the generation API base URL (builder pattern)
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Set the HTTP timeout in seconds (builder pattern)
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Whether a non-empty credential is configured
    ///
    /// This is the gate checked by action validation before the generation
    /// action is allowed to execute.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Validate configuration
    ///
    /// The optional setting only produces a warning when absent; the
    /// credential is required.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(VideoGenerationError::ConfigError(
                "API key cannot be empty".to_string(),
            ));
        }

        if self.base_url.is_empty() {
            return Err(VideoGenerationError::ConfigError(
                "Base URL cannot be empty".to_string(),
            ));
        }

        if self.example_setting.is_none() {
            warn!("EXAMPLE_PLUGIN_VARIABLE is not set (this is optional)");
        }

        Ok(())
    }
}
