//! HTTP client for the text-to-video generation API

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tracing::{debug, error};

use crate::config::VideoGenerationConfig;
use crate::error::{Result, VideoGenerationError};
use crate::types::{GenerateVideoRequest, GenerateVideoResponse, VIDEO_MODEL_ID};

/// Client for the text-to-video generation endpoint
///
/// Issues exactly one synchronous request per generation; no retry, polling,
/// or queueing is layered on top. Concurrent invocations are independent.
pub struct VideoGenerationClient {
    config: VideoGenerationConfig,
    http_client: reqwest::Client,
}

impl VideoGenerationClient {
    /// Create a new client from a configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the underlying HTTP client cannot be built.
    pub fn new(config: VideoGenerationConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .default_headers(headers)
            .build()
            .map_err(|e| {
                VideoGenerationError::ConfigError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Get the client configuration
    pub fn config(&self) -> &VideoGenerationConfig {
        &self.config
    }

    /// Generate a video from a validated, non-empty prompt
    ///
    /// Sends one POST to the fixed model endpoint with the prompt and the
    /// fixed duration, then extracts `data.video.url` from the response.
    ///
    /// # Errors
    ///
    /// Returns `Http` for transport failures, `Api` for non-success status
    /// codes, and `InvalidResponse` when the payload lacks a video URL.
    pub async fn generate_video(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/{}", self.config.base_url, VIDEO_MODEL_ID);
        let request = GenerateVideoRequest::new(prompt.to_string());

        debug!(model = VIDEO_MODEL_ID, "Requesting video generation");

        let response = self
            .http_client
            .post(&url)
            .header(AUTHORIZATION, format!("Key {}", self.config.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, "Video generation request failed");
            return Err(VideoGenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: GenerateVideoResponse = response.json().await?;

        match payload.video_url() {
            Some(video_url) => {
                debug!(video_url, "Video generated");
                Ok(video_url.to_string())
            }
            None => Err(VideoGenerationError::InvalidResponse(
                "response is missing data.video.url".to_string(),
            )),
        }
    }
}
