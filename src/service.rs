//! Video generation service lifecycle
//!
//! The service performs no background work; it exists to satisfy the host
//! runtime's start/stop service contract.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::config::VideoGenerationConfig;
use crate::error::{Result, VideoGenerationError};

/// Service wrapper registered with the host runtime
pub struct VideoGenerationService {
    config: VideoGenerationConfig,
    running: Arc<RwLock<bool>>,
}

impl VideoGenerationService {
    /// Service type identifier used by the host runtime
    pub const SERVICE_TYPE: &'static str = "video_generation";

    /// Human-readable capability description
    pub const CAPABILITY_DESCRIPTION: &'static str =
        "Generates short videos from text prompts via an external API";

    /// Create a new service from a configuration
    pub fn new(config: VideoGenerationConfig) -> Self {
        Self {
            config,
            running: Arc::new(RwLock::new(false)),
        }
    }

    /// Get the service configuration
    pub fn config(&self) -> &VideoGenerationConfig {
        &self.config
    }

    /// Start the service
    ///
    /// # Errors
    ///
    /// Returns `AlreadyRunning` if the service was already started.
    pub async fn start(&self) -> Result<()> {
        let mut running = self.running.write().await;
        if *running {
            return Err(VideoGenerationError::AlreadyRunning);
        }
        *running = true;
        info!(service = Self::SERVICE_TYPE, "Service started");
        Ok(())
    }

    /// Stop the service
    ///
    /// Stopping a service that is not running is a no-op.
    pub async fn stop(&self) -> Result<()> {
        let mut running = self.running.write().await;
        if *running {
            *running = false;
            info!(service = Self::SERVICE_TYPE, "Service stopped");
        }
        Ok(())
    }

    /// Whether the service is currently running
    pub async fn is_running(&self) -> bool {
        *self.running.read().await
    }
}
