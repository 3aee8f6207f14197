//! Capabilities provider

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{ProviderContext, VideoGenerationProvider};
use crate::types::{COMMAND_PREFIXES, VIDEO_DURATION_SECONDS, VIDEO_MODEL_ID};

/// Provider describing what the video generation plugin can do
pub struct CapabilitiesProvider;

#[async_trait]
impl VideoGenerationProvider for CapabilitiesProvider {
    fn name(&self) -> &str {
        "VIDEO_GENERATION_CAPABILITIES"
    }

    fn description(&self) -> &str {
        "Describes the text-to-video capability: model, clip duration, and trigger phrases."
    }

    async fn get(&self, _context: &ProviderContext) -> Value {
        json!({
            "model": VIDEO_MODEL_ID,
            "duration_seconds": VIDEO_DURATION_SECONDS,
            "trigger_prefixes": COMMAND_PREFIXES,
        })
    }
}
