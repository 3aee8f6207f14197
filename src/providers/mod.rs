//! Video generation providers for elizaOS
//!
//! Providers supply contextual information for agent decision-making.

mod capabilities;

pub use capabilities::CapabilitiesProvider;

use async_trait::async_trait;
use serde_json::Value;

/// Context provided to providers
#[derive(Debug, Clone, Default)]
pub struct ProviderContext {
    /// Room/conversation ID
    pub room_id: Option<String>,
    /// Current user ID
    pub user_id: Option<String>,
}

/// Trait for video generation providers
#[async_trait]
pub trait VideoGenerationProvider: Send + Sync {
    /// Provider name
    fn name(&self) -> &str;

    /// Provider description
    fn description(&self) -> &str;

    /// Get the provider's data for the current context
    async fn get(&self, context: &ProviderContext) -> Value;
}

/// Get all available providers
pub fn get_all_providers() -> Vec<Box<dyn VideoGenerationProvider>> {
    vec![Box::new(CapabilitiesProvider)]
}
