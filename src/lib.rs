//! elizaOS Video Generation Plugin
//!
//! This crate lets an elizaOS agent generate short videos from text prompts
//! via an external text-to-video HTTP API. It registers one action
//! (`GENERATE_VIDEO`), a capabilities provider, a no-op lifecycle service, a
//! status route, and a handful of log-only event subscriptions.
//!
//! # Example
//!
//! ```no_run
//! use elizaos_plugin_video_generation::{VideoGenerationClient, VideoGenerationConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = VideoGenerationConfig::from_env().expect("Missing FAL_API_KEY");
//!     let client = VideoGenerationClient::new(config).expect("Failed to build client");
//!     let url = client.generate_video("dolphins jumping").await.unwrap();
//!     println!("{}", url);
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod actions;
pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod providers;
pub mod routes;
pub mod service;
pub mod types;

// Re-exports for convenience
pub use actions::{
    get_all_actions, ActionContext, ActionReply, ActionResult, GenerateVideoAction, ReplyCallback,
    VideoGenerationAction,
};
pub use client::VideoGenerationClient;
pub use config::VideoGenerationConfig;
pub use error::{Result, VideoGenerationError};
pub use events::{handle_event, EventType};
pub use providers::{get_all_providers, ProviderContext, VideoGenerationProvider};
pub use routes::{get_routes, status_handler, Route};
pub use service::VideoGenerationService;
pub use types::{FailureReason, GenerationOutcome};

/// Plugin name
pub const PLUGIN_NAME: &str = "video-generation";
/// Plugin version matching Cargo.toml
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Plugin description
pub const PLUGIN_DESCRIPTION: &str = "Text-to-video generation for elizaOS agents";

/// Full plugin descriptor registered with the host runtime at startup
pub struct Plugin {
    /// Plugin name
    pub name: String,
    /// Plugin description
    pub description: String,
    /// Plugin version
    pub version: String,
    /// Action handlers
    pub actions: Vec<Box<dyn VideoGenerationAction>>,
    /// Provider handlers
    pub providers: Vec<Box<dyn VideoGenerationProvider>>,
    /// HTTP routes
    pub routes: Vec<Route>,
    /// Event subscriptions
    pub events: Vec<EventType>,
}

/// Create the video generation plugin instance
pub fn plugin() -> Plugin {
    Plugin {
        name: PLUGIN_NAME.to_string(),
        description: PLUGIN_DESCRIPTION.to_string(),
        version: PLUGIN_VERSION.to_string(),
        actions: get_all_actions(),
        providers: get_all_providers(),
        routes: get_routes(),
        events: EventType::all().to_vec(),
    }
}
