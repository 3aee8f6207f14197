//! Video generation actions for elizaOS
//!
//! Actions define what the agent can do with the generation API.

mod generate_video;

pub use generate_video::GenerateVideoAction;

use async_trait::async_trait;
use serde_json::Value;

use crate::client::VideoGenerationClient;
use crate::config::VideoGenerationConfig;

/// Context provided to actions
#[derive(Debug, Clone)]
pub struct ActionContext {
    /// The incoming message/trigger
    pub message: Value,
    /// Room/conversation ID
    pub room_id: Option<String>,
    /// Current agent state
    pub state: Value,
}

/// A message delivered to the optional live-notification callback
#[derive(Debug, Clone)]
pub struct ActionReply {
    /// Human-readable reply text
    pub text: String,
}

/// Optional per-call sink for live notifications
///
/// Absence means "no live notification", not an error.
pub type ReplyCallback = dyn Fn(ActionReply) + Send + Sync;

/// Result of executing an action
#[derive(Debug, Clone)]
pub struct ActionResult {
    /// Whether the action succeeded
    pub success: bool,
    /// User-facing response text
    pub text: Option<String>,
    /// Structured values produced by the action
    pub values: Option<Value>,
    /// Contextual metadata
    pub data: Option<Value>,
    /// Underlying error detail on failure
    pub error: Option<String>,
}

impl ActionResult {
    /// Create a successful result with structured values
    pub fn success_with_values(text: impl Into<String>, values: Value) -> Self {
        Self {
            success: true,
            text: Some(text.into()),
            values: Some(values),
            data: None,
            error: None,
        }
    }

    /// Create a failed result with user-facing text
    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            success: false,
            text: Some(text.into()),
            values: None,
            data: None,
            error: None,
        }
    }

    /// Create a failed result carrying error detail
    pub fn failure_with_error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            text: None,
            values: None,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Attach contextual metadata (builder pattern)
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// Trait for video generation actions
#[async_trait]
pub trait VideoGenerationAction: Send + Sync {
    /// Action name
    fn name(&self) -> &str;

    /// Action description
    fn description(&self) -> &str;

    /// Similar names/aliases for this action
    fn similes(&self) -> Vec<&str>;

    /// Validate the action can be executed
    ///
    /// This is a precondition gate with no side effects beyond logging.
    async fn validate(&self, context: &ActionContext, config: &VideoGenerationConfig) -> bool;

    /// Execute the action
    ///
    /// Always returns a structured result; failures are reported in the
    /// result rather than propagated.
    async fn handler(
        &self,
        context: &ActionContext,
        client: &VideoGenerationClient,
        callback: Option<&ReplyCallback>,
    ) -> ActionResult;
}

/// Get all available actions
pub fn get_all_actions() -> Vec<Box<dyn VideoGenerationAction>> {
    vec![Box::new(GenerateVideoAction)]
}
