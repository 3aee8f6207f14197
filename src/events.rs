//! Runtime event subscriptions
//!
//! The plugin subscribes to a small set of lifecycle events and only logs
//! them; no state is kept.

use serde_json::Value;
use std::fmt;
use tracing::debug;

/// Runtime events this plugin subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    /// A text message was received
    MessageReceived,
    /// A voice message was received
    VoiceMessageReceived,
    /// The agent connected to a world
    WorldConnected,
    /// The agent joined a world
    WorldJoined,
}

impl EventType {
    /// Wire name of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MessageReceived => "MESSAGE_RECEIVED",
            Self::VoiceMessageReceived => "VOICE_MESSAGE_RECEIVED",
            Self::WorldConnected => "WORLD_CONNECTED",
            Self::WorldJoined => "WORLD_JOINED",
        }
    }

    /// All events this plugin subscribes to
    pub fn all() -> [EventType; 4] {
        [
            Self::MessageReceived,
            Self::VoiceMessageReceived,
            Self::WorldConnected,
            Self::WorldJoined,
        ]
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Handle a runtime event by logging it
pub fn handle_event(event: EventType, payload: &Value) {
    debug!(event = %event, ?payload, "Event received");
}
