//! HTTP route definitions exposed by the plugin

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::PLUGIN_NAME;

/// HTTP method types for routes
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// GET request
    Get,
    /// POST request
    Post,
}

/// Route definition registered with the host runtime
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// HTTP method type
    #[serde(rename = "type")]
    pub method: HttpMethod,
    /// Route path
    pub path: String,
    /// Route name (required for public routes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether the route is public
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
}

/// Get all routes exposed by this plugin
pub fn get_routes() -> Vec<Route> {
    vec![Route {
        method: HttpMethod::Get,
        path: "/video-generation/status".to_string(),
        name: Some("Video Generation Status".to_string()),
        public: Some(true),
    }]
}

/// Handler for the status route
pub fn status_handler() -> Value {
    json!({
        "status": "ok",
        "plugin": PLUGIN_NAME,
        "timestamp": Utc::now().to_rfc3339(),
    })
}
