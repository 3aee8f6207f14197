//! Generate video action

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, error, warn};

use super::{ActionContext, ActionReply, ActionResult, ReplyCallback, VideoGenerationAction};
use crate::client::VideoGenerationClient;
use crate::config::VideoGenerationConfig;
use crate::types::{normalize_prompt, FailureReason, GenerationOutcome};

/// Fixed user-facing text when the request carries no usable prompt
const NEED_DESCRIPTION_TEXT: &str = "I need a description of the video you want me to create.";

/// Action to generate a video from a text prompt
pub struct GenerateVideoAction;

impl GenerateVideoAction {
    fn message_text<'a>(&self, context: &'a ActionContext) -> Option<&'a str> {
        context
            .message
            .get("content")
            .and_then(|c| c.get("text"))
            .and_then(|t| t.as_str())
    }

    fn message_source<'a>(&self, context: &'a ActionContext) -> &'a str {
        context
            .message
            .get("source")
            .and_then(|s| s.as_str())
            .unwrap_or("unknown")
    }

    /// Format the outcome for both consumers: the optional live callback and
    /// the structured result returned to the caller.
    fn report(
        &self,
        context: &ActionContext,
        outcome: GenerationOutcome,
        callback: Option<&ReplyCallback>,
    ) -> ActionResult {
        match outcome {
            GenerationOutcome::Success { video_url, prompt } => {
                if let Some(callback) = callback {
                    callback(ActionReply {
                        text: format!("✅ Generated video: {}", video_url),
                    });
                }

                ActionResult::success_with_values(
                    format!("Generated a video for: {}", prompt),
                    json!({
                        "videoUrl": video_url,
                        "prompt": prompt,
                    }),
                )
            }
            GenerationOutcome::Failure { reason, detail } => {
                let metadata = json!({
                    "action": self.name(),
                    "source": self.message_source(context),
                });

                match reason {
                    FailureReason::MissingText | FailureReason::EmptyPrompt => {
                        ActionResult::failure(NEED_DESCRIPTION_TEXT).with_data(metadata)
                    }
                    FailureReason::ProviderError => ActionResult::failure_with_error(
                        detail.unwrap_or_else(|| "unknown provider error".to_string()),
                    )
                    .with_data(metadata),
                }
            }
        }
    }
}

#[async_trait]
impl VideoGenerationAction for GenerateVideoAction {
    fn name(&self) -> &str {
        "GENERATE_VIDEO"
    }

    fn description(&self) -> &str {
        "Generates a short video from a text prompt using an external \
         text-to-video API and replies with the video URL."
    }

    fn similes(&self) -> Vec<&str> {
        vec!["CREATE_VIDEO", "MAKE_VIDEO", "RENDER_VIDEO", "TEXT_TO_VIDEO"]
    }

    async fn validate(&self, _context: &ActionContext, config: &VideoGenerationConfig) -> bool {
        if config.has_api_key() {
            true
        } else {
            warn!("FAL_API_KEY is not set - video generation is disabled");
            false
        }
    }

    async fn handler(
        &self,
        context: &ActionContext,
        client: &VideoGenerationClient,
        callback: Option<&ReplyCallback>,
    ) -> ActionResult {
        let prompt = match normalize_prompt(self.message_text(context)) {
            Ok(prompt) => prompt,
            Err(reason) => {
                debug!(reason = %reason, "Rejecting video generation request");
                return self.report(context, GenerationOutcome::failure(reason), callback);
            }
        };

        let outcome = match client.generate_video(&prompt).await {
            Ok(video_url) => GenerationOutcome::success(video_url, prompt),
            Err(err) => {
                error!(error = %err, "Video generation failed");
                GenerationOutcome::failure_with_detail(
                    FailureReason::ProviderError,
                    err.to_string(),
                )
            }
        };

        self.report(context, outcome, callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn context_with_text(text: Option<&str>) -> ActionContext {
        let content = match text {
            Some(t) => json!({ "text": t }),
            None => json!({}),
        };
        ActionContext {
            message: json!({
                "source": "discord",
                "content": content,
            }),
            room_id: Some("room-uuid".to_string()),
            state: json!({}),
        }
    }

    fn test_client() -> VideoGenerationClient {
        // Unroutable base URL; tests below never reach the network.
        let config = VideoGenerationConfig::new("key".to_string())
            .with_base_url("http://127.0.0.1:9".to_string())
            .with_timeout_seconds(1);
        VideoGenerationClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_validate_requires_api_key() {
        let action = GenerateVideoAction;
        let context = context_with_text(Some("create video: dolphins"));

        let config = VideoGenerationConfig::new("key".to_string());
        assert!(action.validate(&context, &config).await);

        let config = VideoGenerationConfig::new(String::new());
        assert!(!action.validate(&context, &config).await);
    }

    #[tokio::test]
    async fn test_handler_missing_text() {
        let action = GenerateVideoAction;
        let client = test_client();
        let context = context_with_text(None);

        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();
        let callback: Box<ReplyCallback> = Box::new(move |_reply: ActionReply| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        let result = action.handler(&context, &client, Some(&*callback)).await;
        assert!(!result.success);
        assert_eq!(result.text.as_deref(), Some(NEED_DESCRIPTION_TEXT));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let data = result.data.expect("failure carries metadata");
        assert_eq!(data["action"], "GENERATE_VIDEO");
        assert_eq!(data["source"], "discord");
    }

    #[tokio::test]
    async fn test_handler_empty_prompt() {
        let action = GenerateVideoAction;
        let client = test_client();

        for text in ["create video:   ", "make video:"] {
            let context = context_with_text(Some(text));
            let result = action.handler(&context, &client, None).await;
            assert!(!result.success);
            assert_eq!(result.text.as_deref(), Some(NEED_DESCRIPTION_TEXT));
            assert!(result.error.is_none());
        }
    }

    #[tokio::test]
    async fn test_handler_provider_error_is_contained() {
        let action = GenerateVideoAction;
        let client = test_client();
        let context = context_with_text(Some("create video: dolphins jumping"));

        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();
        let callback: Box<ReplyCallback> = Box::new(move |_reply: ActionReply| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        // The client cannot reach the endpoint; the error must surface as a
        // structured failure, not a panic or propagated error.
        let result = action.handler(&context, &client, Some(&*callback)).await;
        assert!(!result.success);
        assert!(result.error.is_some());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let data = result.data.expect("failure carries metadata");
        assert_eq!(data["action"], "GENERATE_VIDEO");
    }

    #[test]
    fn test_report_success_invokes_callback_once() {
        let action = GenerateVideoAction;
        let context = context_with_text(Some("create video: dolphins"));

        let calls = Arc::new(AtomicUsize::new(0));
        let texts = Arc::new(std::sync::Mutex::new(Vec::<String>::new()));
        let calls_clone = calls.clone();
        let texts_clone = texts.clone();
        let callback: Box<ReplyCallback> = Box::new(move |reply: ActionReply| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            texts_clone.lock().unwrap().push(reply.text);
        });

        let outcome = GenerationOutcome::success(
            "https://x/y.mp4".to_string(),
            "dolphins jumping".to_string(),
        );
        let result = action.report(&context, outcome, Some(&*callback));

        assert!(result.success);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(texts.lock().unwrap()[0].contains("https://x/y.mp4"));

        let values: Value = result.values.expect("success carries values");
        assert_eq!(values["videoUrl"], "https://x/y.mp4");
        assert_eq!(values["prompt"], "dolphins jumping");
    }

    #[test]
    fn test_report_success_without_callback() {
        let action = GenerateVideoAction;
        let context = context_with_text(Some("create video: dolphins"));

        let outcome =
            GenerationOutcome::success("https://x/y.mp4".to_string(), "dolphins".to_string());
        let result = action.report(&context, outcome, None);
        assert!(result.success);
    }
}
