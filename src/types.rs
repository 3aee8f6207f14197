//! Type definitions for the video generation plugin
//!
//! Strong types for the single generation flow: normalize, invoke, report.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Model identifier on the generation API, treated as an opaque constant
pub const VIDEO_MODEL_ID: &str = "fal-ai/kling-video/v1/standard/text-to-video";

/// Fixed clip duration in seconds, as a string literal per the provider's API
pub const VIDEO_DURATION_SECONDS: &str = "6";

/// Command prefixes recognized (case-insensitively) at the start of a message
pub const COMMAND_PREFIXES: [&str; 2] = ["create video:", "make video:"];

/// Why a generation request failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// The message carried no text at all
    MissingText,
    /// The text was empty after stripping the command prefix
    EmptyPrompt,
    /// The generation API call failed
    ProviderError,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MissingText => "MISSING_TEXT",
            Self::EmptyPrompt => "EMPTY_PROMPT",
            Self::ProviderError => "PROVIDER_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of one generation invocation
///
/// Constructed fresh per invocation; carries no identity beyond the call.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    /// The provider returned a video
    Success {
        /// Absolute URL of the generated video
        video_url: String,
        /// The prompt actually submitted
        prompt: String,
    },
    /// The request was rejected or the provider call failed
    Failure {
        /// Failure classification
        reason: FailureReason,
        /// Underlying error detail, when available
        detail: Option<String>,
    },
}

impl GenerationOutcome {
    /// Create a success outcome
    pub fn success(video_url: String, prompt: String) -> Self {
        Self::Success { video_url, prompt }
    }

    /// Create a failure outcome without detail
    pub fn failure(reason: FailureReason) -> Self {
        Self::Failure {
            reason,
            detail: None,
        }
    }

    /// Create a failure outcome carrying error detail
    pub fn failure_with_detail(reason: FailureReason, detail: String) -> Self {
        Self::Failure {
            reason,
            detail: Some(detail),
        }
    }

    /// Whether this outcome is a success
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Extract and clean a prompt from inbound message text
///
/// Strips one recognized leading command prefix (case-insensitive) and trims
/// surrounding whitespace. Returns `MissingText` when no text is present and
/// `EmptyPrompt` when nothing remains after stripping - the generation API is
/// never called for either.
pub fn normalize_prompt(text: Option<&str>) -> std::result::Result<String, FailureReason> {
    let raw = match text {
        Some(t) if !t.is_empty() => t,
        _ => return Err(FailureReason::MissingText),
    };

    let trimmed = raw.trim();
    let mut cleaned = trimmed;
    for prefix in COMMAND_PREFIXES {
        if let Some(head) = trimmed.get(..prefix.len()) {
            if head.eq_ignore_ascii_case(prefix) {
                cleaned = &trimmed[prefix.len()..];
                break;
            }
        }
    }

    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Err(FailureReason::EmptyPrompt);
    }

    Ok(cleaned.to_string())
}

/// Request body for the text-to-video endpoint
#[derive(Debug, Clone, Serialize)]
pub struct GenerateVideoRequest {
    /// Text prompt describing the video
    pub prompt: String,
    /// Clip duration in seconds, as a string per the provider contract
    pub duration: String,
}

impl GenerateVideoRequest {
    /// Build a request with the fixed duration
    pub fn new(prompt: String) -> Self {
        Self {
            prompt,
            duration: VIDEO_DURATION_SECONDS.to_string(),
        }
    }
}

/// Response payload from the text-to-video endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateVideoResponse {
    /// Result container
    pub data: Option<GenerationData>,
}

/// Result container inside the generation response
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationData {
    /// The generated video, when present
    pub video: Option<GeneratedVideo>,
}

/// Generated video descriptor
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedVideo {
    /// Absolute URL of the video file
    pub url: Option<String>,
}

impl GenerateVideoResponse {
    /// Extract `data.video.url`, if the payload has the expected shape
    pub fn video_url(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|d| d.video.as_ref())
            .and_then(|v| v.url.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_missing_text() {
        assert_eq!(normalize_prompt(None), Err(FailureReason::MissingText));
        assert_eq!(normalize_prompt(Some("")), Err(FailureReason::MissingText));
    }

    #[test]
    fn test_normalize_empty_after_prefix() {
        assert_eq!(
            normalize_prompt(Some("create video:   ")),
            Err(FailureReason::EmptyPrompt)
        );
        assert_eq!(
            normalize_prompt(Some("make video:")),
            Err(FailureReason::EmptyPrompt)
        );
        assert_eq!(
            normalize_prompt(Some("   ")),
            Err(FailureReason::EmptyPrompt)
        );
    }

    #[test]
    fn test_normalize_strips_prefix_case_insensitive() {
        assert_eq!(
            normalize_prompt(Some("Create video: dolphins jumping")),
            Ok("dolphins jumping".to_string())
        );
        assert_eq!(
            normalize_prompt(Some("MAKE VIDEO: a red balloon")),
            Ok("a red balloon".to_string())
        );
    }

    #[test]
    fn test_normalize_without_prefix() {
        assert_eq!(
            normalize_prompt(Some("  dolphins jumping  ")),
            Ok("dolphins jumping".to_string())
        );
    }

    #[test]
    fn test_normalize_strips_only_one_prefix() {
        assert_eq!(
            normalize_prompt(Some("create video: make video: x")),
            Ok("make video: x".to_string())
        );
    }

    #[test]
    fn test_request_uses_fixed_duration() {
        let request = GenerateVideoRequest::new("dolphins".to_string());
        assert_eq!(request.duration, "6");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["prompt"], "dolphins");
        assert_eq!(json["duration"], "6");
    }

    #[test]
    fn test_response_url_extraction() {
        let response: GenerateVideoResponse =
            serde_json::from_str(r#"{"data":{"video":{"url":"https://x/y.mp4"}}}"#).unwrap();
        assert_eq!(response.video_url(), Some("https://x/y.mp4"));

        let response: GenerateVideoResponse = serde_json::from_str(r#"{"data":{}}"#).unwrap();
        assert_eq!(response.video_url(), None);

        let response: GenerateVideoResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.video_url(), None);
    }

    #[test]
    fn test_failure_reason_display() {
        assert_eq!(FailureReason::MissingText.to_string(), "MISSING_TEXT");
        assert_eq!(FailureReason::EmptyPrompt.to_string(), "EMPTY_PROMPT");
        assert_eq!(FailureReason::ProviderError.to_string(), "PROVIDER_ERROR");
    }

    #[test]
    fn test_outcome_constructors() {
        let outcome =
            GenerationOutcome::success("https://x/y.mp4".to_string(), "dolphins".to_string());
        assert!(outcome.is_success());

        let outcome = GenerationOutcome::failure(FailureReason::EmptyPrompt);
        assert!(!outcome.is_success());

        let outcome = GenerationOutcome::failure_with_detail(
            FailureReason::ProviderError,
            "HTTP 500".to_string(),
        );
        match outcome {
            GenerationOutcome::Failure { reason, detail } => {
                assert_eq!(reason, FailureReason::ProviderError);
                assert_eq!(detail.as_deref(), Some("HTTP 500"));
            }
            _ => panic!("expected failure"),
        }
    }
}
