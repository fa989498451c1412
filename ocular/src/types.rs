//! Wire types for the chat completions endpoint.
//!
//! These map directly to the request and response bodies of OpenAI-style
//! `/chat/completions` endpoints. Response fields outside
//! `choices[].message.content` are optional: compatible gateways routinely
//! omit `id`, `model`, or `usage`.

use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Chat completion request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// Model identifier.
    pub model: String,
    /// Conversation messages.
    pub messages: Vec<Message>,
    /// Maximum tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Chat completion response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Completion identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Model that produced the completion.
    #[serde(default)]
    pub model: Option<String>,
    /// Response choices; the first one carries the reply.
    pub choices: Vec<Choice>,
    /// Token usage statistics.
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// One response choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// Choice index.
    #[serde(default)]
    pub index: usize,
    /// The assistant message.
    pub message: ResponseMessage,
    /// Why generation stopped ("stop", "length", ...).
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Assistant message within a choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    /// Message role, normally "assistant".
    #[serde(default)]
    pub role: Option<String>,
    /// The reply text.
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Usage {
    /// Tokens in the prompt.
    #[serde(default)]
    pub prompt_tokens: u32,
    /// Tokens in the completion.
    #[serde(default)]
    pub completion_tokens: u32,
    /// Total tokens billed.
    #[serde(default)]
    pub total_tokens: u32,
}

/// Error payload returned with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    /// The error details.
    pub error: ErrorDetail,
}

/// Error details reported by the remote service.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    /// Human-readable error description.
    pub message: String,
    /// Error category (e.g. "invalid_request_error").
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    /// Machine-readable error code.
    #[serde(default)]
    pub code: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn request_skips_unset_options() {
        let req = ChatCompletionRequest {
            model: "gemini-2.5-pro".to_owned(),
            messages: vec![Message::user("hi")],
            max_tokens: None,
            temperature: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("max_tokens").is_none());
        assert!(json.get("temperature").is_none());
        assert_eq!(json["model"], "gemini-2.5-pro");
    }

    #[test]
    fn minimal_response_parses() {
        // The smallest body a compatible gateway may return.
        let json = r#"{"choices":[{"message":{"content":"猫"}}]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].message.content.as_deref(), Some("猫"));
        assert!(response.id.is_none());
        assert!(response.usage.is_none());
    }

    #[test]
    fn full_response_parses() {
        let json = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "created": 1677858242,
            "model": "gemini-2.5-pro",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "A black dog."},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 300, "completion_tokens": 5, "total_tokens": 305}
        }"#;
        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.model.as_deref(), Some("gemini-2.5-pro"));
        assert_eq!(response.choices[0].finish_reason.as_deref(), Some("stop"));
        assert_eq!(response.usage.unwrap().total_tokens, 305);
    }

    #[test]
    fn missing_choices_is_an_error() {
        let result = serde_json::from_str::<ChatCompletionResponse>("{}");
        assert!(result.is_err());
    }

    #[test]
    fn error_response_parses() {
        let json = r#"{"error":{"message":"Invalid API key","type":"invalid_request_error","code":"invalid_api_key"}}"#;
        let response: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.error.message, "Invalid API key");
        assert_eq!(response.error.code.as_deref(), Some("invalid_api_key"));
    }
}
