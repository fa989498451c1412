//! HTTP client for the chat completions endpoint.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::chat::{ChatRequest, ChatResponse};
use crate::config::ApiConfig;
use crate::error::{ApiError, Error, Result};
use crate::image::ImageFile;
use crate::message::Message;
use crate::types::{ChatCompletionRequest, ChatCompletionResponse, ErrorResponse};

/// Client for an OpenAI-compatible chat completions API.
#[derive(Debug, Clone)]
pub struct Client {
    config: Arc<ApiConfig>,
    http: reqwest::Client,
}

impl Client {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty or the HTTP client cannot
    /// be constructed.
    pub fn new(config: ApiConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(ApiError::auth("API key is required").into());
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let http = builder
            .build()
            .map_err(|e| ApiError::internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }

    /// Create a client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `OCULAR_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        Self::new(ApiConfig::from_env()?)
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the default model.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Build the chat completions URL.
    pub(crate) fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Build a POST request with auth and content-type headers.
    fn build_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.http
            .post(url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
    }

    /// Build the wire request body. Pure; falls back to the configured
    /// default model when the request model is empty.
    pub(crate) fn build_body(&self, request: &ChatRequest) -> ChatCompletionRequest {
        let model = if request.model.is_empty() {
            self.config.model.clone()
        } else {
            request.model.clone()
        };

        ChatCompletionRequest {
            model,
            messages: request.messages.clone(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }

    /// Parse an error response body.
    pub(crate) fn parse_error(status: u16, body: &str) -> ApiError {
        if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(body) {
            let error = parsed.error;
            return match status {
                401 | 403 => ApiError::auth(error.message),
                429 => ApiError::RateLimited,
                _ => match error.code.or(error.error_type) {
                    Some(code) => ApiError::provider_code(code, error.message),
                    None => ApiError::provider(error.message),
                },
            };
        }

        ApiError::http_status(status, body)
    }

    /// Extract the reply from a parsed response.
    ///
    /// An empty `choices` array is a response-shape fault, never a silent
    /// default.
    pub(crate) fn parse_response(response: ChatCompletionResponse) -> Result<ChatResponse> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::response_format("at least one choice", "empty choices"))?;

        Ok(ChatResponse {
            content: choice.message.content,
            model: response.model,
            finish_reason: choice.finish_reason,
            usage: response.usage,
        })
    }

    /// Send a chat completion request.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a response
    /// body that does not match the chat completion schema.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let url = self.chat_url();
        let body = self.build_body(request);
        debug!(
            model = %body.model,
            messages = body.messages.len(),
            "sending chat completion request"
        );

        let response = self.build_request(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Self::parse_error(status.as_u16(), &error_text).into());
        }

        let response_text = response.text().await?;
        let parsed: ChatCompletionResponse = serde_json::from_str(&response_text).map_err(|e| {
            ApiError::response_format(
                "valid chat completion response",
                format!("parse error: {e}, response: {response_text}"),
            )
        })?;

        let chat_response = Self::parse_response(parsed)?;
        debug!(
            finish_reason = chat_response.finish_reason.as_deref().unwrap_or("-"),
            "received chat completion response"
        );
        Ok(chat_response)
    }

    /// Describe a local image: send the prompt and the image as one user
    /// message and return the assistant's reply text.
    ///
    /// # Errors
    ///
    /// Returns an error on any transport or response-shape fault, or when
    /// the reply carries no text content.
    pub async fn describe(&self, image: &ImageFile, prompt: impl Into<String>) -> Result<String> {
        debug!(%image, "describing image");
        let request =
            ChatRequest::new(self.config.model.clone()).message(Message::user_with_image(prompt, image));

        let response = self.chat(&request).await?;
        response.content.ok_or_else(|| {
            Error::from(ApiError::response_format(
                "text content",
                "empty message content",
            ))
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::image::ImageFormat;

    fn test_client() -> Client {
        Client::new(ApiConfig::new("test-key")).unwrap()
    }

    #[test]
    fn empty_api_key_is_rejected() {
        let result = Client::new(ApiConfig::default());
        assert!(matches!(
            result.unwrap_err(),
            Error::Api(ApiError::Auth(_))
        ));
    }

    #[test]
    fn chat_url_appends_path() {
        let client = test_client();
        assert_eq!(
            client.chat_url(),
            "https://api.apiyi.com/v1/chat/completions"
        );
    }

    #[test]
    fn build_body_uses_default_model_when_empty() {
        let client = test_client();
        let request = ChatRequest::default().user("hi");
        let body = client.build_body(&request);
        assert_eq!(body.model, ApiConfig::DEFAULT_MODEL);

        let request = ChatRequest::new("gpt-4o").user("hi");
        let body = client.build_body(&request);
        assert_eq!(body.model, "gpt-4o");
    }

    #[test]
    fn build_body_embeds_exact_encoded_image() {
        let client = test_client();
        let bytes: Vec<u8> = (0..10).collect();
        let image = ImageFile::from_bytes(bytes, ImageFormat::Jpeg);
        let request = ChatRequest::default().user_image("what animal is this?", &image);

        let body = client.build_body(&request);
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("data:image/jpeg;base64,AAECAwQFBgcICQ=="));
    }

    #[test]
    fn parse_response_extracts_content() {
        let json = r#"{"choices":[{"message":{"content":"猫"}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        let response = Client::parse_response(parsed).unwrap();
        assert_eq!(response.text(), Some("猫"));
    }

    #[test]
    fn parse_response_rejects_empty_choices() {
        let json = r#"{"choices":[]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        let result = Client::parse_response(parsed);
        assert!(matches!(
            result.unwrap_err(),
            Error::Api(ApiError::ResponseFormat { .. })
        ));
    }

    #[test]
    fn parse_error_maps_statuses() {
        let body = r#"{"error":{"message":"Invalid API key","type":"invalid_request_error","code":"invalid_api_key"}}"#;
        assert!(matches!(
            Client::parse_error(401, body),
            ApiError::Auth(_)
        ));
        assert!(matches!(
            Client::parse_error(429, body),
            ApiError::RateLimited
        ));
        assert!(matches!(
            Client::parse_error(400, body),
            ApiError::Provider { code: Some(_), .. }
        ));
    }

    #[test]
    fn parse_error_falls_back_to_http_status() {
        let err = Client::parse_error(502, "Bad Gateway");
        assert!(matches!(err, ApiError::HttpStatus { status: 502, .. }));
    }
}
