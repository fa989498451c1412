//! Chat request and response types.

use crate::image::ImageFile;
use crate::message::Message;
use crate::types::Usage;

/// A chat completion request.
///
/// # Example
///
/// ```rust,ignore
/// let request = ChatRequest::new("gemini-2.5-pro")
///     .user("Hello!")
///     .max_tokens(100);
/// let response = client.chat(&request).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChatRequest {
    /// Model identifier; the client's configured default is used when empty.
    pub model: String,
    /// Conversation messages.
    pub messages: Vec<Message>,
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 2.0).
    pub temperature: Option<f32>,
}

impl ChatRequest {
    /// Creates a new request with the specified model.
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Adds a message.
    #[must_use]
    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Adds a plain-text user message.
    #[must_use]
    pub fn user(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::user(content));
        self
    }

    /// Adds a system message.
    #[must_use]
    pub fn system(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::system(content));
        self
    }

    /// Adds a user message pairing a prompt with a local image.
    #[must_use]
    pub fn user_image(mut self, prompt: impl Into<String>, image: &ImageFile) -> Self {
        self.messages.push(Message::user_with_image(prompt, image));
        self
    }

    /// Sets max tokens.
    #[must_use]
    pub const fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Sets temperature.
    #[must_use]
    pub const fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Response from a chat completion.
#[derive(Debug, Clone)]
pub struct ChatResponse {
    /// The assistant's reply text, if any.
    pub content: Option<String>,
    /// Model that produced the completion.
    pub model: Option<String>,
    /// Why generation stopped.
    pub finish_reason: Option<String>,
    /// Token usage statistics.
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Get the reply text.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.content.as_deref()
    }
}
