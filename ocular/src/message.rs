//! Message types matching the chat completion API conventions.
//!
//! A user message carries either plain text or an ordered list of content
//! parts (text plus image references). These types serialize directly to the
//! OpenAI-style wire schema, so no separate conversion layer is needed.

use serde::{Deserialize, Serialize};

use crate::image::ImageFile;

/// Role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System message providing instructions.
    System,
    /// User message.
    User,
    /// Assistant (model) message.
    Assistant,
}

impl Role {
    /// Get the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// Image URL structure with detail level for vision APIs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUrl {
    /// The URL of the image (http(s) URL or data URL).
    pub url: String,
    /// Detail level for image processing: "low", "high", or "auto".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// A single content part of a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Text content.
    Text {
        /// The text content.
        text: String,
    },
    /// Image reference content.
    ImageUrl {
        /// The image URL details.
        image_url: ImageUrl,
    },
}

impl ContentPart {
    /// Create a text content part.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create an image content part from a URL.
    #[must_use]
    pub fn image_url(url: impl Into<String>) -> Self {
        Self::ImageUrl {
            image_url: ImageUrl {
                url: url.into(),
                detail: None,
            },
        }
    }

    /// Create an image content part with a detail level.
    ///
    /// Detail can be "low", "high", or "auto".
    #[must_use]
    pub fn image_url_with_detail(url: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::ImageUrl {
            image_url: ImageUrl {
                url: url.into(),
                detail: Some(detail.into()),
            },
        }
    }

    /// Create an image content part from a local image, embedded as a data URL.
    #[must_use]
    pub fn image(image: &ImageFile) -> Self {
        Self::image_url(image.to_data_url())
    }

    /// Create an image content part from a local image with a detail level.
    #[must_use]
    pub fn image_with_detail(image: &ImageFile, detail: impl Into<String>) -> Self {
        Self::image_url_with_detail(image.to_data_url(), detail)
    }
}

/// Content of a message: plain text or ordered parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// Plain text content.
    Text(String),
    /// Multimodal content parts.
    Parts(Vec<ContentPart>),
}

/// A chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender.
    pub role: Role,
    /// Content of the message.
    pub content: Content,
}

impl Message {
    /// Create a message with the given role and content.
    #[must_use]
    pub const fn new(role: Role, content: Content) -> Self {
        Self { role, content }
    }

    /// Create a system message.
    #[must_use]
    pub fn system(text: impl Into<String>) -> Self {
        Self::new(Role::System, Content::Text(text.into()))
    }

    /// Create a user message with plain text.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, Content::Text(text.into()))
    }

    /// Create a user message pairing a text prompt with a local image.
    #[must_use]
    pub fn user_with_image(prompt: impl Into<String>, image: &ImageFile) -> Self {
        Self::new(
            Role::User,
            Content::Parts(vec![ContentPart::text(prompt), ContentPart::image(image)]),
        )
    }
}
