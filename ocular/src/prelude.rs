//! Prelude module for convenient imports.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ocular::prelude::*;
//! ```

pub use crate::chat::{ChatRequest, ChatResponse};
pub use crate::client::Client;
pub use crate::config::ApiConfig;
pub use crate::error::{ApiError, Error, Result};
pub use crate::image::{ImageFile, ImageFormat};
pub use crate::message::{Content, ContentPart, ImageUrl, Message, Role};
pub use crate::types::Usage;
