//! Ocular - describe local images through an OpenAI-compatible vision endpoint.
//!
//! This crate provides a small async client for multimodal chat completion
//! APIs: load an image from disk, embed it as a base64 `data:` URI next to a
//! text prompt, POST the request with a bearer token, and get the assistant's
//! text reply back.
//!
//! # Example
//!
//! ```rust,ignore
//! use ocular::prelude::*;
//!
//! let client = Client::from_env()?;
//! let image = ImageFile::load("cat.png").await?;
//! let reply = client.describe(&image, "What animal is this?").await?;
//! println!("{reply}");
//! ```

pub mod chat;
pub mod client;
pub mod config;
pub mod error;
pub mod image;
pub mod message;
pub mod prelude;
pub mod types;

pub use error::{ApiError, Error, Result};
