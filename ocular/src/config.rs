//! Client configuration.
//!
//! The API key, endpoint, and model are injected here instead of living in
//! the code: pass them explicitly or read them from the environment with
//! [`ApiConfig::from_env`].

use crate::error::{Error, Result};

/// Configuration for the chat API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API key for authentication.
    pub api_key: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Default model to use.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    /// Default API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.apiyi.com/v1";
    /// Default model.
    pub const DEFAULT_MODEL: &'static str = "gemini-2.5-pro";
    /// Default request timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

    /// Creates a new configuration with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: Self::DEFAULT_BASE_URL.to_owned(),
            model: Self::DEFAULT_MODEL.to_owned(),
            timeout_secs: Some(Self::DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Creates configuration from environment variables.
    ///
    /// Reads from:
    /// - `OCULAR_API_KEY` - Required API key
    /// - `OCULAR_BASE_URL` - Optional base URL
    /// - `OCULAR_MODEL` - Optional default model
    ///
    /// # Errors
    ///
    /// Returns an error if `OCULAR_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OCULAR_API_KEY")
            .map_err(|_| Error::config("OCULAR_API_KEY environment variable not set"))?;

        let base_url =
            std::env::var("OCULAR_BASE_URL").unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_owned());

        let model =
            std::env::var("OCULAR_MODEL").unwrap_or_else(|_| Self::DEFAULT_MODEL.to_owned());

        Ok(Self {
            api_key,
            base_url,
            model,
            timeout_secs: Some(Self::DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the default model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: Self::DEFAULT_BASE_URL.to_owned(),
            model: Self::DEFAULT_MODEL.to_owned(),
            timeout_secs: Some(Self::DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_new() {
        let config = ApiConfig::new("test-key");
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, ApiConfig::DEFAULT_BASE_URL);
        assert_eq!(config.model, ApiConfig::DEFAULT_MODEL);
        assert_eq!(config.timeout_secs, Some(ApiConfig::DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn config_builder() {
        let config = ApiConfig::new("key")
            .with_base_url("http://localhost:8080/v1")
            .with_model("gpt-4o")
            .with_timeout(10);

        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.timeout_secs, Some(10));
    }
}
