//! Error types for ocular.
//!
//! Faults are split into explicit classes so callers can tell a local file
//! problem from a transport failure from a malformed or hostile response:
//! - file access faults surface as [`Error::Io`],
//! - transport faults as [`ApiError::Network`] / [`ApiError::HttpStatus`],
//! - response-shape faults as [`ApiError::ResponseFormat`].

/// Result type alias for ocular operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The top-level error type.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Chat API error (authentication, transport, response shape).
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error (image file missing or unreadable).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Error type for chat API operations.
///
/// Each variant represents a distinct failure mode, enabling callers to
/// pattern-match on specific cases (e.g., retrying transient errors).
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Authentication or authorization failure.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded. Please retry after some time.")]
    RateLimited,

    /// Response format error.
    #[error("Expected {expected}, got {got}")]
    ResponseFormat {
        /// Expected format description.
        expected: String,
        /// Actual format received.
        got: String,
    },

    /// Network or connection error.
    #[error("{0}")]
    Network(String),

    /// HTTP status error.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// Structured error reported by the remote service.
    #[error("{message}")]
    Provider {
        /// Error description.
        message: String,
        /// Optional error code from the service.
        code: Option<String>,
    },

    /// Internal error.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Create an authentication error.
    #[must_use]
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Create a response format error.
    #[must_use]
    pub fn response_format(expected: impl Into<String>, got: impl Into<String>) -> Self {
        Self::ResponseFormat {
            expected: expected.into(),
            got: got.into(),
        }
    }

    /// Create a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create an HTTP status error.
    #[must_use]
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a service error without a code.
    #[must_use]
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            code: None,
        }
    }

    /// Create a service error with an error code.
    #[must_use]
    pub fn provider_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            code: Some(code.into()),
        }
    }

    /// Create an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a retryable error.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::Network(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::network("Request timed out")
        } else if err.is_connect() {
            Self::network(format!("Connection failed: {err}"))
        } else {
            Self::network(err.to_string())
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Api(ApiError::from(err))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn config_creates_error() {
        let err = Error::config("missing API key");
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("missing API key"));
    }

    #[test]
    fn from_api_error() {
        let api_err = ApiError::network("timeout");
        let err: Error = api_err.into();
        assert!(matches!(err, Error::Api(_)));
    }

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn from_json_error() {
        let json_err = serde_json::from_str::<i32>("invalid").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn response_format_display() {
        let err = ApiError::response_format("at least one choice", "empty choices");
        let s = err.to_string();
        assert!(s.contains("at least one choice"));
        assert!(s.contains("empty choices"));
    }

    #[test]
    fn http_status_display() {
        let err = ApiError::http_status(502, "Bad Gateway");
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn is_retryable() {
        assert!(ApiError::RateLimited.is_retryable());
        assert!(ApiError::network("refused").is_retryable());
        assert!(!ApiError::auth("bad key").is_retryable());
        assert!(!ApiError::response_format("a", "b").is_retryable());
    }

    #[test]
    fn error_chain_api_to_error() {
        fn inner() -> std::result::Result<(), ApiError> {
            Err(ApiError::network("test"))
        }

        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        assert!(matches!(outer().unwrap_err(), Error::Api(_)));
    }
}
