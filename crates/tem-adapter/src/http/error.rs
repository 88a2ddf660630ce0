/*
[INPUT]:  Error sources (transport, HTTP status, response schema, request validation)
[OUTPUT]: Structured error type split into transport and schema failures
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Tron Energy Market adapter
#[derive(Error, Debug)]
pub enum TemError {
    /// Connection-level failure (DNS, TLS, refused, reset)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("API error (code {code}): {message}")]
    Api { code: u16, message: String },

    /// Response body does not match the expected model
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Request object rejected before it was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TemError {
    /// Failure while talking to the server (connection or status)
    pub fn is_transport(&self) -> bool {
        matches!(self, TemError::Http(_) | TemError::Api { .. })
    }

    /// Payload failed the model rules, either inbound or outbound
    pub fn is_schema(&self) -> bool {
        matches!(self, TemError::Serialization(_) | TemError::Validation(_))
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        TemError::Api {
            code: status.as_u16(),
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        TemError::Validation(message.into())
    }
}

/// Result type alias for Tron Energy Market operations
pub type Result<T> = std::result::Result<T, TemError>;
