//! Error handling module for the storefront console.
//!
//! Every failure a screen can observe is one of four kinds: the request never
//! completed, the backend answered with a non-success status, the body could
//! not be decoded, or the user's input was rejected before any request was
//! built.

use thiserror::Error;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
    pub const HTTP_STATUS: &str = "HTTP_STATUS";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
    pub const INPUT_ERROR: &str = "INPUT_ERROR";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Client-side error type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or transport failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Backend answered with a non-2xx status
    #[error("{status}: {body}")]
    Status { status: u16, body: String },

    /// Response body could not be parsed
    #[error("Decode error: {0}")]
    Decode(String),

    /// User input rejected before sending
    #[error("{0}")]
    Input(String),

    /// Client could not be configured (bad base URL, TLS setup)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => codes::TRANSPORT_ERROR,
            ApiError::Status { .. } => codes::HTTP_STATUS,
            ApiError::Decode(_) => codes::DECODE_ERROR,
            ApiError::Input(_) => codes::INPUT_ERROR,
            ApiError::Config(_) => codes::CONFIG_ERROR,
        }
    }

    /// Shorthand for an input validation failure.
    pub fn input(message: impl Into<String>) -> Self {
        ApiError::Input(message.into())
    }

    pub fn is_input(&self) -> bool {
        matches!(self, ApiError::Input(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            tracing::debug!("Response decode error: {:?}", err);
            ApiError::Decode(err.to_string())
        } else {
            tracing::debug!("Transport error: {:?}", err);
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::debug!("JSON error: {:?}", err);
        ApiError::Decode(format!("JSON error: {}", err))
    }
}
