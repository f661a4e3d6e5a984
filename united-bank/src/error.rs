//! Error types for the gateway adapter

use thiserror::Error;

/// Result type for gateway operations
pub type Result<T> = std::result::Result<T, Error>;

/// Gateway adapter errors
///
/// Business errors reported by the gateway (HTTP 200 with `ErrorCode`) are
/// not represented here; they arrive as a parsed
/// [`AccountInformationResponse`](crate::AccountInformationResponse).
#[derive(Error, Debug)]
pub enum Error {
    /// Gateway answered with a status other than 200
    #[error("Gateway returned HTTP {status_code}: {body}")]
    Transport {
        /// HTTP status code
        status_code: u16,
        /// Raw response body
        body: String,
    },

    /// Gateway answered 200 but the body is not a known response shape
    #[error("Unparseable gateway response ({reason}): {body}")]
    ResponseParse {
        /// What went wrong
        reason: String,
        /// Raw response body
        body: String,
    },

    /// Connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Timeout
    #[error("Timeout after {seconds}s: {operation}")]
    Timeout {
        /// Timeout duration
        seconds: u64,
        /// Operation
        operation: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status carried by a [`Error::Transport`]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Transport { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Raw gateway body, when the error carries one
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Error::Transport { body, .. } | Error::ResponseParse { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }
}
