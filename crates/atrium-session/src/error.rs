//! Error types for the session crate.

use thiserror::Error;

/// Errors that can occur in session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The token could not be decoded.
    #[error("malformed token: {0}")]
    MalformedToken(String),

    /// The token is already past its expiry.
    #[error("token expired")]
    TokenExpired,

    /// Network or HTTP error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The auth server returned an error response.
    #[error("server error: {status} - {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Error message from the server.
        message: String,
    },

    /// Failed to deserialize a server response.
    #[error("invalid response format: {0}")]
    InvalidResponse(String),

    /// Reading or writing the session file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
