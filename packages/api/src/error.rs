//! Error type shared by every API call.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the connection failed.
    #[error("network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// No response arrived within the configured timeout.
    #[error("the server did not respond in time")]
    Timeout,

    /// The server answered with a status the call does not accept.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e)
        }
    }
}

impl ApiError {
    /// Whether the server reported that the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status(404))
    }
}
