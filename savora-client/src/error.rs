//! Client error types

use thiserror::Error;

use crate::channel::ChannelError;
use crate::session::SessionStoreError;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connectivity failure or request timeout
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status, with the server's message
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Durable storage read/write failure
    #[error("Storage error: {0}")]
    Storage(#[from] SessionStoreError),

    /// Real-time channel failure
    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        // Body decode failures are a malformed response, everything else
        // (connect, timeout, redirect) is a network problem
        if err.is_decode() {
            ClientError::InvalidResponse(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
