//! Error types for channel operations

use thiserror::Error;

/// Result type for channel operations
pub type ChannelResult<T> = Result<T, ChannelError>;

/// Errors surfaced by channel operations
#[derive(Error, Debug)]
pub enum ChannelError {
    /// Transport-level errors
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Caller attempted to send a non-well-formed envelope
    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The channel was closed while the operation was in flight
    #[error("Channel closed")]
    Closed,
}

/// Transport-specific errors
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("WebSocket transport error: {0}")]
    WebSocket(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Clean closure by the peer, as opposed to an I/O failure
    #[error("Connection closed by peer")]
    Closed,
}

impl TransportError {
    /// Whether this is the clean peer-closure condition rather than a
    /// genuine failure
    pub fn is_clean_close(&self) -> bool {
        matches!(self, TransportError::Closed)
    }
}

impl ChannelError {
    /// Operational errors are retried by the channel; caller errors are
    /// not
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
