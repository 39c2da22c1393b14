//! Transport layer for the apparatus channel.
//!
//! A transport is a duplex, message-framed connection: whole frames go
//! out, whole frames come in, and framing is the transport's problem. The
//! channel only requires that a clean closure by the peer be
//! distinguishable from a generic I/O failure.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::TransportError;

pub mod ws;

pub use ws::{WsConnector, WsTransport};

/// A connected, message-framed duplex transport.
///
/// Methods take `&self` because the send path and the receive loop run
/// concurrently over the same connection; implementations lock their two
/// halves independently. A frame write is atomic: it either reaches the
/// peer whole or the call returns an error.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Write one complete frame
    async fn send_frame(&self, frame: String) -> Result<(), TransportError>;

    /// Next inbound frame. `None` means the stream ended;
    /// `Some(Err(TransportError::Closed))` is the clean peer-closure
    /// condition.
    async fn next_frame(&self) -> Option<Result<String, TransportError>>;

    /// Close the connection; safe to call on an already-closed transport
    async fn close(&self) -> Result<(), TransportError>;

    /// Liveness query
    fn is_open(&self) -> bool;
}

/// Shared handle to a transport; the channel hands clones to the receive
/// loop and to concurrent senders
pub type SharedTransport = Arc<dyn Transport>;

/// Establishes transports by address.
///
/// Injectable so tests can supply an in-memory implementation in place of
/// a real socket.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, endpoint: &str) -> Result<SharedTransport, TransportError>;
}
