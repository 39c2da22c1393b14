//! # Apparatus Channel
//!
//! A resilient JSON-RPC 2.0 channel: a client-side session kept alive over
//! an unreliable, message-framed transport. The channel reconnects
//! transparently on failure with a fixed delay, delivers inbound frames to
//! a caller-supplied handler in wire order, and blocks (never drops)
//! outbound sends while the transport is down.
//!
//! ## Features
//!
//! - **Supervised reconnection**: one supervisory loop owns reconnect;
//!   transport loss is logged and retried forever until `close`
//! - **Envelope enforcement**: outbound messages must carry the
//!   `"jsonrpc": "2.0"` envelope (see [`apparatus_json_rpc`])
//! - **Pluggable transport**: WebSocket out of the box, anything
//!   implementing [`transport::Transport`] in tests
//! - **Uniformly async callbacks**: handler and on-connect hook are
//!   awaited whether backed by a closure or a trait object
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use apparatus_channel::{ChannelConfig, RpcChannel};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let channel = RpcChannel::builder()
//!         .with_config(ChannelConfig::new("localhost", 8100))
//!         .with_handler(|frame: String| async move {
//!             println!("inbound: {frame}");
//!             anyhow::Ok(())
//!         })
//!         .build();
//!
//!     let supervisor = channel.clone();
//!     tokio::spawn(async move { supervisor.connect().await });
//!
//!     channel.send(&json!({"jsonrpc": "2.0", "method": "ping", "id": 3})).await?;
//!     channel.close().await;
//!     Ok(())
//! }
//! ```
//!
//! The channel performs no request/response correlation and no batching;
//! both belong to the layer above.

pub mod channel;
pub mod config;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod transport;

// Re-export main types
pub use channel::{ConnectHook, MessageHandler, RpcChannel, RpcChannelBuilder};
pub use config::ChannelConfig;
pub use error::{ChannelError, ChannelResult, TransportError};
pub use transport::{Connector, SharedTransport, Transport, WsConnector, WsTransport};
