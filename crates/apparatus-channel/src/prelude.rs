//! # Apparatus Channel Prelude
//!
//! Convenient re-exports of the most commonly used types.
//!
//! ```rust
//! use apparatus_channel::prelude::*;
//! ```

pub use crate::channel::{ConnectHook, MessageHandler, RpcChannel, RpcChannelBuilder};
pub use crate::config::ChannelConfig;
pub use crate::error::{ChannelError, ChannelResult, TransportError};
pub use crate::transport::{Connector, SharedTransport, Transport, WsConnector};

// The message layer travels with the channel in practice
pub use apparatus_json_rpc::prelude::*;
