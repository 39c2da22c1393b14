//! # JSON-RPC 2.0 Message Layer
//!
//! A pure, transport-agnostic implementation of the JSON-RPC 2.0 message
//! shapes used by the apparatus channel. This crate provides the message
//! types, structural validation/classification, builder functions backed by
//! a method registry, and wire parsing. No I/O and no concurrency.
//!
//! ## Features
//! - Request, response, error-response and notification types
//! - Structural classification of raw JSON values (request → response →
//!   notification priority order)
//! - A method registry that supplies default request ids
//! - Wire parsing with a distinct decode/envelope error taxonomy
//!
//! ## Quick Start
//!
//! ```rust
//! use apparatus_json_rpc::{MethodRegistry, MessageKind, classify};
//! use serde_json::json;
//!
//! let registry = MethodRegistry::builder().method("ping", 3).build();
//! let request = registry.build_request("ping", None, None).unwrap();
//!
//! let value = serde_json::to_value(&request).unwrap();
//! assert_eq!(classify(&value), MessageKind::Request);
//! assert_eq!(value["id"], json!(3));
//! ```

pub mod error;
pub mod hash;
pub mod message;
pub mod notification;
pub mod prelude;
pub mod registry;
pub mod request;
pub mod response;
pub mod types;

// Re-export main types
pub use error::{JsonRpcErrorObject, JsonRpcErrorResponse, MessageError};
pub use hash::hash_json;
pub use message::{
    MessageKind, classify, is_notification, is_request, is_response, is_well_formed, parse_slice,
    parse_str, parse_value,
};
pub use notification::JsonRpcNotification;
pub use registry::{
    MethodRegistry, MethodRegistryBuilder, build_error, build_notification, build_response,
};
pub use request::{JsonRpcRequest, RequestParams};
pub use response::JsonRpcResponse;
pub use types::{JsonRpcVersion, RequestId};

/// JSON-RPC 2.0 version constant
pub const JSONRPC_VERSION: &str = "2.0";

/// Standard JSON-RPC 2.0 error codes
pub mod error_codes {
    pub const PARSE_ERROR: i64 = -32700;
    pub const INVALID_REQUEST: i64 = -32600;
    pub const METHOD_NOT_FOUND: i64 = -32601;
    pub const INVALID_PARAMS: i64 = -32602;
    pub const INTERNAL_ERROR: i64 = -32603;

    // Server error range: -32099 to -32000
    pub const SERVER_ERROR_START: i64 = -32099;
    pub const SERVER_ERROR_END: i64 = -32000;
}
