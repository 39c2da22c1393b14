//! # JSON-RPC Message Layer Prelude
//!
//! Convenient re-exports of the most commonly used types and functions.
//!
//! ```rust
//! use apparatus_json_rpc::prelude::*;
//! ```

// Core JSON-RPC types
pub use crate::error::{JsonRpcErrorObject, JsonRpcErrorResponse, MessageError};
pub use crate::notification::JsonRpcNotification;
pub use crate::request::{JsonRpcRequest, RequestParams};
pub use crate::response::JsonRpcResponse;
pub use crate::types::{JsonRpcVersion, RequestId};

// Validation, classification and parsing
pub use crate::message::{
    MessageKind, classify, is_notification, is_request, is_response, is_well_formed, parse_slice,
    parse_str, parse_value,
};

// Registry and builders
pub use crate::registry::{
    MethodRegistry, MethodRegistryBuilder, build_error, build_notification, build_response,
};

// Standard error codes
pub use crate::error_codes::*;
