use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::types::{JsonRpcVersion, RequestId};

/// JSON-RPC error object carried inside an error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcErrorObject {
    pub fn new(code: i64, message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            code,
            message: message.into(),
            data,
        }
    }

    pub fn parse_error() -> Self {
        Self::new(crate::error_codes::PARSE_ERROR, "Parse error", None)
    }

    pub fn invalid_request() -> Self {
        Self::new(crate::error_codes::INVALID_REQUEST, "Invalid Request", None)
    }

    pub fn method_not_found(method: &str) -> Self {
        Self::new(
            crate::error_codes::METHOD_NOT_FOUND,
            format!("Method '{}' not found", method),
            None,
        )
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(crate::error_codes::INTERNAL_ERROR, message, None)
    }
}

/// A JSON-RPC error response.
///
/// `id` serializes as JSON null when the request id could not be
/// determined, per the JSON-RPC 2.0 convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcErrorResponse {
    #[serde(rename = "jsonrpc")]
    pub version: JsonRpcVersion,
    pub id: Option<RequestId>,
    pub error: JsonRpcErrorObject,
}

impl JsonRpcErrorResponse {
    pub fn new(id: Option<RequestId>, error: JsonRpcErrorObject) -> Self {
        Self {
            version: JsonRpcVersion::V2_0,
            id,
            error,
        }
    }

    pub fn parse_error() -> Self {
        Self::new(None, JsonRpcErrorObject::parse_error())
    }

    pub fn method_not_found(id: impl Into<RequestId>, method: &str) -> Self {
        Self::new(Some(id.into()), JsonRpcErrorObject::method_not_found(method))
    }
}

impl fmt::Display for JsonRpcErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "JSON-RPC error {}: {}",
            self.error.code, self.error.message
        )
    }
}

impl std::error::Error for JsonRpcErrorResponse {}

/// Errors surfaced by message parsing and building (no transport logic)
#[derive(Debug, Error)]
pub enum MessageError {
    /// The wire payload is not syntactically valid JSON
    #[error("malformed JSON payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// Decoded fine but the "jsonrpc" envelope field is absent
    #[error("missing \"jsonrpc\" envelope field")]
    MissingEnvelope,

    /// Default-id lookup failed and no explicit id was supplied
    #[error("method '{0}' is not registered and no id was supplied")]
    UnknownMethod(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::to_value;

    #[test]
    fn test_error_response_serialization() {
        let error = JsonRpcErrorResponse::method_not_found(1, "warp_core");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("Method 'warp_core' not found"));
        assert!(json.contains("-32601"));
    }

    #[test]
    fn test_absent_id_serializes_as_null() {
        let error = JsonRpcErrorResponse::parse_error();
        let value = to_value(&error).unwrap();
        assert!(value["id"].is_null());
        assert!(value.as_object().unwrap().contains_key("id"));
    }

    #[test]
    fn test_data_omitted_when_absent() {
        let error = JsonRpcErrorResponse::new(
            Some(RequestId::Number(7)),
            JsonRpcErrorObject::new(-32000, "busy", None),
        );
        let value = to_value(&error).unwrap();
        assert!(!value["error"].as_object().unwrap().contains_key("data"));
    }
}
