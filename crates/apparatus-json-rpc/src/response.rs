use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{JsonRpcVersion, RequestId};

/// A successful JSON-RPC response.
///
/// The `result` field is always present on the wire, even when it is JSON
/// null; absence of `result` is what distinguishes an error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(rename = "jsonrpc")]
    pub version: JsonRpcVersion,
    pub id: RequestId,
    pub result: Value,
}

impl JsonRpcResponse {
    pub fn new(id: impl Into<RequestId>, result: Value) -> Self {
        Self {
            version: JsonRpcVersion::V2_0,
            id: id.into(),
            result,
        }
    }

    /// Response for a void method
    pub fn null(id: impl Into<RequestId>) -> Self {
        Self::new(id, Value::Null)
    }
}
