//! Method registry and message builders.
//!
//! The registry is an explicit, injectable mapping from a symbolic method
//! name to a small positive integer code. Its only protocol role is to
//! synthesize a default `id` for a request when the caller supplies none;
//! which methods a deployment registers is domain configuration. The
//! registry is read-only once built.

use serde_json::Value;
use std::collections::HashMap;

use crate::error::{JsonRpcErrorObject, JsonRpcErrorResponse, MessageError};
use crate::notification::JsonRpcNotification;
use crate::request::{JsonRpcRequest, RequestParams};
use crate::response::JsonRpcResponse;
use crate::types::RequestId;

/// Read-only mapping from method name to default request id
#[derive(Debug, Clone, Default)]
pub struct MethodRegistry {
    methods: HashMap<String, i64>,
}

/// Builder for [`MethodRegistry`]
#[derive(Debug, Default)]
pub struct MethodRegistryBuilder {
    methods: HashMap<String, i64>,
}

impl MethodRegistryBuilder {
    pub fn method(mut self, name: impl Into<String>, code: i64) -> Self {
        self.methods.insert(name.into(), code);
        self
    }

    pub fn methods<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        self.methods
            .extend(entries.into_iter().map(|(name, code)| (name.into(), code)));
        self
    }

    pub fn build(self) -> MethodRegistry {
        MethodRegistry {
            methods: self.methods,
        }
    }
}

impl MethodRegistry {
    pub fn builder() -> MethodRegistryBuilder {
        MethodRegistryBuilder::default()
    }

    /// Look up the default id for a method
    pub fn id_for(&self, method: &str) -> Option<i64> {
        self.methods.get(method).copied()
    }

    pub fn contains(&self, method: &str) -> bool {
        self.methods.contains_key(method)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Build a request.
    ///
    /// When `id` is omitted it is defaulted from this registry; an
    /// unregistered method with no explicit id is a caller error. `params`
    /// defaults to an empty object, so a request always carries `params`
    /// on the wire.
    pub fn build_request(
        &self,
        method: &str,
        id: Option<RequestId>,
        params: Option<RequestParams>,
    ) -> Result<JsonRpcRequest, MessageError> {
        let id = match id {
            Some(id) => id,
            None => RequestId::Number(
                self.id_for(method)
                    .ok_or_else(|| MessageError::UnknownMethod(method.to_string()))?,
            ),
        };
        Ok(JsonRpcRequest::new(
            id,
            method,
            Some(params.unwrap_or_else(RequestParams::empty)),
        ))
    }
}

/// Build a notification; `params` stays absent when the caller supplies
/// none
pub fn build_notification(
    method: &str,
    params: Option<RequestParams>,
) -> JsonRpcNotification {
    JsonRpcNotification::new(method, params)
}

/// Build a successful response; `result` is always included, even when
/// null
pub fn build_response(id: impl Into<RequestId>, result: Value) -> JsonRpcResponse {
    JsonRpcResponse::new(id, result)
}

/// Build an error response; `id` serializes as null when omitted, `data`
/// only when supplied
pub fn build_error(
    code: i64,
    message: &str,
    id: Option<RequestId>,
    data: Option<Value>,
) -> JsonRpcErrorResponse {
    JsonRpcErrorResponse::new(id, JsonRpcErrorObject::new(code, message, data))
}
