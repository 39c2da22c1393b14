//! Structural validation and classification of raw JSON-RPC values.
//!
//! Classification is structural, not tag-carried: a value is inspected for
//! the presence and type of `method`, `id`, `result` and `error`, in a
//! fixed priority order (request, then response, then notification). These
//! functions operate on `serde_json::Value` so they can be applied to
//! inbound frames before committing to a typed representation.

use serde_json::Value;

use crate::JSONRPC_VERSION;
use crate::error::MessageError;

/// Outcome of [`classify`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Request,
    Response,
    Notification,
    /// Sentinel for values matching none of the three shapes. Not an
    /// error: callers must handle this case explicitly.
    Unclassified,
}

fn has_valid_id(msg: &Value) -> bool {
    match msg.get("id") {
        Some(Value::Number(n)) => n.is_i64() || n.is_u64(),
        Some(Value::String(_)) => true,
        _ => false,
    }
}

/// Minimal envelope check: a JSON object whose `"jsonrpc"` field equals
/// the literal `"2.0"`. Does not by itself imply request/response/
/// notification validity.
pub fn is_well_formed(msg: &Value) -> bool {
    msg.is_object() && msg.get("jsonrpc").and_then(Value::as_str) == Some(JSONRPC_VERSION)
}

/// Well-formed with a string `method` and an integer-or-string `id`
pub fn is_request(msg: &Value) -> bool {
    is_well_formed(msg) && msg.get("method").is_some_and(Value::is_string) && has_valid_id(msg)
}

/// Well-formed with an integer-or-string `id` and at least one of
/// `result`/`error`. A value carrying both is still accepted as a
/// response; tightening that is a protocol decision this layer does not
/// make.
pub fn is_response(msg: &Value) -> bool {
    is_well_formed(msg)
        && has_valid_id(msg)
        && (msg.get("result").is_some() || msg.get("error").is_some())
}

/// Well-formed with a string `method`, no `id`, and `params` (when
/// present) an object or array
pub fn is_notification(msg: &Value) -> bool {
    if !is_well_formed(msg) || !msg.get("method").is_some_and(Value::is_string) {
        return false;
    }
    if msg.get("id").is_some() {
        return false;
    }
    match msg.get("params") {
        None => true,
        Some(params) => params.is_object() || params.is_array(),
    }
}

/// Classify a value by the fixed priority order request → response →
/// notification; the first matching shape wins
pub fn classify(msg: &Value) -> MessageKind {
    if is_request(msg) {
        MessageKind::Request
    } else if is_response(msg) {
        MessageKind::Response
    } else if is_notification(msg) {
        MessageKind::Notification
    } else {
        MessageKind::Unclassified
    }
}

/// Decode a wire payload and require the `"jsonrpc"` envelope key.
///
/// Only presence of the key is enforced here; classification (and the
/// version check it implies) is a separate, subsequent step.
pub fn parse_str(payload: &str) -> Result<Value, MessageError> {
    let value: Value = serde_json::from_str(payload.trim())?;
    parse_value(value)
}

/// Byte-slice variant of [`parse_str`]
pub fn parse_slice(payload: &[u8]) -> Result<Value, MessageError> {
    let value: Value = serde_json::from_slice(payload)?;
    parse_value(value)
}

/// Envelope check for an already-decoded value
pub fn parse_value(value: Value) -> Result<Value, MessageError> {
    if value.get("jsonrpc").is_none() {
        return Err(MessageError::MissingEnvelope);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_well_formed_envelope() {
        assert!(is_well_formed(&json!({"jsonrpc": "2.0"})));
        assert!(!is_well_formed(&json!({"jsonrpc": "1.0"})));
        assert!(!is_well_formed(&json!({"method": "ping"})));
        assert!(!is_well_formed(&json!("2.0")));
        assert!(!is_well_formed(&json!(["jsonrpc", "2.0"])));
    }

    #[test]
    fn test_request_shape() {
        let req = json!({"jsonrpc": "2.0", "method": "ping", "id": 3, "params": {}});
        assert!(is_request(&req));
        assert_eq!(classify(&req), MessageKind::Request);
        assert!(!is_response(&req));
        assert!(!is_notification(&req));

        // String ids are fine, other id types are not
        assert!(is_request(
            &json!({"jsonrpc": "2.0", "method": "ping", "id": "req_1"})
        ));
        assert!(!is_request(
            &json!({"jsonrpc": "2.0", "method": "ping", "id": [1]})
        ));
        assert!(!is_request(
            &json!({"jsonrpc": "2.0", "method": 42, "id": 1})
        ));
    }

    #[test]
    fn test_response_shape() {
        let ok = json!({"jsonrpc": "2.0", "id": 3, "result": {"pong": true}});
        let err = json!({"jsonrpc": "2.0", "id": 3, "error": {"code": -32601, "message": "nope"}});
        assert_eq!(classify(&ok), MessageKind::Response);
        assert_eq!(classify(&err), MessageKind::Response);

        // Permissive: both result and error still classifies as a response
        let both = json!({"jsonrpc": "2.0", "id": 3, "result": null, "error": {"code": 1, "message": "x"}});
        assert!(is_response(&both));

        // Missing id is not a response
        assert!(!is_response(&json!({"jsonrpc": "2.0", "result": 1})));
    }

    #[test]
    fn test_notification_shape() {
        let n = json!({"jsonrpc": "2.0", "method": "camera_frame"});
        assert!(is_notification(&n));
        assert_eq!(classify(&n), MessageKind::Notification);

        // An id of any kind disqualifies a notification
        assert!(!is_notification(
            &json!({"jsonrpc": "2.0", "method": "x", "id": 1})
        ));
        // Non-structured params disqualify
        assert!(!is_notification(
            &json!({"jsonrpc": "2.0", "method": "x", "params": "str"})
        ));
        assert!(is_notification(
            &json!({"jsonrpc": "2.0", "method": "x", "params": [1, 2]})
        ));
    }

    #[test]
    fn test_classification_priority() {
        // Request shape wins over response even when both could match
        let hybrid = json!({
            "jsonrpc": "2.0", "method": "ping", "id": 1, "result": true
        });
        assert_eq!(classify(&hybrid), MessageKind::Request);
    }

    #[test]
    fn test_unclassified_sentinel() {
        assert_eq!(classify(&json!({"jsonrpc": "2.0"})), MessageKind::Unclassified);
        assert_eq!(classify(&json!({"foo": 1})), MessageKind::Unclassified);
        assert_eq!(classify(&json!(null)), MessageKind::Unclassified);
    }

    #[test]
    fn test_parse_taxonomy() {
        assert!(matches!(
            parse_str("{not json"),
            Err(MessageError::Decode(_))
        ));
        assert!(matches!(
            parse_str(r#"{"method": "ping"}"#),
            Err(MessageError::MissingEnvelope)
        ));

        // Parsing does not itself reject unclassifiable shapes
        let value = parse_str(r#"{"jsonrpc": "2.0", "weird": true}"#).unwrap();
        assert_eq!(classify(&value), MessageKind::Unclassified);
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        let value = parse_str("  {\"jsonrpc\": \"2.0\", \"method\": \"ping\"}\n").unwrap();
        assert_eq!(classify(&value), MessageKind::Notification);
    }

    #[test]
    fn test_parse_slice() {
        let value = parse_slice(br#"{"jsonrpc": "2.0", "id": 1, "result": null}"#).unwrap();
        assert_eq!(classify(&value), MessageKind::Response);
    }
}
