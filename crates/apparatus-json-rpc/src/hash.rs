use serde_json::Value;

/// MD5 hex digest of the compact JSON encoding of a value.
///
/// Used to fingerprint configuration payloads; not a cryptographic
/// integrity check.
pub fn hash_json(value: &Value) -> String {
    let encoded = value.to_string();
    format!("{:x}", md5::compute(encoded.as_bytes()))
}
