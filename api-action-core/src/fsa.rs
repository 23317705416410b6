//! Flux-Standard-Action checks over raw JSON
//!
//! Middleware that receives actions as JSON can use these to decide whether
//! a value is an FSA at all, whether it reports an error, and whether it
//! asks for an API call.

use serde_json::Value;

/// The only top-level keys an FSA may have
pub const FSA_KEYS: [&str; 4] = ["type", "payload", "error", "meta"];

/// Whether `value` is a Flux-Standard-Action.
///
/// It must be an object with a string `type` and no keys outside
/// `type`, `payload`, `error` and `meta`.
///
/// ```
/// use api_action_core::fsa::is_fsa;
/// use serde_json::json;
///
/// assert!(is_fsa(&json!({ "type": "ADD", "payload": 1 })));
/// assert!(!is_fsa(&json!({ "type": "ADD", "extra": 1 })));
/// assert!(!is_fsa(&json!({ "type": 5 })));
/// ```
pub fn is_fsa(value: &Value) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };
    object.get("type").is_some_and(Value::is_string)
        && object.keys().all(|key| FSA_KEYS.contains(&key.as_str()))
}

/// Whether `value` is an FSA with `error: true`
pub fn is_error(value: &Value) -> bool {
    is_fsa(value) && value.get("error") == Some(&Value::Bool(true))
}

/// Whether `value` is an FSA marked for the API middleware (`meta.api: true`)
pub fn is_api_action(value: &Value) -> bool {
    is_fsa(value) && value.pointer("/meta/api") == Some(&Value::Bool(true))
}
