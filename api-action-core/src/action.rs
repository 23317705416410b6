//! The Flux-Standard-Action produced by action creators

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::lifecycle::ActionTypes;
use crate::method::Method;
use crate::payload::Payload;

/// Keys of `meta` owned by the factory
pub const RESERVED_META_KEYS: [&str; 4] = ["api", "method", "endpoint", "types"];

/// `meta` of an API action.
///
/// Serializes as `{ api: true, method, endpoint, ...extra, types }`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiMeta {
    pub method: Method,
    pub endpoint: String,
    pub types: ActionTypes,
    /// Fields contributed by the meta transform, never a reserved key
    pub extra: Map<String, Value>,
}

impl ApiMeta {
    /// Always true, marks the action for the API middleware
    pub fn api(&self) -> bool {
        true
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

impl Serialize for ApiMeta {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(4 + self.extra.len()))?;
        map.serialize_entry("api", &true)?;
        map.serialize_entry("method", &self.method)?;
        map.serialize_entry("endpoint", &self.endpoint)?;
        for (key, value) in &self.extra {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry("types", &self.types)?;
        map.end()
    }
}

/// A Flux-Standard-Action describing one API call.
///
/// Serializes to exactly `type`, `payload`, `meta`, plus `error: true` when
/// the payload is an error. `error` is derived from the payload and is never
/// written as `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct FsaAction {
    pub action_type: String,
    pub payload: Payload,
    pub meta: ApiMeta,
}

impl FsaAction {
    pub fn is_error(&self) -> bool {
        self.payload.is_error()
    }

    /// Whether an API middleware should handle this action
    pub fn is_api(&self) -> bool {
        self.meta.api()
    }

    pub fn method(&self) -> &Method {
        &self.meta.method
    }

    pub fn endpoint(&self) -> &str {
        &self.meta.endpoint
    }

    pub fn types(&self) -> &ActionTypes {
        &self.meta.types
    }

    /// The action as a JSON value
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl Serialize for FsaAction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let error = self.is_error();
        let mut map = serializer.serialize_map(Some(if error { 4 } else { 3 }))?;
        map.serialize_entry("type", &self.action_type)?;
        map.serialize_entry("payload", &self.payload)?;
        if error {
            map.serialize_entry("error", &true)?;
        }
        map.serialize_entry("meta", &self.meta)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::ErrorPayload;
    use serde_json::json;

    fn action(payload: Payload) -> FsaAction {
        FsaAction {
            action_type: "TYPE".into(),
            payload,
            meta: ApiMeta {
                method: Method::Get,
                endpoint: "/sample".into(),
                types: ActionTypes::new("TYPE", &Method::Get),
                extra: Map::new(),
            },
        }
    }

    #[test]
    fn test_serialize_shape() {
        let value = action(Payload::empty()).to_value();
        assert_eq!(
            value,
            json!({
                "type": "TYPE",
                "payload": {},
                "meta": {
                    "api": true,
                    "method": "GET",
                    "endpoint": "/sample",
                    "types": ["TYPE_GET_REQUEST", "TYPE_GET_SUCCESS", "TYPE_GET_FAILURE"]
                }
            })
        );
    }

    #[test]
    fn test_error_key_only_when_true() {
        let value = action(Payload::from(ErrorPayload::type_error("x"))).to_value();
        assert_eq!(value["error"], json!(true));

        let value = action(Payload::empty()).to_value();
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_extra_meta_serialized() {
        let mut fsa = action(Payload::empty());
        fsa.meta.extra.insert("cid".into(), json!(5));
        let value = fsa.to_value();
        assert_eq!(value["meta"]["cid"], json!(5));
        assert_eq!(value["meta"]["api"], json!(true));
        assert_eq!(fsa.meta.get("cid"), Some(&json!(5)));
    }
}
