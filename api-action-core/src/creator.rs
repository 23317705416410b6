//! The API action creator factory
//!
//! [`create_api_action`] builds an [`ApiActionCreator`]: a reusable value
//! that turns call arguments into an [`FsaAction`] for an API middleware.
//!
//! # Example
//!
//! ```
//! use api_action_core::{create_api_action, ErrorPayload};
//! use serde_json::json;
//!
//! let update_user = create_api_action("USER", "PUT", "/users");
//!
//! let action = update_user.create((json!(10), json!({ "name": "james" }))).unwrap();
//! assert_eq!(action.endpoint(), "/users/10");
//! assert_eq!(action.types().success(), "USER_PUT_SUCCESS");
//! assert!(!action.is_error());
//!
//! let action = update_user.create(ErrorPayload::type_error("offline")).unwrap();
//! assert!(action.is_error());
//! ```
//!
//! Payload and meta transforms are optional:
//!
//! ```
//! use api_action_core::{create_api_action, MetaTransform};
//! use serde_json::json;
//!
//! let create_post = create_api_action("POST", "POST", "/posts")
//!     .meta_transform(MetaTransform::pick(["cid"]));
//!
//! let action = create_post.create(json!({ "title": "hi", "cid": 5 })).unwrap();
//! assert_eq!(action.meta.get("cid"), Some(&json!(5)));
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::action::{ApiMeta, FsaAction, RESERVED_META_KEYS};
use crate::endpoint::EndpointSpec;
use crate::error::ActionError;
use crate::lifecycle::{ActionTypes, TypeNaming};
use crate::method::Method;
use crate::payload::{ActionArgs, Payload};

type PayloadFn = dyn Fn(Payload) -> Result<Payload, ActionError> + Send + Sync;
type MetaFn = dyn Fn(&Payload) -> Result<Map<String, Value>, ActionError> + Send + Sync;

/// Maps the payload source of a call to the action payload.
///
/// The default is the identity.
#[derive(Clone)]
pub struct PayloadTransform(Arc<PayloadFn>);

impl PayloadTransform {
    pub fn identity() -> Self {
        Self(Arc::new(|payload: Payload| Ok::<_, ActionError>(payload)))
    }

    pub fn new<F, P>(f: F) -> Self
    where
        F: Fn(Payload) -> P + Send + Sync + 'static,
        P: Into<Payload>,
    {
        Self(Arc::new(
            move |payload: Payload| -> Result<Payload, ActionError> { Ok(f(payload).into()) },
        ))
    }

    pub fn try_new<F>(f: F) -> Self
    where
        F: Fn(Payload) -> Result<Payload, ActionError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn apply(&self, source: Payload) -> Result<Payload, ActionError> {
        (self.0)(source)
    }
}

impl Default for PayloadTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for PayloadTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PayloadTransform(<fn>)")
    }
}

/// Maps the resolved payload to extra `meta` fields.
///
/// The default adds nothing.
#[derive(Clone)]
pub struct MetaTransform(Arc<MetaFn>);

impl MetaTransform {
    pub fn none() -> Self {
        Self(Arc::new(|_: &Payload| Ok::<_, ActionError>(Map::new())))
    }

    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Payload) -> Map<String, Value> + Send + Sync + 'static,
    {
        Self(Arc::new(
            move |payload: &Payload| -> Result<Map<String, Value>, ActionError> { Ok(f(payload)) },
        ))
    }

    pub fn try_new<F>(f: F) -> Self
    where
        F: Fn(&Payload) -> Result<Map<String, Value>, ActionError> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Copy the named fields of an object payload into `meta`.
    ///
    /// Fields missing from the payload are skipped.
    pub fn pick<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        Self::new(move |payload| {
            keys.iter()
                .filter_map(|key| payload.get(key).map(|v| (key.clone(), v.clone())))
                .collect()
        })
    }

    pub fn apply(&self, payload: &Payload) -> Result<Map<String, Value>, ActionError> {
        (self.0)(payload)
    }
}

impl Default for MetaTransform {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Debug for MetaTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MetaTransform(<fn>)")
    }
}

/// Build an action creator for one API call.
///
/// Nothing is validated here; an empty type or endpoint only shows up in the
/// actions produced later.
pub fn create_api_action(
    action_type: impl Into<String>,
    method: impl Into<Method>,
    endpoint: impl Into<EndpointSpec>,
) -> ApiActionCreator {
    ApiActionCreator::new(action_type, method, endpoint)
}

/// Produces [`FsaAction`]s for one API call.
///
/// Cheap to clone; clones share the caller functions.
#[derive(Debug, Clone)]
pub struct ApiActionCreator {
    action_type: String,
    method: Method,
    endpoint: EndpointSpec,
    payload: PayloadTransform,
    meta: MetaTransform,
    naming: TypeNaming,
    types: ActionTypes,
}

impl ApiActionCreator {
    pub fn new(
        action_type: impl Into<String>,
        method: impl Into<Method>,
        endpoint: impl Into<EndpointSpec>,
    ) -> Self {
        let action_type = action_type.into();
        let method = method.into();
        let naming = TypeNaming::default();
        let types = ActionTypes::with_naming(&action_type, &method, &naming);
        Self {
            action_type,
            method,
            endpoint: endpoint.into(),
            payload: PayloadTransform::default(),
            meta: MetaTransform::default(),
            naming,
            types,
        }
    }

    /// Set the payload transform
    pub fn with_payload<F, P>(self, f: F) -> Self
    where
        F: Fn(Payload) -> P + Send + Sync + 'static,
        P: Into<Payload>,
    {
        self.payload_transform(PayloadTransform::new(f))
    }

    /// Set a fallible payload transform
    pub fn try_with_payload<F>(self, f: F) -> Self
    where
        F: Fn(Payload) -> Result<Payload, ActionError> + Send + Sync + 'static,
    {
        self.payload_transform(PayloadTransform::try_new(f))
    }

    pub fn payload_transform(mut self, transform: PayloadTransform) -> Self {
        self.payload = transform;
        self
    }

    /// Set the meta transform
    pub fn with_meta<F>(self, f: F) -> Self
    where
        F: Fn(&Payload) -> Map<String, Value> + Send + Sync + 'static,
    {
        self.meta_transform(MetaTransform::new(f))
    }

    /// Set a fallible meta transform
    pub fn try_with_meta<F>(self, f: F) -> Self
    where
        F: Fn(&Payload) -> Result<Map<String, Value>, ActionError> + Send + Sync + 'static,
    {
        self.meta_transform(MetaTransform::try_new(f))
    }

    pub fn meta_transform(mut self, transform: MetaTransform) -> Self {
        self.meta = transform;
        self
    }

    /// Change how lifecycle types are spelled
    pub fn with_naming(mut self, naming: TypeNaming) -> Self {
        self.types = ActionTypes::with_naming(&self.action_type, &self.method, &naming);
        self.naming = naming;
        self
    }

    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn endpoint(&self) -> &EndpointSpec {
        &self.endpoint
    }

    pub fn naming(&self) -> &TypeNaming {
        &self.naming
    }

    pub fn types(&self) -> &ActionTypes {
        &self.types
    }

    /// Build the action for one call.
    ///
    /// Runs the endpoint resolver, the payload transform and the meta
    /// transform at most once each. Their errors are returned as is.
    pub fn create(&self, args: impl Into<ActionArgs>) -> Result<FsaAction, ActionError> {
        let args = args.into();
        let resolved = self.endpoint.resolve(&self.method, &args)?;
        let payload = self.payload.apply(resolved.source)?;
        let extra = self.extra_meta(&payload)?;

        let action = FsaAction {
            action_type: self.action_type.clone(),
            payload,
            meta: ApiMeta {
                method: self.method.clone(),
                endpoint: resolved.endpoint,
                types: self.types.clone(),
                extra,
            },
        };

        tracing::trace!(
            action = %action.action_type,
            method = %action.meta.method,
            endpoint = %action.meta.endpoint,
            error = action.is_error(),
            "Created API action"
        );

        Ok(action)
    }

    fn extra_meta(&self, payload: &Payload) -> Result<Map<String, Value>, ActionError> {
        let mut extra = self.meta.apply(payload)?;
        for key in RESERVED_META_KEYS {
            if extra.remove(key).is_some() {
                tracing::warn!(
                    action = %self.action_type,
                    key,
                    "Meta transform returned a reserved key, ignoring it"
                );
            }
        }
        Ok(extra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::ErrorPayload;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_types_precomputed() {
        let creator = create_api_action("TYPE", "GET", "/sample");
        assert_eq!(creator.types().request(), "TYPE_GET_REQUEST");
        let action = creator.create(()).unwrap();
        assert_eq!(action.types(), creator.types());
    }

    #[test]
    fn test_identity_payload() {
        let creator = create_api_action("TYPE", "POST", "/sample");
        let action = creator.create(json!({ "foo": "bar" })).unwrap();
        assert_eq!(action.payload, Payload::Data(json!({ "foo": "bar" })));
        assert_eq!(action.endpoint(), "/sample");
        assert!(action.meta.extra.is_empty());
    }

    #[test]
    fn test_payload_transform_receives_source() {
        let creator = create_api_action("TYPE", "PUT", "/sample").with_payload(|p: Payload| {
            let name = p.get("name").cloned().unwrap_or(Value::Null);
            json!({ "user": { "name": name } })
        });
        let action = creator.create((json!(1), json!({ "name": "ann" }))).unwrap();
        assert_eq!(action.payload, Payload::Data(json!({ "user": { "name": "ann" } })));
        assert_eq!(action.endpoint(), "/sample/1");
    }

    #[test]
    fn test_payload_transform_can_produce_error() {
        let creator = create_api_action("TYPE", "POST", "/sample")
            .with_payload(|_| ErrorPayload::error("rejected locally"));
        let action = creator.create(json!({})).unwrap();
        assert!(action.is_error());
    }

    #[test]
    fn test_meta_transform_merges_fields() {
        let creator = create_api_action("TYPE", "POST", "/sample").with_meta(|p: &Payload| {
            let mut extra = Map::new();
            if let Some(cid) = p.get("cid") {
                extra.insert("cid".to_string(), cid.clone());
            }
            extra
        });
        let action = creator.create(json!({ "foo": "bar", "cid": 5 })).unwrap();
        assert_eq!(action.meta.get("cid"), Some(&json!(5)));
    }

    #[test]
    fn test_reserved_meta_keys_are_dropped() {
        let creator = create_api_action("TYPE", "GET", "/sample").with_meta(|_: &Payload| {
            let mut extra = Map::new();
            extra.insert("api".into(), json!(false));
            extra.insert("endpoint".into(), json!("/elsewhere"));
            extra.insert("types".into(), json!([]));
            extra.insert("trace".into(), json!("abc"));
            extra
        });
        let value = creator.create(()).unwrap().to_value();
        assert_eq!(value["meta"]["api"], json!(true));
        assert_eq!(value["meta"]["endpoint"], json!("/sample"));
        assert_eq!(value["meta"]["types"][0], json!("TYPE_GET_REQUEST"));
        assert_eq!(value["meta"]["trace"], json!("abc"));
    }

    #[test]
    fn test_pick_skips_missing_fields() {
        let creator = create_api_action("TYPE", "POST", "/sample")
            .meta_transform(MetaTransform::pick(["a", "b"]));
        let action = creator.create(json!({ "a": 1 })).unwrap();
        assert_eq!(action.meta.extra.len(), 1);
        assert_eq!(action.meta.get("a"), Some(&json!(1)));
    }

    #[test]
    fn test_transform_errors_propagate() {
        let creator = create_api_action("TYPE", "POST", "/sample")
            .try_with_payload(|_| Err(ActionError::msg("payload boom")));
        let err = creator.create(json!({})).unwrap_err();
        assert_eq!(err.to_string(), "payload boom");

        let creator = create_api_action("TYPE", "POST", "/sample")
            .try_with_meta(|_| Err(ActionError::msg("meta boom")));
        let err = creator.create(json!({})).unwrap_err();
        assert_eq!(err.to_string(), "meta boom");
    }

    #[test]
    fn test_resolver_error_skips_transforms() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let creator = create_api_action(
            "TYPE",
            "GET",
            EndpointSpec::try_resolver(|args| args.require_id()),
        )
        .with_payload(move |p| {
            counter.fetch_add(1, Ordering::SeqCst);
            p
        });
        assert!(creator.create(()).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_each_function_called_once_per_call() {
        let payload_calls = Arc::new(AtomicUsize::new(0));
        let meta_calls = Arc::new(AtomicUsize::new(0));
        let (p, m) = (Arc::clone(&payload_calls), Arc::clone(&meta_calls));
        let creator = create_api_action("TYPE", "GET", "/sample")
            .with_payload(move |payload| {
                p.fetch_add(1, Ordering::SeqCst);
                payload
            })
            .with_meta(move |_: &Payload| {
                m.fetch_add(1, Ordering::SeqCst);
                Map::new()
            });

        creator.create(()).unwrap();
        creator.create(json!(3)).unwrap();
        assert_eq!(payload_calls.load(Ordering::SeqCst), 2);
        assert_eq!(meta_calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_with_naming_recomputes_types() {
        let naming = TypeNaming {
            separator: "/".into(),
            ..TypeNaming::default()
        };
        let creator = create_api_action("user", "GET", "/users").with_naming(naming);
        assert_eq!(creator.types().failure(), "user/GET/FAILURE");
        assert_eq!(creator.naming().separator, "/");
    }

    #[test]
    fn test_creator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiActionCreator>();
    }
}
