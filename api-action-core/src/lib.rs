//! Core types and the action creator factory for api-action
//!
//! This crate builds Flux-Standard-Actions (FSA) that describe API calls.
//! A middleware elsewhere recognizes them by `meta.api`, performs the request
//! with `meta.method` and `meta.endpoint`, and reports progress with the
//! REQUEST / SUCCESS / FAILURE types in `meta.types`.
//!
//! # Core Concepts
//!
//! - **ApiActionCreator**: turns call arguments into an [`FsaAction`]
//! - **EndpointSpec**: a literal path or a resolver over the call arguments
//! - **Payload**: JSON data or an error value; errors set `error: true`
//! - **ActionTypes**: the lifecycle type triplet
//!
//! # Basic Example
//!
//! ```
//! use api_action_core::prelude::*;
//! use serde_json::json;
//!
//! let fetch_users = create_api_action("USERS", "GET", "/users");
//! let action = fetch_users.create(()).unwrap();
//!
//! assert_eq!(
//!     action.to_value(),
//!     json!({
//!         "type": "USERS",
//!         "payload": {},
//!         "meta": {
//!             "api": true,
//!             "method": "GET",
//!             "endpoint": "/users",
//!             "types": ["USERS_GET_REQUEST", "USERS_GET_SUCCESS", "USERS_GET_FAILURE"]
//!         }
//!     })
//! );
//! ```
//!
//! # Dynamic Endpoints
//!
//! ```
//! use api_action_core::prelude::*;
//! use serde_json::json;
//!
//! let remove_account = create_api_action(
//!     "ACCOUNT",
//!     "DELETE",
//!     EndpointSpec::try_resolver(|args| {
//!         Ok(format!(
//!             "/user/{}/account/{}",
//!             args.require_param("id")?,
//!             args.require_param("accountID")?
//!         ))
//!     }),
//! );
//!
//! let action = remove_account.create(json!({ "id": 10, "accountID": 25 })).unwrap();
//! assert_eq!(action.endpoint(), "/user/10/account/25");
//!
//! // Missing fields surface as errors from `create`
//! assert!(remove_account.create(json!({ "id": 10 })).is_err());
//! ```

pub mod action;
pub mod creator;
pub mod endpoint;
pub mod error;
pub mod fsa;
pub mod lifecycle;
pub mod method;
pub mod payload;
pub mod testing;

// Core exports
pub use action::{ApiMeta, FsaAction, RESERVED_META_KEYS};
pub use creator::{create_api_action, ApiActionCreator, MetaTransform, PayloadTransform};
pub use endpoint::{EndpointSpec, Resolved};
pub use error::{ActionError, BoxError};
pub use lifecycle::{ActionTypes, LifecycleStage, TypeNaming};
pub use method::{Method, Target};
pub use payload::{ActionArgs, ErrorPayload, Payload};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::FsaAction;
    pub use crate::creator::{create_api_action, ApiActionCreator, MetaTransform, PayloadTransform};
    pub use crate::endpoint::EndpointSpec;
    pub use crate::error::ActionError;
    pub use crate::lifecycle::{ActionTypes, LifecycleStage, TypeNaming};
    pub use crate::method::Method;
    pub use crate::payload::{ActionArgs, ErrorPayload, Payload};
}
