//! Endpoint specifications and per-call resolution
//!
//! An endpoint is either a literal path or a resolver computing the path from
//! the call arguments. Resolution also decides which argument becomes the
//! payload, since an identifier that lands in the path is not sent as body.
//!
//! Literal paths follow these rules:
//!
//! | arguments       | endpoint       | payload source |
//! |-----------------|----------------|----------------|
//! | none            | `path`         | `{}`           |
//! | `(id, data)`    | `path/id`      | `data`         |
//! | `(other, data)` | `path`         | `data`         |
//! | `(id)` for GET, HEAD, PUT, PATCH, DELETE | `path/id` | `{}` |
//! | `(x)` otherwise | `path`         | `x`            |
//!
//! A resolver is called once with every argument and its result is used
//! verbatim. The payload source is then the second argument if there is one,
//! else the first, else `{}`.

use std::fmt;
use std::sync::Arc;

use crate::error::ActionError;
use crate::method::Method;
use crate::payload::{ActionArgs, Payload};

type ResolverFn = dyn Fn(&ActionArgs) -> Result<String, ActionError> + Send + Sync;

/// Where an API action is sent.
#[derive(Clone)]
pub enum EndpointSpec {
    Literal(String),
    Resolver(Arc<ResolverFn>),
}

impl EndpointSpec {
    pub fn literal(path: impl Into<String>) -> Self {
        EndpointSpec::Literal(path.into())
    }

    /// A resolver that cannot fail
    ///
    /// ```
    /// use api_action_core::{ActionArgs, EndpointSpec, Method};
    /// use serde_json::json;
    ///
    /// let spec = EndpointSpec::resolver(|args| {
    ///     format!("/user/{}", args.param("id").unwrap_or_default())
    /// });
    /// let resolved = spec
    ///     .resolve(&Method::Put, &ActionArgs::from(json!({ "id": 10 })))
    ///     .unwrap();
    /// assert_eq!(resolved.endpoint, "/user/10");
    /// ```
    pub fn resolver<F, S>(f: F) -> Self
    where
        F: Fn(&ActionArgs) -> S + Send + Sync + 'static,
        S: Into<String>,
    {
        EndpointSpec::Resolver(Arc::new(
            move |args: &ActionArgs| -> Result<String, ActionError> { Ok(f(args).into()) },
        ))
    }

    /// A resolver whose error is returned from the action creator
    pub fn try_resolver<F>(f: F) -> Self
    where
        F: Fn(&ActionArgs) -> Result<String, ActionError> + Send + Sync + 'static,
    {
        EndpointSpec::Resolver(Arc::new(f))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, EndpointSpec::Literal(_))
    }

    /// Resolve the endpoint and pick the payload source for one call.
    pub fn resolve(&self, method: &Method, args: &ActionArgs) -> Result<Resolved, ActionError> {
        match self {
            EndpointSpec::Resolver(resolver) => {
                let endpoint = resolver(args)?;
                let source = args
                    .second()
                    .or_else(|| args.first())
                    .cloned()
                    .unwrap_or_default();
                Ok(Resolved { endpoint, source })
            }
            EndpointSpec::Literal(path) => Ok(resolve_literal(path, method, args)),
        }
    }
}

fn resolve_literal(path: &str, method: &Method, args: &ActionArgs) -> Resolved {
    let Some(first) = args.first() else {
        return Resolved {
            endpoint: path.to_string(),
            source: Payload::empty(),
        };
    };

    match (first.as_identifier(), args.second()) {
        (Some(id), Some(data)) => Resolved {
            endpoint: join(path, &id),
            source: data.clone(),
        },
        (Some(id), None) if method.accepts_identifier() => Resolved {
            endpoint: join(path, &id),
            source: Payload::empty(),
        },
        (None, Some(data)) => Resolved {
            endpoint: path.to_string(),
            source: data.clone(),
        },
        _ => Resolved {
            endpoint: path.to_string(),
            source: first.clone(),
        },
    }
}

fn join(path: &str, id: &str) -> String {
    format!("{path}/{id}")
}

impl fmt::Debug for EndpointSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointSpec::Literal(path) => f.debug_tuple("Literal").field(path).finish(),
            EndpointSpec::Resolver(_) => f.write_str("Resolver(<fn>)"),
        }
    }
}

impl From<&str> for EndpointSpec {
    fn from(path: &str) -> Self {
        EndpointSpec::literal(path)
    }
}

impl From<String> for EndpointSpec {
    fn from(path: String) -> Self {
        EndpointSpec::Literal(path)
    }
}

/// Outcome of resolving an endpoint for one call
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub endpoint: String,
    /// Input handed to the payload transform
    pub source: Payload,
}
