//! Action payloads and action creator arguments
//!
//! A payload is either plain JSON data or an error value. Keeping the two
//! apart in [`Payload`] is what decides whether an action carries
//! `error: true`, so there is no guessing about what counts as an error.
//!
//! [`ActionArgs`] holds the positional arguments an action creator was
//! called with. Endpoint resolvers read identifiers and named parameters
//! out of it:
//!
//! ```
//! use api_action_core::ActionArgs;
//! use serde_json::json;
//!
//! let args = ActionArgs::from(json!({ "id": 10, "name": "james" }));
//! assert_eq!(args.param("id").as_deref(), Some("10"));
//! assert_eq!(args.param("name").as_deref(), Some("james"));
//!
//! let args = ActionArgs::from((json!(10), json!({ "name": "james" })));
//! assert_eq!(args.id().as_deref(), Some("10"));
//! ```

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::ActionError;

/// An error carried as action payload.
///
/// `name` is the error kind (`"Error"`, `"TypeError"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{name}: {message}")]
pub struct ErrorPayload {
    pub name: String,
    pub message: String,
}

impl ErrorPayload {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// A generic `Error`
    pub fn error(message: impl Into<String>) -> Self {
        Self::new("Error", message)
    }

    pub fn type_error(message: impl Into<String>) -> Self {
        Self::new("TypeError", message)
    }

    /// Capture any error's message as a generic `Error` payload
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        Self::error(err.to_string())
    }
}

/// The payload of an action: data, or an error value.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Data(Value),
    Error(ErrorPayload),
}

impl Payload {
    /// The `{}` payload used when a call carries no body
    pub fn empty() -> Self {
        Payload::Data(Value::Object(Map::new()))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Payload::Error(_))
    }

    pub fn as_data(&self) -> Option<&Value> {
        match self {
            Payload::Data(value) => Some(value),
            Payload::Error(_) => None,
        }
    }

    pub fn as_error(&self) -> Option<&ErrorPayload> {
        match self {
            Payload::Data(_) => None,
            Payload::Error(err) => Some(err),
        }
    }

    /// Look up a field of an object payload
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_data().and_then(|value| value.get(key))
    }

    /// The payload rendered as a path segment, if it is a number or string.
    pub fn as_identifier(&self) -> Option<String> {
        self.as_data().and_then(segment)
    }

    pub fn into_result(self) -> Result<Value, ErrorPayload> {
        match self {
            Payload::Data(value) => Ok(value),
            Payload::Error(err) => Err(err),
        }
    }
}

impl Default for Payload {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Data(value)
    }
}

impl From<ErrorPayload> for Payload {
    fn from(err: ErrorPayload) -> Self {
        Payload::Error(err)
    }
}

impl<E: Into<ErrorPayload>> From<Result<Value, E>> for Payload {
    fn from(result: Result<Value, E>) -> Self {
        match result {
            Ok(value) => Payload::Data(value),
            Err(err) => Payload::Error(err.into()),
        }
    }
}

impl Serialize for Payload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Payload::Data(value) => value.serialize(serializer),
            Payload::Error(err) => err.serialize(serializer),
        }
    }
}

/// Render a scalar JSON value as a path segment (strings unquoted)
pub(crate) fn segment(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Positional arguments of one action creator call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionArgs {
    args: Vec<Payload>,
}

impl ActionArgs {
    /// No arguments
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an argument
    pub fn arg(mut self, arg: impl Into<Payload>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Payload> {
        self.args.get(index)
    }

    pub fn first(&self) -> Option<&Payload> {
        self.get(0)
    }

    pub fn second(&self) -> Option<&Payload> {
        self.get(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Payload> {
        self.args.iter()
    }

    /// The first argument as an identifier, if it is a number or string
    pub fn id(&self) -> Option<String> {
        self.first().and_then(Payload::as_identifier)
    }

    /// A scalar field of the first argument rendered as a path segment
    pub fn param(&self, name: &str) -> Option<String> {
        self.first()
            .and_then(|arg| arg.get(name))
            .and_then(segment)
    }

    /// Like [`id`](Self::id), failing when the identifier is absent
    pub fn require_id(&self) -> Result<String, ActionError> {
        let first = self
            .first()
            .ok_or(ActionError::MissingArgument { index: 0 })?;
        first
            .as_identifier()
            .ok_or(ActionError::NotIdentifier { index: 0 })
    }

    /// Like [`param`](Self::param), failing when the field is absent
    pub fn require_param(&self, name: &str) -> Result<String, ActionError> {
        self.param(name).ok_or_else(|| ActionError::MissingParam {
            name: name.to_string(),
        })
    }
}

impl From<()> for ActionArgs {
    fn from(_: ()) -> Self {
        Self::new()
    }
}

impl From<Value> for ActionArgs {
    fn from(value: Value) -> Self {
        Self::new().arg(value)
    }
}

impl From<ErrorPayload> for ActionArgs {
    fn from(err: ErrorPayload) -> Self {
        Self::new().arg(err)
    }
}

impl From<Payload> for ActionArgs {
    fn from(payload: Payload) -> Self {
        Self::new().arg(payload)
    }
}

impl<A: Into<Payload>, B: Into<Payload>> From<(A, B)> for ActionArgs {
    fn from((a, b): (A, B)) -> Self {
        Self::new().arg(a).arg(b)
    }
}

impl From<Vec<Payload>> for ActionArgs {
    fn from(args: Vec<Payload>) -> Self {
        Self { args }
    }
}
