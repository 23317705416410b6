//! Errors surfaced by caller-supplied resolvers and transforms

use std::error::Error as StdError;

/// Boxed error type accepted by [`ActionError::other`]
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Failure raised while building an action.
///
/// The factory itself never fails. Every variant originates in a caller
/// function (endpoint resolver, payload transform or meta transform) and is
/// returned unchanged from [`ApiActionCreator::create`](crate::ApiActionCreator::create).
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// A positional argument the resolver required was not supplied
    #[error("missing argument at position {index}")]
    MissingArgument { index: usize },

    /// The first argument has no usable field with this name
    #[error("missing parameter `{name}` in first argument")]
    MissingParam { name: String },

    /// The argument exists but is not a number or string
    #[error("argument at position {index} is not an identifier")]
    NotIdentifier { index: usize },

    /// Free-form failure from a caller function
    #[error("{0}")]
    Message(String),

    /// Any other error raised by a caller function
    #[error(transparent)]
    Other(BoxError),
}

impl ActionError {
    /// Wrap an arbitrary error
    pub fn other<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Other(err.into())
    }

    /// Build an error from a message
    pub fn msg(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}
