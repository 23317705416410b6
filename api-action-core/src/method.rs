//! Transport verbs carried in `meta.method`

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// HTTP-style method of an API action.
///
/// Parsing never fails: the common verbs map to their variants and any
/// other string is kept verbatim as [`Method::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
    Custom(String),
}

/// What a method addresses when the endpoint is a literal path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Always the literal path (POST, OPTIONS, custom verbs)
    Collection,
    /// A single resource when an identifier is passed (PUT, PATCH, DELETE)
    Resource,
    /// The collection, or one item when an identifier is passed (GET, HEAD)
    OptionalResource,
}

impl Method {
    /// The verb as it appears in `meta.method` and in the lifecycle types
    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Custom(verb) => verb,
        }
    }

    pub fn target(&self) -> Target {
        match self {
            Method::Get | Method::Head => Target::OptionalResource,
            Method::Put | Method::Patch | Method::Delete => Target::Resource,
            Method::Post | Method::Options | Method::Custom(_) => Target::Collection,
        }
    }

    /// Whether a lone identifier argument is consumed by the endpoint
    pub fn accepts_identifier(&self) -> bool {
        !matches!(self.target(), Target::Collection)
    }
}

impl FromStr for Method {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "PATCH" => Method::Patch,
            "DELETE" => Method::Delete,
            "HEAD" => Method::Head,
            "OPTIONS" => Method::Options,
            other => Method::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Method {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(method) => method,
            Err(never) => match never {},
        }
    }
}

impl From<String> for Method {
    fn from(s: String) -> Self {
        Method::from(s.as_str())
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Method {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
