//! REQUEST / SUCCESS / FAILURE lifecycle types
//!
//! Every API action carries the three action types a middleware dispatches
//! while the request is in flight. They are derived from the base type and
//! the method:
//!
//! ```
//! use api_action_core::{ActionTypes, LifecycleStage, Method};
//!
//! let types = ActionTypes::new("USER", &Method::Put);
//! assert_eq!(types.get(LifecycleStage::Request), "USER_PUT_REQUEST");
//! assert_eq!(types.get(LifecycleStage::Failure), "USER_PUT_FAILURE");
//! ```

use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};

use crate::method::Method;

/// Stage of an API call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleStage {
    Request,
    Success,
    Failure,
}

impl LifecycleStage {
    pub const ALL: [LifecycleStage; 3] = [
        LifecycleStage::Request,
        LifecycleStage::Success,
        LifecycleStage::Failure,
    ];
}

/// How lifecycle types are spelled.
///
/// Deserializes from partial config, missing fields keep their defaults:
///
/// ```
/// use api_action_core::TypeNaming;
///
/// let naming: TypeNaming = serde_json::from_str(r#"{ "separator": "/" }"#).unwrap();
/// assert_eq!(naming.separator, "/");
/// assert_eq!(naming.request, "REQUEST");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeNaming {
    /// Joins base type, method and suffix
    pub separator: String,
    pub request: String,
    pub success: String,
    pub failure: String,
}

impl Default for TypeNaming {
    fn default() -> Self {
        Self {
            separator: "_".to_string(),
            request: "REQUEST".to_string(),
            success: "SUCCESS".to_string(),
            failure: "FAILURE".to_string(),
        }
    }
}

impl TypeNaming {
    pub fn suffix(&self, stage: LifecycleStage) -> &str {
        match stage {
            LifecycleStage::Request => &self.request,
            LifecycleStage::Success => &self.success,
            LifecycleStage::Failure => &self.failure,
        }
    }

    fn compose(&self, base: &str, method: &Method, stage: LifecycleStage) -> String {
        [base, method.as_str(), self.suffix(stage)].join(self.separator.as_str())
    }
}

/// The lifecycle type triplet of one API action.
///
/// Serializes as a three element array in REQUEST, SUCCESS, FAILURE order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionTypes {
    request: String,
    success: String,
    failure: String,
}

impl ActionTypes {
    /// Types with the default `BASE_METHOD_SUFFIX` naming
    pub fn new(base: &str, method: &Method) -> Self {
        Self::with_naming(base, method, &TypeNaming::default())
    }

    pub fn with_naming(base: &str, method: &Method, naming: &TypeNaming) -> Self {
        Self {
            request: naming.compose(base, method, LifecycleStage::Request),
            success: naming.compose(base, method, LifecycleStage::Success),
            failure: naming.compose(base, method, LifecycleStage::Failure),
        }
    }

    pub fn get(&self, stage: LifecycleStage) -> &str {
        match stage {
            LifecycleStage::Request => &self.request,
            LifecycleStage::Success => &self.success,
            LifecycleStage::Failure => &self.failure,
        }
    }

    pub fn request(&self) -> &str {
        &self.request
    }

    pub fn success(&self) -> &str {
        &self.success
    }

    pub fn failure(&self) -> &str {
        &self.failure
    }

    /// Which stage an action type belongs to, if any
    pub fn stage_of(&self, action_type: &str) -> Option<LifecycleStage> {
        LifecycleStage::ALL
            .into_iter()
            .find(|stage| self.get(*stage) == action_type)
    }

    pub fn as_array(&self) -> [&str; 3] {
        [&self.request, &self.success, &self.failure]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.as_array().into_iter()
    }
}

impl Serialize for ActionTypes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(3))?;
        for ty in self.iter() {
            seq.serialize_element(ty)?;
        }
        seq.end()
    }
}
