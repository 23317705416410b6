//! Assertions for tests that build API actions
//!
//! Each macro takes an [`FsaAction`](crate::FsaAction) and checks its
//! serialized form, so failures print the JSON the middleware would see.
//!
//! # Example
//!
//! ```
//! use api_action_core::{assert_api_call, assert_fsa, create_api_action};
//!
//! let delete_item = create_api_action("ITEM", "DELETE", "/items");
//! let action = delete_item.create(serde_json::json!(5)).unwrap();
//!
//! assert_fsa!(action);
//! assert_api_call!(action, "DELETE", "/items/5");
//! ```

/// Assert that an action serializes to a valid Flux-Standard-Action.
#[macro_export]
macro_rules! assert_fsa {
    ($action:expr) => {{
        let value = $action.to_value();
        assert!(
            $crate::fsa::is_fsa(&value),
            "Expected a Flux-Standard-Action, got: {}",
            value
        );
    }};
}

/// Assert that an action is marked for the API middleware and targets
/// `method` and `endpoint`.
#[macro_export]
macro_rules! assert_api_call {
    ($action:expr, $method:expr, $endpoint:expr) => {{
        let value = $action.to_value();
        assert!(
            $crate::fsa::is_api_action(&value),
            "Expected `meta.api: true`, got: {}",
            value
        );
        assert_eq!(
            (value["meta"]["method"].as_str(), value["meta"]["endpoint"].as_str()),
            (Some($method), Some($endpoint)),
            "Unexpected API call in: {}",
            value
        );
    }};
}

/// Assert that an action carries an error payload.
///
/// With a second argument, also checks the error message.
#[macro_export]
macro_rules! assert_error_action {
    ($action:expr) => {{
        let value = $action.to_value();
        assert!(
            $crate::fsa::is_error(&value),
            "Expected `error: true`, got: {}",
            value
        );
    }};
    ($action:expr, $message:expr) => {{
        $crate::assert_error_action!($action);
        let value = $action.to_value();
        assert_eq!(
            value["payload"]["message"].as_str(),
            Some($message),
            "Unexpected error message in: {}",
            value
        );
    }};
}

#[cfg(test)]
mod tests {
    use crate::{create_api_action, ErrorPayload};
    use serde_json::json;

    #[test]
    fn test_assert_fsa() {
        let action = create_api_action("T", "PUT", "/t")
            .create((json!(1), json!({ "a": 1 })))
            .unwrap();
        assert_fsa!(action);
    }

    #[test]
    fn test_assert_api_call() {
        let action = create_api_action("ITEMS", "GET", "/items")
            .create(json!(7))
            .unwrap();
        assert_api_call!(action, "GET", "/items/7");
    }

    #[test]
    #[should_panic(expected = "Unexpected API call")]
    fn test_assert_api_call_rejects_other_endpoint() {
        let action = create_api_action("ITEMS", "GET", "/items").create(()).unwrap();
        assert_api_call!(action, "GET", "/items/7");
    }

    #[test]
    fn test_assert_error_action() {
        let action = create_api_action("ITEMS", "POST", "/items")
            .create(ErrorPayload::type_error("offline"))
            .unwrap();
        assert_error_action!(action);
        assert_error_action!(action, "offline");
    }

    #[test]
    #[should_panic(expected = "Expected `error: true`")]
    fn test_assert_error_action_rejects_data() {
        let action = create_api_action("ITEMS", "POST", "/items")
            .create(json!({}))
            .unwrap();
        assert_error_action!(action);
    }
}
