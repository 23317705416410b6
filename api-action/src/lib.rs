//! api-action: Flux-Standard-Action creators for API middleware
//!
//! Describe an API call once, then build actions for it with whatever
//! arguments the call site has. A middleware picks them up by `meta.api`,
//! sends the request, and dispatches the REQUEST / SUCCESS / FAILURE types.
//!
//! # Example
//! ```
//! use api_action::prelude::*;
//! use serde_json::json;
//!
//! let update_item = create_api_action("ITEM", "PUT", "/items");
//!
//! let action = update_item.create((json!(10), json!({ "name": "james" }))).unwrap();
//! assert_eq!(action.endpoint(), "/items/10");
//! assert_eq!(action.payload, Payload::Data(json!({ "name": "james" })));
//! assert_eq!(action.types().request(), "ITEM_PUT_REQUEST");
//! ```

// Re-export everything from core
pub use api_action_core::*;

/// Prelude for convenient imports
pub mod prelude {
    pub use api_action_core::prelude::*;

    // Validators and test helpers
    pub use api_action_core::fsa::{is_api_action, is_error, is_fsa};
    pub use api_action_core::{assert_api_call, assert_error_action, assert_fsa};
}
