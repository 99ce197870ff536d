//! Utility helpers shared across the storefront UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, URL state)
//! from page and component logic to keep both testable.

pub mod query_params;
pub mod storage;
