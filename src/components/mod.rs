//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and cards while reading/writing the
//! shared cart state from the Leptos context provider.

pub mod cart_game_card;
pub mod cart_header;
pub mod catalog_header;
pub mod footer;
pub mod game_card;
pub mod navbar;
pub mod order_summary;
