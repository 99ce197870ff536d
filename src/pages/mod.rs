//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, query-param wiring)
//! and delegates rendering details to `components`.

pub mod cart;
pub mod catalog;
