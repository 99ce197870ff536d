//! Wire DTOs for the remote game catalog API.
//!
//! DESIGN
//! ======
//! These types mirror the catalog service's camelCase JSON payloads so serde
//! round-trips stay lossless. The same `Game` shape doubles as the cart line
//! item; there is no separate cart-line type.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A purchasable game as represented in the catalog payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Opaque unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Single category string; the catalog has no multi-genre games.
    pub genre: String,
    /// Free-text description shown on the cart page.
    pub description: String,
    /// Image asset URL.
    pub image: String,
    /// Non-negative amount in the shop's single implicit currency.
    pub price: f64,
    /// Whether the card shows a "New" badge.
    pub is_new: bool,
}

/// One page of the catalog listing plus its pagination metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamesPage {
    /// Games on this page.
    pub games: Vec<Game>,
    /// Genre strings offered by the filter dropdown.
    pub available_filters: Vec<String>,
    /// Server-reported page count for the current view.
    pub total_pages: u32,
    /// 1-based page number this payload covers.
    pub current_page: u32,
}
