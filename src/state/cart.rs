//! Shopping cart state shared across catalog and cart pages.
//!
//! DESIGN
//! ======
//! The cart is an ordered, id-unique collection of games provided app-wide as
//! an `RwSignal<CartState>`. Every mutation runs inside `update`, so a batch
//! of mutations within one event turn always chains off the latest in-memory
//! items, and each mutation re-persists the whole collection to its
//! localStorage slot.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use leptos::prelude::*;

use crate::net::types::Game;
use crate::util::storage::{self, BrowserStorage, CART_STORAGE_KEY, SlotStore};

/// Cart collection: insertion-ordered games with unique ids.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartState {
    pub items: Vec<Game>,
}

impl CartState {
    /// Load the cart from `store`, starting empty when the slot is absent or
    /// holds data that fails to deserialize.
    pub fn load_from(store: &impl SlotStore) -> Self {
        Self {
            items: storage::load_json_or(store, CART_STORAGE_KEY, Vec::new()),
        }
    }

    /// Persist the current items to `store` as one JSON array.
    pub fn persist_to(&self, store: &impl SlotStore) {
        storage::save_json(store, CART_STORAGE_KEY, &self.items);
    }

    /// Append `game` unless an item with the same id is already present.
    pub fn add_item(&mut self, game: Game) {
        if self.contains(&game.id) {
            return;
        }
        self.items.push(game);
    }

    /// Remove the item with `id`; no-op when absent.
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }

    /// Replace the collection with an empty one.
    pub fn remove_all(&mut self) {
        self.items.clear();
    }

    /// Whether an item with `id` is currently in the cart.
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Sum of item prices; exactly 0 for an empty cart.
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Number of items in the cart.
    pub fn total_items(&self) -> usize {
        self.items.len()
    }
}

/// Add `game` to the cart, or remove it when already present, then persist.
pub fn toggle_in_cart(cart: RwSignal<CartState>, game: &Game) {
    let game = game.clone();
    cart.update(|state| {
        if state.contains(&game.id) {
            state.remove_item(&game.id);
        } else {
            state.add_item(game);
        }
        state.persist_to(&BrowserStorage);
    });
}

/// Remove the item with `id` from the cart, then persist.
pub fn remove_from_cart(cart: RwSignal<CartState>, id: &str) {
    let id = id.to_owned();
    cart.update(|state| {
        state.remove_item(&id);
        state.persist_to(&BrowserStorage);
    });
}
