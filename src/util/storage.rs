//! Browser localStorage slot helpers for cart persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The cart survives page loads through a single named `localStorage` slot.
//! State code depends on the `SlotStore` seam instead of touching web-sys
//! directly, so the persistence behavior stays testable off-browser.
//!
//! ERROR HANDLING
//! ==============
//! Reads fall back to the caller's default on absent or malformed data
//! without repairing or clearing the slot; writes are best-effort.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage slot holding the serialized cart collection.
pub const CART_STORAGE_KEY: &str = "shopping-cart";

/// Read/write access to a single named storage slot.
pub trait SlotStore {
    /// Raw serialized value for `key`, if the slot holds one.
    fn read(&self, key: &str) -> Option<String>;
    /// Replace the slot's value for `key`.
    fn write(&self, key: &str, raw: &str);
}

/// `localStorage`-backed slot store. Every operation no-ops outside the
/// browser build so native code paths stay deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl SlotStore for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, raw: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.set_item(key, raw);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, raw);
        }
    }
}

/// Load a JSON value from `store` for `key`, falling back to `default` when
/// the slot is empty or holds data that fails to deserialize.
pub fn load_json_or<T: DeserializeOwned>(store: &impl SlotStore, key: &str, default: T) -> T {
    store
        .read(key)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or(default)
}

/// Save a JSON value to `store` for `key`. A value that fails to serialize
/// drops the write and leaves the slot untouched.
pub fn save_json<T: Serialize>(store: &impl SlotStore, key: &str, value: &T) {
    if let Ok(raw) = serde_json::to_string(value) {
        store.write(key, &raw);
    }
}

/// In-memory slot store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryStore(std::cell::RefCell<std::collections::HashMap<String, String>>);

#[cfg(test)]
impl SlotStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, raw: &str) {
        self.0.borrow_mut().insert(key.to_owned(), raw.to_owned());
    }
}
