//! Persistent key-value storage backends.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser's `localStorage` mirrors a subset of the session (the raw
//! access token and a JSON-encoded user record) so a page reload can route
//! correctly before the central store is repopulated. Guards read it through
//! the `KeyValueStore` trait so tests can inject an in-memory backend.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Storage key holding the raw bearer token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Storage key holding the JSON-encoded user record.
pub const USER_KEY: &str = "user";

/// Read access to a string key-value store.
pub trait KeyValueStore: Send + Sync {
    /// Return the stored value for `key`, or `None` when absent or unavailable.
    fn get_item(&self, key: &str) -> Option<String>;
}

/// Shared handle passed through Leptos context.
pub type StorageHandle = Arc<dyn KeyValueStore>;

/// `window.localStorage` in the browser; always empty outside `hydrate` builds.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }
}

/// In-memory store used by tests and server rendering.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `pairs`.
    pub fn with_items<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let items = pairs
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Self { items: RwLock::new(items) }
    }

    pub fn set_item(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.write() {
            items.insert(key.to_owned(), value.to_owned());
        }
    }

    pub fn remove_item(&self, key: &str) {
        if let Ok(mut items) = self.items.write() {
            items.remove(key);
        }
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.read().ok()?.get(key).cloned()
    }
}

/// Storage backend appropriate for the current build.
#[must_use]
pub fn default_storage() -> StorageHandle {
    Arc::new(BrowserStorage)
}

/// Read `key` and treat an empty string the same as a missing value.
pub fn get_non_empty(storage: &dyn KeyValueStore, key: &str) -> Option<String> {
    storage.get_item(key).filter(|v| !v.is_empty())
}
