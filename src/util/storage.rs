//! Key-value persistence over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session token and the signed-in user survive reloads through this
//! adapter. Reads attempt a JSON decode and fall back to the raw stored text;
//! writes always JSON-encode. Nothing here ever returns an error: backend
//! failures degrade to "absent" or to a skipped write.
//!
//! DESIGN
//! ======
//! `KeyValueStore` is the raw string seam. `BrowserStorage` talks to the
//! window's storage in the `csr` build; `MemoryStore` backs tests and
//! non-browser builds.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

/// Raw string storage backend.
pub trait KeyValueStore {
    /// Read the stored text for `key`, or `None` when absent or unreadable.
    fn get_raw(&self, key: &str) -> Option<String>;
    /// Write `value` for `key`. Failures are swallowed by the backend.
    fn set_raw(&self, key: &str, value: &str);
    /// Delete the entry for `key`.
    fn remove(&self, key: &str);
}

/// Result of reading a key, keeping "absent" distinct from "explicit null".
#[derive(Clone, Debug, PartialEq)]
pub enum Stored {
    /// No entry exists for the key.
    Absent,
    /// An entry exists but is not valid JSON.
    Raw(String),
    /// An entry exists and decoded as JSON (possibly `null`).
    Json(Value),
}

impl Stored {
    /// Collapse to the lossy single-level view: absent and JSON `null` both
    /// become `None`, unparseable text becomes a JSON string.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Absent | Self::Json(Value::Null) => None,
            Self::Raw(raw) => Some(Value::String(raw)),
            Self::Json(value) => Some(value),
        }
    }
}

/// Read `key` and classify the entry.
pub fn lookup(store: &dyn KeyValueStore, key: &str) -> Stored {
    match store.get_raw(key) {
        None => Stored::Absent,
        Some(raw) => match serde_json::from_str::<Value>(&raw) {
            Ok(value) => Stored::Json(value),
            Err(_) => Stored::Raw(raw),
        },
    }
}

/// Read `key`, decoding JSON and falling back to the raw string.
pub fn get(store: &dyn KeyValueStore, key: &str) -> Option<Value> {
    lookup(store, key).into_value()
}

/// JSON-encode `value` and write it under `key`.
pub fn set<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.set_raw(key, &raw),
        Err(e) => log::warn!("storage: failed to encode entry {key:?}: {e}"),
    }
}

/// Delete the entry for `key`.
pub fn remove(store: &dyn KeyValueStore, key: &str) {
    store.remove(key);
}

/// In-process map backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Window `localStorage` backend. Without the `csr` feature every read is
/// absent and every write is a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStorage {
    fn get_raw(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set_raw(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("storage: localStorage unavailable, dropping write for {key:?}");
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("storage: write rejected for {key:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}
