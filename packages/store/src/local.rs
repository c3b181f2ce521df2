//! # `localStorage` session storage: browser-side persistence
//!
//! [`LocalStorage`] is the [`SessionStorage`] implementation used on the **web
//! platform**. It reads and writes the window's `localStorage` through
//! [`web_sys::Storage`], so a signed-in session survives page reloads.
//!
//! ## Connection management
//!
//! `LocalStorage` is a zero-size struct that looks up `window.localStorage` on
//! every operation. `web_sys::Storage` is not `Send`, and the lookup is cheap,
//! so there is nothing worth caching.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads, doing
//! nothing for writes). Private browsing modes and disabled storage therefore
//! look like an empty store: the user is simply signed out.

use crate::storage::SessionStorage;

/// `window.localStorage`-backed SessionStorage for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
