use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::storage::SessionStorage;

/// In-memory SessionStorage for tests and native fallback.
///
/// Clones share the same map, so a clone handed to a session observes every
/// write made through the original.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let storage = MemoryStorage::new();

        assert!(storage.get("token").is_none());
        assert!(storage.is_empty());

        storage.set("token", "abc");
        assert_eq!(storage.get("token").as_deref(), Some("abc"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_set_overwrites() {
        let storage = MemoryStorage::new();

        storage.set("user", "{\"id\":1}");
        storage.set("user", "{\"id\":2}");

        assert_eq!(storage.get("user").as_deref(), Some("{\"id\":2}"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_remove() {
        let storage = MemoryStorage::new();

        storage.set("token", "abc");
        storage.remove("token");
        assert!(storage.get("token").is_none());

        // Removing again is harmless
        storage.remove("token");
        assert!(storage.is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();

        handle.set("token", "shared");
        assert_eq!(storage.get("token").as_deref(), Some("shared"));
    }
}
