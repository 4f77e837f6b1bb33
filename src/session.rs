//! Session-scoped key-value storage behind an injectable interface.
//!
//! The widgets remember small scalar selections (menu choices, picked
//! analytes) across page views. Everything that persists goes through
//! [`SessionStore`], so the host decides where values actually live and
//! tests observe exactly what was written. Nothing reads ambient global
//! state.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Session storage errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// The backing store rejected the write
    #[error("session store rejected write: {0}")]
    Storage(String),
}

/// Key-value store with session lifetime.
///
/// Semantics are last-write-wins under a single user. Implementations must
/// be safe to share across tasks.
pub trait SessionStore: Send + Sync {
    /// Get the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Remove the value stored under `key`, if any.
    fn remove(&self, key: &str);

    /// Remove every stored value.
    fn clear(&self);
}

/// Shared session store handle.
pub type SharedSessionStore = Arc<dyn SessionStore>;

/// In-memory session store.
///
/// The standard implementation for native hosts and tests: a lock-guarded
/// map living as long as the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().unwrap().get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.values
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.values.write().unwrap().remove(key);
    }

    fn clear(&self) {
        self.values.write().unwrap().clear();
    }
}

/// No-op session store that never persists.
///
/// Always reports misses. Useful when a host wants the widgets without any
/// cross-view memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSessionStore;

impl NoOpSessionStore {
    /// Create a new no-op store.
    pub fn new() -> Self {
        Self
    }
}

impl SessionStore for NoOpSessionStore {
    fn get(&self, _key: &str) -> Option<String> {
        None // Always miss
    }

    fn put(&self, _key: &str, _value: &str) -> Result<(), SessionError> {
        Ok(()) // Accept but don't store
    }

    fn remove(&self, _key: &str) {}

    fn clear(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemorySessionStore::new();

        store.put("media-name", "Water").unwrap();
        assert_eq!(store.get("media-name"), Some("Water".to_string()));
    }

    #[test]
    fn test_memory_store_missing_key() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get("absent"), None);
    }

    #[test]
    fn test_memory_store_last_write_wins() {
        let store = MemorySessionStore::new();

        store.put("media-name", "Water").unwrap();
        store.put("media-name", "Sediment").unwrap();

        assert_eq!(store.get("media-name"), Some("Sediment".to_string()));
    }

    #[test]
    fn test_memory_store_remove() {
        let store = MemorySessionStore::new();

        store.put("media-name", "Water").unwrap();
        store.remove("media-name");

        assert_eq!(store.get("media-name"), None);
    }

    #[test]
    fn test_memory_store_clear() {
        let store = MemorySessionStore::new();

        store.put("a", "1").unwrap();
        store.put("b", "2").unwrap();
        store.clear();

        assert_eq!(store.get("a"), None);
        assert_eq!(store.get("b"), None);
    }

    #[test]
    fn test_noop_store_always_misses() {
        let store = NoOpSessionStore::new();

        store.put("media-name", "Water").unwrap();
        assert_eq!(store.get("media-name"), None);
    }

    #[test]
    fn test_noop_store_remove_and_clear() {
        let store = NoOpSessionStore::new();
        store.remove("anything");
        store.clear();
    }

    #[test]
    fn test_stores_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MemorySessionStore>();
        assert_send_sync::<NoOpSessionStore>();
    }

    #[test]
    fn test_store_as_trait_object() {
        let store: SharedSessionStore = Arc::new(MemorySessionStore::new());

        store.put("key", "value").unwrap();
        assert_eq!(store.get("key"), Some("value".to_string()));
    }
}
