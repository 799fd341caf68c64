//! Key/value persistence for progress that outlives a run
//!
//! Diamonds and the high score are plain integers under fixed keys; settings
//! are a JSON string. Backends:
//! - `MemoryStore`: tests and store-less sessions
//! - `JsonFileStore`: native, one JSON document written via tmp + rename
//! - `LocalStorageStore`: browser LocalStorage (wasm32 only)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

/// Persistent settings storage collaborator
pub trait PersistentStore {
    fn get_int(&self, key: &str) -> Result<Option<i64>, StoreError>;
    fn set_int(&mut self, key: &str, value: i64) -> Result<(), StoreError>;
    fn get_string(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_string(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Integer under `key`, or `default` if absent or unreadable
    fn get_int_or(&self, key: &str, default: i64) -> i64 {
        match self.get_int(key) {
            Ok(Some(v)) => v,
            Ok(None) => default,
            Err(e) => {
                log::warn!("Reading {} failed, using {}: {}", key, default, e);
                default
            }
        }
    }
}

/// Serialized form shared by the in-memory and file backends
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreData {
    #[serde(default)]
    pub ints: BTreeMap<String, i64>,
    #[serde(default)]
    pub strings: BTreeMap<String, String>,
}

/// Volatile store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: StoreData,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded integers (handy for tests)
    pub fn with_ints<'a>(entries: impl IntoIterator<Item = (&'a str, i64)>) -> Self {
        let mut store = Self::new();
        for (key, value) in entries {
            store.data.ints.insert(key.to_string(), value);
        }
        store
    }
}

impl PersistentStore for MemoryStore {
    fn get_int(&self, key: &str) -> Result<Option<i64>, StoreError> {
        Ok(self.data.ints.get(key).copied())
    }

    fn set_int(&mut self, key: &str, value: i64) -> Result<(), StoreError> {
        self.data.ints.insert(key.to_string(), value);
        Ok(())
    }

    fn get_string(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.data.strings.get(key).cloned())
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.data.strings.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_defaults() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_int("HighScore").unwrap(), None);
        assert_eq!(store.get_int_or("HighScore", 0), 0);
        store.set_int("HighScore", 12).unwrap();
        assert_eq!(store.get_int_or("HighScore", 0), 12);
    }

    #[test]
    fn test_memory_store_strings() {
        let mut store = MemoryStore::with_ints([("Diamonds", 3)]);
        assert_eq!(store.get_int_or("Diamonds", 0), 3);
        store.set_string("Settings", "{}").unwrap();
        assert_eq!(store.get_string("Settings").unwrap().as_deref(), Some("{}"));
    }
}
