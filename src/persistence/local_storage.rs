//! Browser LocalStorage backend (wasm32 only)

use super::PersistentStore;
use crate::error::StoreError;

/// Keys are namespaced so several games can share an origin
pub struct LocalStorageStore {
    storage: web_sys::Storage,
    prefix: String,
}

impl LocalStorageStore {
    pub fn open(prefix: &str) -> Result<Self, StoreError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| StoreError::Unavailable("LocalStorage not available".to_string()))?;
        Ok(Self {
            storage,
            prefix: prefix.to_string(),
        })
    }

    fn key(&self, key: &str) -> String {
        format!("{}_{}", self.prefix, key)
    }
}

impl PersistentStore for LocalStorageStore {
    fn get_int(&self, key: &str) -> Result<Option<i64>, StoreError> {
        Ok(self.get_string(key)?.and_then(|s| s.parse().ok()))
    }

    fn set_int(&mut self, key: &str, value: i64) -> Result<(), StoreError> {
        self.set_string(key, &value.to_string())
    }

    fn get_string(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(&self.key(key))
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(&self.key(key), value)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }
}
