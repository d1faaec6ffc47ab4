//! Browser storage backend
//!
//! Uses the window's `localStorage`, which is scoped to one browser profile
//! and origin. Every call goes straight to the browser.

use crate::ports::outbound::{StorageError, StorageProvider};

/// WASM storage provider using localStorage
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl WasmStorageProvider {
    fn local_storage() -> Option<web_sys::Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(_) => {
                tracing::error!("localStorage is not accessible");
                None
            }
        }
    }
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::local_storage()
            .ok_or_else(|| StorageError::Unavailable("localStorage".to_string()))?;
        storage.set_item(key, value).map_err(|e| {
            tracing::error!(key, "Failed to write to localStorage");
            StorageError::Write(format!("{:?}", e))
        })
    }

    fn load(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = Self::local_storage()
            .ok_or_else(|| StorageError::Unavailable("localStorage".to_string()))?;
        storage.remove_item(key).map_err(|e| {
            tracing::error!(key, "Failed to remove from localStorage");
            StorageError::Write(format!("{:?}", e))
        })
    }
}

/// Default storage for browser builds
pub fn create_storage() -> WasmStorageProvider {
    WasmStorageProvider
}
