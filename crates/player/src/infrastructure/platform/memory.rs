//! In-memory storage backend
//!
//! Nothing outlives the process. Used by tests and by hosts that manage
//! persistence themselves.

use crate::ports::outbound::{StorageError, StorageProvider};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockWriteGuard};

/// Storage provider backed by a shared map.
///
/// Clones share the same map, so a clone handed to a service observes the
/// same data.
#[derive(Clone, Default)]
pub struct MemoryStorageProvider {
    data: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.data.read().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn write_guard(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, String>>, StorageError> {
        self.data.write().map_err(|e| {
            tracing::error!("Failed to acquire write lock for storage: {}", e);
            StorageError::Unavailable(e.to_string())
        })
    }
}

impl StorageProvider for MemoryStorageProvider {
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.write_guard()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.data.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.write_guard()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_replaces_whole_value() {
        let storage = MemoryStorageProvider::new();
        storage.save("k", "first").unwrap();
        storage.save("k", "second").unwrap();

        assert_eq!(storage.load("k").as_deref(), Some("second"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let storage = MemoryStorageProvider::new();
        storage.remove("missing").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_clones_share_data() {
        let storage = MemoryStorageProvider::new();
        storage.clone().save("k", "v").unwrap();
        assert_eq!(storage.load("k").as_deref(), Some("v"));
    }
}
