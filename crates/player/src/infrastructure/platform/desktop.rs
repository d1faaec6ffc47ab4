//! Desktop storage backend
//!
//! Keeps every key in one JSON object on disk, mirrored by an in-memory
//! cache. Each mutation rewrites the whole file.

use crate::config::StorageConfig;
use crate::ports::outbound::{StorageError, StorageProvider};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Desktop storage provider with file-based persistence
///
/// The file location comes from [`StorageConfig`]; by default it sits in the
/// per-user config directory.
#[derive(Clone)]
pub struct DesktopStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new(&StorageConfig::default())
    }
}

impl DesktopStorageProvider {
    /// Create a new desktop storage provider
    ///
    /// Loads existing data from the storage file if it exists. An unreadable
    /// or malformed file starts an empty store; it is overwritten on the
    /// next save.
    pub fn new(config: &StorageConfig) -> Self {
        let storage_path = config.storage_path().to_path_buf();

        let cache = if storage_path.exists() {
            match fs::read_to_string(&storage_path) {
                Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                    Ok(map) => map,
                    Err(e) => {
                        tracing::warn!("Failed to parse storage file: {}", e);
                        HashMap::new()
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read storage file: {}", e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        tracing::debug!("Desktop storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    /// Write `data` to disk as the whole storage file
    fn persist(&self, data: &HashMap<String, String>) -> Result<(), StorageError> {
        // Ensure parent directory exists
        if let Some(parent) = self.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    tracing::error!("Failed to create storage directory: {}", e);
                    StorageError::Write(e.to_string())
                })?;
            }
        }

        let json = serde_json::to_string_pretty(data).map_err(|e| {
            tracing::error!("Failed to serialize storage data: {}", e);
            StorageError::Write(e.to_string())
        })?;

        fs::write(&self.storage_path, json).map_err(|e| {
            tracing::error!("Failed to write storage file: {}", e);
            StorageError::Write(e.to_string())
        })
    }

    /// Apply `change` to the cache and persist it, undoing the change if the
    /// file write fails.
    fn mutate(
        &self,
        key: &str,
        change: impl FnOnce(&mut HashMap<String, String>) -> Option<String>,
    ) -> Result<(), StorageError> {
        let mut guard = self.cache.write().map_err(|e| {
            tracing::error!("Failed to acquire write lock for storage: {}", e);
            StorageError::Unavailable(e.to_string())
        })?;

        let previous = change(&mut *guard);
        if let Err(e) = self.persist(&*guard) {
            match previous {
                Some(old) => guard.insert(key.to_string(), old),
                None => guard.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.mutate(key, |cache| cache.insert(key.to_string(), value.to_string()))
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!("Failed to acquire read lock for storage: {}", e);
                None
            }
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.mutate(key, |cache| cache.remove(key))
    }
}

/// Default storage for desktop builds
pub fn create_storage() -> DesktopStorageProvider {
    DesktopStorageProvider::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_in(dir: &tempfile::TempDir) -> DesktopStorageProvider {
        DesktopStorageProvider::new(&StorageConfig::at(dir.path().join("storage.json")))
    }

    #[test]
    fn test_values_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();

        let storage = provider_in(&dir);
        storage
            .save("pokerole_treinador", "{\"nome\":\"Ash\"}")
            .unwrap();

        let reopened = provider_in(&dir);
        assert_eq!(
            reopened.load("pokerole_treinador").as_deref(),
            Some("{\"nome\":\"Ash\"}")
        );
    }

    #[test]
    fn test_remove_is_persisted() {
        let dir = tempfile::tempdir().unwrap();

        let storage = provider_in(&dir);
        storage.save("a", "1").unwrap();
        storage.save("b", "2").unwrap();
        storage.remove("a").unwrap();

        let reopened = provider_in(&dir);
        assert_eq!(reopened.load("a"), None);
        assert_eq!(reopened.load("b").as_deref(), Some("2"));
    }

    #[test]
    fn test_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("storage.json");

        let storage = DesktopStorageProvider::new(&StorageConfig::at(&path));
        storage.save("k", "v").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json at all").unwrap();

        let storage = DesktopStorageProvider::new(&StorageConfig::at(&path));
        assert_eq!(storage.load("pokerole_treinador"), None);

        storage.save("k", "v").unwrap();
        let reopened = DesktopStorageProvider::new(&StorageConfig::at(&path));
        assert_eq!(reopened.load("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_failed_write_is_reported_and_rolled_back() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes every write fail
        let storage = DesktopStorageProvider::new(&StorageConfig::at(dir.path()));

        let err = storage.save("pokerole_treinador", "{}").unwrap_err();

        assert!(matches!(err, StorageError::Write(_)));
        assert_eq!(storage.load("pokerole_treinador"), None);
    }

    #[test]
    fn test_failed_write_keeps_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let storage = DesktopStorageProvider::new(&StorageConfig::at(&path));
        storage.save("k", "old").unwrap();

        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        assert!(storage.save("k", "new").is_err());
        assert!(storage.remove("k").is_err());
        assert_eq!(storage.load("k").as_deref(), Some("old"));
    }

    #[test]
    fn test_clones_share_the_cache() {
        let dir = tempfile::tempdir().unwrap();
        let storage = provider_in(&dir);
        let clone = storage.clone();

        clone.save("k", "v").unwrap();
        assert_eq!(storage.load("k").as_deref(), Some("v"));
    }
}
