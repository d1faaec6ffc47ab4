//! Storage configuration for native builds
//!
//! Only the location of the file-backed store is configurable. Values come
//! from code, not from the environment.

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// File name used inside the per-user config directory
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// Used when no per-user config directory can be resolved
pub const FALLBACK_STORAGE_PATH: &str = "pokerole_storage.json";

/// Where the desktop store keeps its JSON file.
///
/// The default resolves to:
/// - Linux: ~/.config/pokerole-manager/storage.json
/// - macOS: ~/Library/Application Support/io.pokerole.pokerole-manager/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\pokerole\pokerole-manager\config\storage.json
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    storage_path: PathBuf,
}

impl StorageConfig {
    /// Pin the store to an explicit file path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            storage_path: path.into(),
        }
    }

    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let storage_path = match ProjectDirs::from("io", "pokerole", "pokerole-manager") {
            Some(dirs) => dirs.config_dir().join(STORAGE_FILE_NAME),
            // Fallback to current directory if project dirs unavailable
            None => PathBuf::from(FALLBACK_STORAGE_PATH),
        };
        Self { storage_path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path() {
        let config = StorageConfig::at("/tmp/sheets.json");
        assert_eq!(config.storage_path(), Path::new("/tmp/sheets.json"));
    }

    #[test]
    fn test_default_path_ends_with_storage_file() {
        let config = StorageConfig::default();
        let path = config.storage_path();
        assert!(path.ends_with(STORAGE_FILE_NAME) || path == Path::new(FALLBACK_STORAGE_PATH));
    }
}
