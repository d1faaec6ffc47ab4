//! Platform abstraction ports for persistent storage
//!
//! The storage port abstracts the local key-value store so that:
//! 1. Sheet services remain platform-agnostic (browser localStorage, a JSON
//!    file on desktop, or memory)
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with an in-memory store

use thiserror::Error;

/// A write the backend could not carry out
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backing store cannot be reached (no `localStorage`, poisoned lock)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The store was reached but the value was not persisted
    #[error("Failed to write storage: {0}")]
    Write(String),
}

/// Persistent storage abstraction (localStorage/file-based)
///
/// Values are whole strings; there is no partial update. Every call
/// completes synchronously. Reads swallow backend failures (and log them),
/// so a failed read looks like a missing key. Writes report them: after a
/// failed `save` or `remove` the previous value is still what `load` returns.
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key, replacing any prior value
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage key constants
///
/// These are kept in the ports layer as they define the contract for
/// what keys are used across the application.
pub mod storage_keys {
    /// The single Trainer record
    pub const TRAINER: &str = "pokerole_treinador";
    /// The whole Pokémon roster, as one array
    pub const POKEMON_ROSTER: &str = "pokerole_pokemons";
}
