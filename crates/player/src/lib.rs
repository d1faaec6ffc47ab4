//! Pokerole Manager player crate.
//!
//! Storage backends, the storage gateway for the two character sheets, and
//! the services the forms call into. The storage backend is chosen at compile
//! time: a JSON file on native targets, `localStorage` in the browser.

pub mod application;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod infrastructure;
pub mod logging;
pub mod ports;
pub mod state;

pub use application::services::{PokemonSheetService, SheetStorage, TrainerSheetService};
pub use application::SheetError;
#[cfg(not(target_arch = "wasm32"))]
pub use config::StorageConfig;
pub use infrastructure::platform::MemoryStorageProvider;
pub use ports::outbound::{storage_keys, StorageError, StorageProvider};
pub use state::{PlatformStorage, SheetManager};
