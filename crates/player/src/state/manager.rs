//! Sheet manager
//!
//! Owns one storage handle and hands out the Trainer and Pokémon services
//! built over it. This is what a form layer holds on to.

use crate::application::services::{PokemonSheetService, SheetStorage, TrainerSheetService};
use crate::application::SheetError;
use crate::infrastructure::platform::{create_storage, MemoryStorageProvider};
use crate::ports::outbound::StorageProvider;

#[cfg(not(target_arch = "wasm32"))]
use crate::config::StorageConfig;

/// Storage backend selected for the current target
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = crate::infrastructure::platform::DesktopStorageProvider;

/// Storage backend selected for the current target
#[cfg(target_arch = "wasm32")]
pub type PlatformStorage = crate::infrastructure::platform::WasmStorageProvider;

/// Both sheet services over a single store
#[derive(Clone)]
pub struct SheetManager<S: StorageProvider> {
    storage: SheetStorage<S>,
    trainer: TrainerSheetService<S>,
    pokemon: PokemonSheetService<S>,
}

impl<S: StorageProvider> SheetManager<S> {
    pub fn new(storage: S) -> Self {
        let storage = SheetStorage::new(storage);
        Self {
            trainer: TrainerSheetService::new(storage.clone()),
            pokemon: PokemonSheetService::new(storage.clone()),
            storage,
        }
    }

    pub fn trainer(&self) -> &TrainerSheetService<S> {
        &self.trainer
    }

    pub fn pokemon(&self) -> &PokemonSheetService<S> {
        &self.pokemon
    }

    /// Delete the Trainer and the whole roster.
    pub fn clear_all(&self) -> Result<(), SheetError> {
        self.storage.clear_all()
    }
}

impl SheetManager<PlatformStorage> {
    /// Manager over the default store for this target
    pub fn for_platform() -> Self {
        Self::new(create_storage())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SheetManager<PlatformStorage> {
    /// Manager over a JSON file at the configured location
    pub fn desktop(config: &StorageConfig) -> Self {
        Self::new(PlatformStorage::new(config))
    }
}

impl SheetManager<MemoryStorageProvider> {
    pub fn in_memory() -> Self {
        Self::new(MemoryStorageProvider::new())
    }
}
