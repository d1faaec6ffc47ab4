//! Application services
//!
//! The storage gateway and the services the Trainer and Pokémon forms
//! call into.

pub mod pokemon_sheet_service;
pub mod storage_gateway;
pub mod trainer_sheet_service;

pub use pokemon_sheet_service::PokemonSheetService;
pub use storage_gateway::SheetStorage;
pub use trainer_sheet_service::TrainerSheetService;
