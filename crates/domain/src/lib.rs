//! Pokerole Manager domain layer.
//!
//! Trainer and Pokémon sheet records, their vocabulary, the validation schemas
//! that turn raw form input into records, and the rules that derive dependent
//! fields. Everything here is pure: persistence lives in `pokerole-player`.

// Vocabulary shared by both sheets
pub mod types;

pub mod derivation;
pub mod entities;
pub mod error;
pub mod ids;
pub mod sheet;
pub mod validation;

pub use entities::{
    BattleRecord, Inventory, Pokedex, Pokemon, PokemonAttributes, Trainer, TrainerAttributes,
    TrainerSkills,
};

pub use error::{DomainError, ValidationError, ValidationErrors};

// Re-export derivation rules
pub use derivation::{
    cap_move_list, derive_trainer_vitals, move_cap, TrainerVitals, BASE_TRAINER_HP, MAX_MOVES,
    WILL_POINTS_BONUS,
};

pub use ids::{PokemonId, TrainerId};

// Re-export form input types
pub use sheet::{
    parse_comma_list, BattleRecordInput, PokedexInput, PokemonAttributesInput, PokemonInput,
    TrainerAttributesInput, TrainerInput, TrainerSkillsInput,
};

pub use types::{Nature, PokemonType, Rank, Status};

pub use validation::{validate_pokemon, validate_trainer};
