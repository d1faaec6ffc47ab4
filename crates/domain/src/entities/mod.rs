//! Domain entities - Sheet records with identity

mod pokemon;
mod trainer;

pub use pokemon::{BattleRecord, Pokemon, PokemonAttributes};
pub use trainer::{Inventory, Pokedex, Trainer, TrainerAttributes, TrainerSkills};
