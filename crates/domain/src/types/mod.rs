//! # Pokerole Vocabulary Types
//!
//! Closed sets of values shared by the Trainer and Pokémon sheets.
//!
//! ## Design Principles
//!
//! 1. **Pure data types** - No I/O, no side effects
//! 2. **Stable wire names** - Variants serialize as their canonical English
//!    name (`"Hardy"`, `"Starter"`), which is what stored sheets contain
//! 3. **Forgiving parsing** - `FromStr` ignores case and surrounding space,
//!    since values arrive from free-form form inputs

mod nature;
pub use nature::Nature;

mod rank;
pub use rank::Rank;

mod status;
pub use status::Status;

mod pokemon_type;
pub use pokemon_type::PokemonType;
