//! Pokemon Sheet Service - Application service for the Pokémon roster
//!
//! The roster is stored as one array and rewritten in full on every change.
//! Party membership lives in two places (the Pokémon's `estaNaParty` flag and
//! the Trainer's `party` / `box` lists); they are written one after the other
//! with no transaction spanning both.

use pokerole_domain::{cap_move_list, validate_pokemon, Pokemon, PokemonId, PokemonInput};

use crate::application::services::SheetStorage;
use crate::application::SheetError;
use crate::ports::outbound::StorageProvider;

/// Pokémon service for the stored roster
#[derive(Clone)]
pub struct PokemonSheetService<S: StorageProvider> {
    storage: SheetStorage<S>,
}

impl<S: StorageProvider> PokemonSheetService<S> {
    pub fn new(storage: SheetStorage<S>) -> Self {
        Self { storage }
    }

    /// Every stored Pokémon, in save order
    pub fn roster(&self) -> Vec<Pokemon> {
        self.storage.load_pokemon_roster()
    }

    pub fn find(&self, id: PokemonId) -> Option<Pokemon> {
        self.roster().into_iter().find(|p| p.id == id)
    }

    /// Form defaults for editing `id`, or a blank sheet for a new Pokémon.
    pub fn initial_input(&self, id: Option<PokemonId>) -> PokemonInput {
        id.and_then(|id| self.find(id))
            .map(|pokemon| PokemonInput::from(&pokemon))
            .unwrap_or_default()
    }

    /// Move list to display after the moves or insight change. Nothing is saved.
    pub fn on_moves_changed(&self, moves: &[String], insight: u32) -> Vec<String> {
        cap_move_list(moves, insight)
    }

    /// Validate a submitted Pokémon form and write it into the roster.
    ///
    /// A Pokémon whose id is already stored is replaced in place; anything
    /// else is appended.
    pub fn submit(&self, input: &PokemonInput) -> Result<Pokemon, SheetError> {
        let pokemon = validate_pokemon(input).map_err(|errors| {
            tracing::debug!(fields = errors.len(), "Pokemon form rejected");
            SheetError::from(errors)
        })?;

        let mut roster = self.roster();
        match roster.iter_mut().find(|p| p.id == pokemon.id) {
            Some(existing) => *existing = pokemon.clone(),
            None => roster.push(pokemon.clone()),
        }

        self.storage.save_pokemon_roster(&roster)?;
        tracing::info!(
            pokemon_id = %pokemon.id,
            nome = %pokemon.display_name(),
            "Pokemon sheet submitted"
        );
        Ok(pokemon)
    }

    /// Drop a Pokémon from the roster.
    ///
    /// References to it in the Trainer's `party` / `box` are left alone.
    pub fn remove(&self, id: PokemonId) -> Result<(), SheetError> {
        let mut roster = self.roster();
        let before = roster.len();
        roster.retain(|p| p.id != id);
        if roster.len() == before {
            return Err(SheetError::not_found("Pokemon", id));
        }

        self.storage.save_pokemon_roster(&roster)?;
        tracing::info!(pokemon_id = %id, "Pokemon removed from roster");
        Ok(())
    }

    /// Move a Pokémon into the party or into the box.
    ///
    /// Writes the roster flag first, then the Trainer's lists. The Trainer
    /// write is skipped when no Trainer is stored yet.
    pub fn set_party_membership(
        &self,
        id: PokemonId,
        in_party: bool,
    ) -> Result<Pokemon, SheetError> {
        let mut roster = self.roster();
        let pokemon = roster
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| SheetError::not_found("Pokemon", id))?;
        pokemon.esta_na_party = in_party;
        let updated = pokemon.clone();
        self.storage.save_pokemon_roster(&roster)?;

        match self.storage.load_trainer() {
            Some(mut trainer) => {
                if in_party {
                    trainer.add_to_party(id);
                } else {
                    trainer.add_to_box(id);
                }
                self.storage.save_trainer(&trainer)?;
            }
            None => {
                tracing::warn!(pokemon_id = %id, "No trainer stored; party lists not updated")
            }
        }

        tracing::info!(pokemon_id = %id, in_party, "Pokemon party membership changed");
        Ok(updated)
    }
}
