//! Storage gateway - sheet persistence over a key-value store
//!
//! Exactly one Trainer record and one Pokémon roster are stored, each as JSON
//! text under a fixed key. Every save replaces the whole value. Loading never
//! fails: a missing key and a value that no longer parses both read as
//! "nothing saved yet". Within the roster, each entry is checked on its own,
//! so one broken Pokémon does not hide the rest.

use pokerole_domain::{Pokemon, Trainer};

use crate::application::SheetError;
use crate::ports::outbound::{storage_keys, StorageProvider};

/// Typed access to the two sheet keys.
#[derive(Clone)]
pub struct SheetStorage<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> SheetStorage<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Overwrite the stored Trainer.
    pub fn save_trainer(&self, trainer: &Trainer) -> Result<(), SheetError> {
        let json = serde_json::to_string(trainer)?;
        self.storage.save(storage_keys::TRAINER, &json)?;
        tracing::debug!(trainer_id = %trainer.id, "Saved trainer");
        Ok(())
    }

    /// The stored Trainer, or `None` if nothing usable is stored.
    pub fn load_trainer(&self) -> Option<Trainer> {
        let raw = self.storage.load(storage_keys::TRAINER)?;
        match serde_json::from_str::<Trainer>(&raw) {
            Ok(trainer) => {
                tracing::debug!(trainer_id = %trainer.id, "Loaded trainer");
                Some(trainer)
            }
            Err(e) => {
                tracing::warn!("Ignoring malformed stored trainer: {}", e);
                None
            }
        }
    }

    /// Overwrite the stored roster with `roster`.
    pub fn save_pokemon_roster(&self, roster: &[Pokemon]) -> Result<(), SheetError> {
        let json = serde_json::to_string(roster)?;
        self.storage.save(storage_keys::POKEMON_ROSTER, &json)?;
        tracing::debug!(count = roster.len(), "Saved pokemon roster");
        Ok(())
    }

    /// The stored roster; empty when missing or malformed.
    ///
    /// Entries that fail the Pokémon load checks are skipped.
    pub fn load_pokemon_roster(&self) -> Vec<Pokemon> {
        let Some(raw) = self.storage.load(storage_keys::POKEMON_ROSTER) else {
            return Vec::new();
        };
        let entries = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Ignoring malformed stored pokemon roster: {}", e);
                return Vec::new();
            }
        };

        let stored = entries.len();
        let roster: Vec<Pokemon> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value::<Pokemon>(entry) {
                Ok(pokemon) => Some(pokemon),
                Err(e) => {
                    tracing::warn!(index, "Dropping malformed stored pokemon: {}", e);
                    None
                }
            })
            .collect();
        tracing::debug!(count = roster.len(), stored, "Loaded pokemon roster");
        roster
    }

    /// Remove both keys.
    ///
    /// Both removals are attempted even if the first fails; the first failure
    /// is returned.
    pub fn clear_all(&self) -> Result<(), SheetError> {
        let trainer = self.storage.remove(storage_keys::TRAINER);
        let roster = self.storage.remove(storage_keys::POKEMON_ROSTER);
        trainer?;
        roster?;
        tracing::info!("Cleared all stored sheets");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::MemoryStorageProvider;
    use crate::ports::outbound::StorageError;
    use mockall::mock;
    use mockall::predicate::eq;
    use pokerole_domain::{
        Nature, PokemonAttributes, PokemonId, PokemonType, Rank, Status, TrainerAttributes,
    };

    mock! {
        Storage {}

        impl Clone for Storage {
            fn clone(&self) -> Self;
        }

        impl StorageProvider for Storage {
            fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
            fn load(&self, key: &str) -> Option<String>;
            fn remove(&self, key: &str) -> Result<(), StorageError>;
        }
    }

    fn sample_trainer() -> Trainer {
        let mut trainer = Trainer::new("Ash", "Student");
        trainer.idade = 14;
        trainer.natureza = Nature::Brave;
        trainer.rank = Rank::Amateur;
        trainer.set_attributes(TrainerAttributes {
            vitality: 3,
            insight: 2,
            ..TrainerAttributes::default()
        });
        trainer.skills.brawl = 2;
        trainer.pokedex.vistos = 12;
        trainer.pokedex.capturados = 4;
        trainer.itens.potions.push("Potion".to_string());
        trainer.itens.batalha.push("Poké Ball".to_string());
        trainer.add_to_party(PokemonId::new());
        trainer.add_to_box(PokemonId::new());
        trainer
    }

    fn sample_pokemon(nome: &str) -> Pokemon {
        let mut pokemon = Pokemon::new(
            nome,
            "Bird",
            16,
            vec![PokemonType::Normal, PokemonType::Flying],
            "Keen Eye",
        );
        pokemon.apelido = Some(format!("{} Jr.", nome));
        pokemon.rank = Rank::Beginner;
        pokemon.natureza = Nature::Adamant;
        pokemon.status = Status::Paralyzed;
        pokemon.tamanho = 30.5;
        pokemon.peso = 1.8;
        pokemon.felicidade = 4;
        pokemon.lealdade = 5;
        pokemon.esta_na_party = true;
        pokemon.historico.batalhas = 3;
        pokemon.historico.vitorias = 2;
        pokemon.set_attributes(PokemonAttributes {
            strength: 2,
            dexterity: 3,
            vitality: 1,
            insight: 2,
        });
        pokemon.set_moves(vec!["Gust".to_string(), "Tackle".to_string()]);
        pokemon
    }

    #[test]
    fn test_load_trainer_when_nothing_saved() {
        let gateway = SheetStorage::new(MemoryStorageProvider::new());
        assert!(gateway.load_trainer().is_none());
    }

    #[test]
    fn test_trainer_round_trip() {
        let gateway = SheetStorage::new(MemoryStorageProvider::new());
        let trainer = sample_trainer();

        gateway.save_trainer(&trainer).unwrap();

        let loaded = gateway.load_trainer().unwrap();
        assert_eq!(loaded.party.len(), 1);
        assert_eq!(loaded.pc_box.len(), 1);
        assert_eq!(loaded.rank, Rank::Amateur);
        assert_eq!(loaded, trainer);
    }

    #[test]
    fn test_save_trainer_overwrites_previous_record() {
        let gateway = SheetStorage::new(MemoryStorageProvider::new());
        let mut trainer = sample_trainer();
        gateway.save_trainer(&trainer).unwrap();

        trainer.itens.potions.clear();
        trainer.nome = "Red".to_string();
        gateway.save_trainer(&trainer).unwrap();

        let loaded = gateway.load_trainer().unwrap();
        assert_eq!(loaded.nome, "Red");
        assert!(loaded.itens.potions.is_empty());
    }

    #[test]
    fn test_malformed_trainer_reads_as_absent() {
        let storage = MemoryStorageProvider::new();
        storage.save(storage_keys::TRAINER, "{not json").unwrap();

        let gateway = SheetStorage::new(storage);
        assert!(gateway.load_trainer().is_none());
    }

    #[test]
    fn test_trainer_with_wrong_shape_reads_as_absent() {
        let storage = MemoryStorageProvider::new();
        storage
            .save(storage_keys::TRAINER, r#"{"nome": 42}"#)
            .unwrap();

        let gateway = SheetStorage::new(storage);
        assert!(gateway.load_trainer().is_none());
    }

    #[test]
    fn test_trainer_is_stored_under_fixed_key_with_wire_names() {
        let storage = MemoryStorageProvider::new();
        let gateway = SheetStorage::new(storage.clone());
        gateway.save_trainer(&sample_trainer()).unwrap();

        let raw = storage.load("pokerole_treinador").unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["hp"], 13);
        assert_eq!(value["willPoints"], 4);
        assert_eq!(value["box"].as_array().map(Vec::len), Some(1));
        assert!(value["atributos"].get("vitality").is_some());
    }

    #[test]
    fn test_roster_round_trip_preserves_order() {
        let gateway = SheetStorage::new(MemoryStorageProvider::new());
        let mut raichu = sample_pokemon("Raichu");
        raichu.tipos = vec![PokemonType::Electric];
        raichu.apelido = None;
        let roster = vec![sample_pokemon("Pidgey"), raichu];

        gateway.save_pokemon_roster(&roster).unwrap();

        let loaded = gateway.load_pokemon_roster();
        assert_eq!(loaded[0].display_name(), "Pidgey Jr.");
        assert_eq!(loaded[0].tamanho, 30.5);
        assert_eq!(loaded[0].peso, 1.8);
        assert_eq!(loaded, roster);
    }

    #[test]
    fn test_missing_or_malformed_roster_is_empty() {
        let storage = MemoryStorageProvider::new();
        let gateway = SheetStorage::new(storage.clone());
        assert!(gateway.load_pokemon_roster().is_empty());

        storage
            .save(storage_keys::POKEMON_ROSTER, "[{\"nome\":")
            .unwrap();
        assert!(gateway.load_pokemon_roster().is_empty());

        storage.save(storage_keys::POKEMON_ROSTER, "{}").unwrap();
        assert!(gateway.load_pokemon_roster().is_empty());
    }

    #[test]
    fn test_out_of_bounds_roster_entries_are_dropped_individually() {
        let storage = MemoryStorageProvider::new();
        let gateway = SheetStorage::new(storage.clone());

        let mut keeper = sample_pokemon("Pidgey");
        keeper.set_insight(5);
        keeper.set_moves((1..=7).map(|n| format!("Move {}", n)).collect());
        let roster = vec![keeper, sample_pokemon("Spearow"), sample_pokemon("Doduo")];

        let mut entries = serde_json::to_value(&roster).unwrap();
        entries[0]["atributos"]["insight"] = serde_json::json!(0);
        entries[1]["felicidade"] = serde_json::json!(200);
        entries[2]["tipos"] = serde_json::json!([]);
        storage
            .save(storage_keys::POKEMON_ROSTER, &entries.to_string())
            .unwrap();

        let loaded = gateway.load_pokemon_roster();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].nome, "Pidgey");
        assert_eq!(loaded[0].moves(), ["Move 1", "Move 2"]);
    }

    #[test]
    fn test_clear_all_then_load() {
        let gateway = SheetStorage::new(MemoryStorageProvider::new());
        gateway.save_trainer(&sample_trainer()).unwrap();
        gateway
            .save_pokemon_roster(&[sample_pokemon("Pikachu")])
            .unwrap();

        gateway.clear_all().unwrap();

        assert!(gateway.load_trainer().is_none());
        assert!(gateway.load_pokemon_roster().is_empty());
    }

    #[test]
    fn test_clear_all_removes_both_keys() {
        let mut storage = MockStorage::new();
        storage
            .expect_remove()
            .with(eq(storage_keys::TRAINER))
            .times(1)
            .returning(|_| Ok(()));
        storage
            .expect_remove()
            .with(eq(storage_keys::POKEMON_ROSTER))
            .times(1)
            .returning(|_| Ok(()));

        SheetStorage::new(storage).clear_all().unwrap();
    }

    #[test]
    fn test_clear_all_attempts_both_keys_and_reports_failure() {
        let mut storage = MockStorage::new();
        storage
            .expect_remove()
            .with(eq(storage_keys::TRAINER))
            .times(1)
            .returning(|_| Err(StorageError::Write("read-only".to_string())));
        storage
            .expect_remove()
            .with(eq(storage_keys::POKEMON_ROSTER))
            .times(1)
            .returning(|_| Ok(()));

        let result = SheetStorage::new(storage).clear_all();
        assert!(matches!(result, Err(SheetError::Storage(_))));
    }

    #[test]
    fn test_save_writes_only_its_own_key() {
        let mut storage = MockStorage::new();
        storage
            .expect_save()
            .withf(|key, _| key == storage_keys::POKEMON_ROSTER)
            .times(1)
            .returning(|_, _| Ok(()));

        SheetStorage::new(storage)
            .save_pokemon_roster(&[sample_pokemon("Pikachu")])
            .unwrap();
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_unwritable_store_fails_save_and_keeps_nothing() {
        use crate::config::StorageConfig;
        use crate::infrastructure::platform::DesktopStorageProvider;

        let dir = tempfile::tempdir().unwrap();
        let storage = DesktopStorageProvider::new(&StorageConfig::at(dir.path()));
        let gateway = SheetStorage::new(storage);

        let result = gateway.save_trainer(&sample_trainer());

        assert!(matches!(result, Err(SheetError::Storage(_))));
        assert!(gateway.load_trainer().is_none());
    }
}
