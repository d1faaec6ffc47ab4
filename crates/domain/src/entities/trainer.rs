//! Trainer entity - the player-character sheet
//!
//! One Trainer exists per storage profile. It references Pokémon by id only;
//! the Pokémon records themselves live in the roster collection.

use serde::{Deserialize, Serialize};

use crate::derivation::{derive_trainer_vitals, TrainerVitals};
use crate::ids::{PokemonId, TrainerId};
use crate::types::{Nature, Rank};

/// The nine Trainer attribute scores.
///
/// Simple data struct: every combination of values is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrainerAttributes {
    pub strength: u32,
    pub dexterity: u32,
    pub vitality: u32,
    pub insight: u32,
    pub tough: u32,
    pub cute: u32,
    pub cool: u32,
    pub beauty: u32,
    pub clever: u32,
}

/// The fifteen Trainer skill scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrainerSkills {
    pub brawl: u32,
    pub throw: u32,
    pub evasion: u32,
    pub alert: u32,
    pub athletic: u32,
    pub nature: u32,
    pub stealth: u32,
    pub empathy: u32,
    pub etiquette: u32,
    pub intimidate: u32,
    pub perform: u32,
    pub crafts: u32,
    pub lore: u32,
    pub medicine: u32,
    pub science: u32,
}

/// Pokédex counters.
///
/// `capturados <= vistos` is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pokedex {
    pub vistos: u32,
    pub capturados: u32,
}

/// Free-form item names in three bags. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Inventory {
    pub potions: Vec<String>,
    pub batalha: Vec<String>,
    pub outros: Vec<String>,
}

/// A Trainer sheet.
///
/// `hp` and `willPoints` are derived from the attributes and have no setters:
/// the only way to change them is [`Trainer::set_attributes`]. Stored values
/// for them are ignored on load and recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredTrainer")]
pub struct Trainer {
    pub id: TrainerId,
    pub nome: String,
    pub idade: u32,
    pub natureza: Nature,
    pub ocupacao: String,
    pub rank: Rank,
    atributos: TrainerAttributes,
    pub skills: TrainerSkills,
    will_points: u32,
    hp: u32,
    pub pokedex: Pokedex,
    pub itens: Inventory,
    /// Pokémon currently carried (weak references)
    pub party: Vec<PokemonId>,
    /// Pokémon stored away (weak references)
    #[serde(rename = "box")]
    pub pc_box: Vec<PokemonId>,
}

impl Trainer {
    /// Create a Starter trainer with zeroed scores and empty lists
    pub fn new(nome: impl Into<String>, ocupacao: impl Into<String>) -> Self {
        Self::with_attributes(TrainerId::new(), TrainerAttributes::default())
            .named(nome.into(), ocupacao.into())
    }

    pub(crate) fn with_attributes(id: TrainerId, atributos: TrainerAttributes) -> Self {
        let vitals = derive_trainer_vitals(atributos.vitality, atributos.insight);
        Self {
            id,
            nome: String::new(),
            idade: 0,
            natureza: Nature::default(),
            ocupacao: String::new(),
            rank: Rank::default(),
            atributos,
            skills: TrainerSkills::default(),
            will_points: vitals.will_points,
            hp: vitals.hp,
            pokedex: Pokedex::default(),
            itens: Inventory::default(),
            party: Vec::new(),
            pc_box: Vec::new(),
        }
    }

    fn named(mut self, nome: String, ocupacao: String) -> Self {
        self.nome = nome;
        self.ocupacao = ocupacao;
        self
    }

    pub fn attributes(&self) -> &TrainerAttributes {
        &self.atributos
    }

    /// Replace the attribute scores and re-derive HP and Will Points.
    pub fn set_attributes(&mut self, atributos: TrainerAttributes) {
        let vitals = derive_trainer_vitals(atributos.vitality, atributos.insight);
        self.atributos = atributos;
        self.hp = vitals.hp;
        self.will_points = vitals.will_points;
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn will_points(&self) -> u32 {
        self.will_points
    }

    pub fn vitals(&self) -> TrainerVitals {
        TrainerVitals {
            hp: self.hp,
            will_points: self.will_points,
        }
    }

    /// Put a Pokémon in the party, taking it out of the box if it was there.
    pub fn add_to_party(&mut self, id: PokemonId) {
        self.pc_box.retain(|p| *p != id);
        if !self.party.contains(&id) {
            self.party.push(id);
        }
    }

    /// Put a Pokémon in the box, taking it out of the party if it was there.
    pub fn add_to_box(&mut self, id: PokemonId) {
        self.party.retain(|p| *p != id);
        if !self.pc_box.contains(&id) {
            self.pc_box.push(id);
        }
    }

    /// Forget a Pokémon entirely. Returns whether it was referenced.
    pub fn remove_reference(&mut self, id: PokemonId) -> bool {
        let before = self.party.len() + self.pc_box.len();
        self.party.retain(|p| *p != id);
        self.pc_box.retain(|p| *p != id);
        before != self.party.len() + self.pc_box.len()
    }

    pub fn is_in_party(&self, id: PokemonId) -> bool {
        self.party.contains(&id)
    }
}

/// On-disk shape of a Trainer; converting it re-derives the vitals.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTrainer {
    id: TrainerId,
    nome: String,
    idade: u32,
    natureza: Nature,
    ocupacao: String,
    rank: Rank,
    atributos: TrainerAttributes,
    skills: TrainerSkills,
    pokedex: Pokedex,
    itens: Inventory,
    #[serde(default)]
    party: Vec<PokemonId>,
    #[serde(default, rename = "box")]
    pc_box: Vec<PokemonId>,
}

impl From<StoredTrainer> for Trainer {
    fn from(stored: StoredTrainer) -> Self {
        let mut trainer = Trainer::with_attributes(stored.id, stored.atributos);
        trainer.nome = stored.nome;
        trainer.idade = stored.idade;
        trainer.natureza = stored.natureza;
        trainer.ocupacao = stored.ocupacao;
        trainer.rank = stored.rank;
        trainer.skills = stored.skills;
        trainer.pokedex = stored.pokedex;
        trainer.itens = stored.itens;
        trainer.party = stored.party;
        trainer.pc_box = stored.pc_box;
        trainer
    }
}
