//! Raw sheet input as submitted by the forms
//!
//! These types carry exactly what the user typed: signed numbers (so a
//! negative entry can be reported instead of failing to parse), enum values as
//! free strings, and an optional id (absent until the first save). They are
//! turned into entities by [`crate::validation`].
//!
//! The `From<&Trainer>` / `From<&Pokemon>` conversions produce the form
//! defaults used to prefill a form from a stored record.

use serde::{Deserialize, Serialize};

use crate::entities::{Inventory, Pokemon, Trainer};
use crate::ids::{PokemonId, TrainerId};
use crate::types::{Nature, Rank, Status};

// =============================================================================
// Trainer
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrainerAttributesInput {
    pub strength: i64,
    pub dexterity: i64,
    pub vitality: i64,
    pub insight: i64,
    pub tough: i64,
    pub cute: i64,
    pub cool: i64,
    pub beauty: i64,
    pub clever: i64,
}

impl TrainerAttributesInput {
    /// `(name, value)` pairs in form order
    pub fn fields(&self) -> [(&'static str, i64); 9] {
        [
            ("strength", self.strength),
            ("dexterity", self.dexterity),
            ("vitality", self.vitality),
            ("insight", self.insight),
            ("tough", self.tough),
            ("cute", self.cute),
            ("cool", self.cool),
            ("beauty", self.beauty),
            ("clever", self.clever),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrainerSkillsInput {
    pub brawl: i64,
    pub throw: i64,
    pub evasion: i64,
    pub alert: i64,
    pub athletic: i64,
    pub nature: i64,
    pub stealth: i64,
    pub empathy: i64,
    pub etiquette: i64,
    pub intimidate: i64,
    pub perform: i64,
    pub crafts: i64,
    pub lore: i64,
    pub medicine: i64,
    pub science: i64,
}

impl TrainerSkillsInput {
    pub fn fields(&self) -> [(&'static str, i64); 15] {
        [
            ("brawl", self.brawl),
            ("throw", self.throw),
            ("evasion", self.evasion),
            ("alert", self.alert),
            ("athletic", self.athletic),
            ("nature", self.nature),
            ("stealth", self.stealth),
            ("empathy", self.empathy),
            ("etiquette", self.etiquette),
            ("intimidate", self.intimidate),
            ("perform", self.perform),
            ("crafts", self.crafts),
            ("lore", self.lore),
            ("medicine", self.medicine),
            ("science", self.science),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PokedexInput {
    pub vistos: i64,
    pub capturados: i64,
}

/// Trainer form payload.
///
/// There are no `hp` / `willPoints` fields: those are derived, never entered.
/// `party` and `box` are not edited through this form either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerInput {
    #[serde(default)]
    pub id: Option<TrainerId>,
    pub nome: String,
    pub idade: i64,
    pub natureza: String,
    pub ocupacao: String,
    pub rank: String,
    pub atributos: TrainerAttributesInput,
    pub skills: TrainerSkillsInput,
    pub itens: Inventory,
    pub pokedex: PokedexInput,
}

impl Default for TrainerInput {
    fn default() -> Self {
        Self {
            id: None,
            nome: String::new(),
            idade: 0,
            natureza: Nature::default().to_string(),
            ocupacao: String::new(),
            rank: Rank::default().to_string(),
            atributos: TrainerAttributesInput::default(),
            skills: TrainerSkillsInput::default(),
            itens: Inventory::default(),
            pokedex: PokedexInput::default(),
        }
    }
}

impl From<&Trainer> for TrainerInput {
    fn from(trainer: &Trainer) -> Self {
        let a = trainer.attributes();
        let s = &trainer.skills;
        Self {
            id: Some(trainer.id),
            nome: trainer.nome.clone(),
            idade: i64::from(trainer.idade),
            natureza: trainer.natureza.to_string(),
            ocupacao: trainer.ocupacao.clone(),
            rank: trainer.rank.to_string(),
            atributos: TrainerAttributesInput {
                strength: i64::from(a.strength),
                dexterity: i64::from(a.dexterity),
                vitality: i64::from(a.vitality),
                insight: i64::from(a.insight),
                tough: i64::from(a.tough),
                cute: i64::from(a.cute),
                cool: i64::from(a.cool),
                beauty: i64::from(a.beauty),
                clever: i64::from(a.clever),
            },
            skills: TrainerSkillsInput {
                brawl: i64::from(s.brawl),
                throw: i64::from(s.throw),
                evasion: i64::from(s.evasion),
                alert: i64::from(s.alert),
                athletic: i64::from(s.athletic),
                nature: i64::from(s.nature),
                stealth: i64::from(s.stealth),
                empathy: i64::from(s.empathy),
                etiquette: i64::from(s.etiquette),
                intimidate: i64::from(s.intimidate),
                perform: i64::from(s.perform),
                crafts: i64::from(s.crafts),
                lore: i64::from(s.lore),
                medicine: i64::from(s.medicine),
                science: i64::from(s.science),
            },
            itens: trainer.itens.clone(),
            pokedex: PokedexInput {
                vistos: i64::from(trainer.pokedex.vistos),
                capturados: i64::from(trainer.pokedex.capturados),
            },
        }
    }
}

// =============================================================================
// Pokémon
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PokemonAttributesInput {
    pub strength: i64,
    pub dexterity: i64,
    pub vitality: i64,
    pub insight: i64,
}

impl PokemonAttributesInput {
    pub fn fields(&self) -> [(&'static str, i64); 4] {
        [
            ("strength", self.strength),
            ("dexterity", self.dexterity),
            ("vitality", self.vitality),
            ("insight", self.insight),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BattleRecordInput {
    pub batalhas: i64,
    pub vitorias: i64,
}

/// Pokémon form payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonInput {
    #[serde(default)]
    pub id: Option<PokemonId>,
    pub nome: String,
    #[serde(default)]
    pub apelido: Option<String>,
    pub especie: String,
    pub numero_pokedex: i64,
    pub tipos: Vec<String>,
    pub rank: String,
    pub natureza: String,
    pub tamanho: f64,
    pub peso: f64,
    pub atributos: PokemonAttributesInput,
    pub hp: i64,
    pub will_points: i64,
    pub iniciativa: i64,
    pub defesa_fisica: i64,
    pub defesa_especial: i64,
    pub status: String,
    pub habilidade: String,
    pub moves: Vec<String>,
    pub felicidade: i64,
    pub lealdade: i64,
    pub historico: BattleRecordInput,
    pub esta_na_party: bool,
}

impl Default for PokemonInput {
    fn default() -> Self {
        Self {
            id: None,
            nome: String::new(),
            apelido: None,
            especie: String::new(),
            numero_pokedex: 1,
            tipos: Vec::new(),
            rank: Rank::default().to_string(),
            natureza: Nature::default().to_string(),
            tamanho: 0.0,
            peso: 0.0,
            atributos: PokemonAttributesInput::default(),
            hp: 0,
            will_points: 0,
            iniciativa: 0,
            defesa_fisica: 0,
            defesa_especial: 0,
            status: Status::default().to_string(),
            habilidade: String::new(),
            moves: Vec::new(),
            felicidade: 0,
            lealdade: 0,
            historico: BattleRecordInput::default(),
            esta_na_party: false,
        }
    }
}

impl From<&Pokemon> for PokemonInput {
    fn from(pokemon: &Pokemon) -> Self {
        let a = pokemon.attributes();
        Self {
            id: Some(pokemon.id),
            nome: pokemon.nome.clone(),
            apelido: pokemon.apelido.clone(),
            especie: pokemon.especie.clone(),
            numero_pokedex: i64::from(pokemon.numero_pokedex),
            tipos: pokemon.tipos.iter().map(|t| t.to_string()).collect(),
            rank: pokemon.rank.to_string(),
            natureza: pokemon.natureza.to_string(),
            tamanho: pokemon.tamanho,
            peso: pokemon.peso,
            atributos: PokemonAttributesInput {
                strength: i64::from(a.strength),
                dexterity: i64::from(a.dexterity),
                vitality: i64::from(a.vitality),
                insight: i64::from(a.insight),
            },
            hp: i64::from(pokemon.hp),
            will_points: i64::from(pokemon.will_points),
            iniciativa: i64::from(pokemon.iniciativa),
            defesa_fisica: i64::from(pokemon.defesa_fisica),
            defesa_especial: i64::from(pokemon.defesa_especial),
            status: pokemon.status.to_string(),
            habilidade: pokemon.habilidade.clone(),
            moves: pokemon.moves().to_vec(),
            felicidade: i64::from(pokemon.felicidade),
            lealdade: i64::from(pokemon.lealdade),
            historico: BattleRecordInput {
                batalhas: i64::from(pokemon.historico.batalhas),
                vitorias: i64::from(pokemon.historico.vitorias),
            },
            esta_na_party: pokemon.esta_na_party,
        }
    }
}

/// Split a comma-separated form field into trimmed, non-empty entries.
///
/// This is how the forms encode `tipos`, `moves` and the inventory bags.
pub fn parse_comma_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PokemonType;

    #[test]
    fn test_parse_comma_list() {
        assert_eq!(parse_comma_list("Fire, Flying"), vec!["Fire", "Flying"]);
        assert_eq!(parse_comma_list(" Potion ,, Super Potion ,"), vec!["Potion", "Super Potion"]);
        assert!(parse_comma_list("  ").is_empty());
    }

    #[test]
    fn test_default_inputs_use_first_enum_values() {
        let trainer = TrainerInput::default();
        assert_eq!(trainer.natureza, "Hardy");
        assert_eq!(trainer.rank, "Starter");

        let pokemon = PokemonInput::default();
        assert_eq!(pokemon.status, "Healthy");
        assert_eq!(pokemon.numero_pokedex, 1);
    }

    #[test]
    fn test_prefill_from_pokemon() {
        let mut pokemon = Pokemon::new(
            "Pidgey",
            "Tiny Bird",
            16,
            vec![PokemonType::Normal, PokemonType::Flying],
            "Keen Eye",
        );
        pokemon.set_insight(1);
        pokemon.set_moves(vec!["Gust".to_string()]);

        let input = PokemonInput::from(&pokemon);
        assert_eq!(input.id, Some(pokemon.id));
        assert_eq!(input.tipos, vec!["Normal", "Flying"]);
        assert_eq!(input.atributos.insight, 1);
        assert_eq!(input.moves, vec!["Gust"]);
    }

    #[test]
    fn test_input_accepts_wire_names() {
        let input: TrainerInput = serde_json::from_value(serde_json::json!({
            "nome": "Ash",
            "idade": 10,
            "natureza": "Brave",
            "ocupacao": "Student",
            "rank": "Starter",
            "atributos": TrainerAttributesInput::default(),
            "skills": TrainerSkillsInput::default(),
            "itens": { "potions": ["Potion"], "batalha": [], "outros": [] },
            "pokedex": { "vistos": 3, "capturados": 1 }
        }))
        .unwrap();

        assert_eq!(input.id, None);
        assert_eq!(input.itens.potions, vec!["Potion"]);
        assert_eq!(input.pokedex.vistos, 3);
    }
}
