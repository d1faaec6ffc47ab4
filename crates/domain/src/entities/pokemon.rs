//! Pokémon entity - one creature sheet in the roster
//!
//! Each record is independent. The whole roster is stored as a single array
//! and rewritten on every save.

use serde::{Deserialize, Serialize};

use crate::derivation::{cap_move_list, move_cap, MAX_MOVES};
use crate::error::ValidationErrors;
use crate::ids::PokemonId;
use crate::types::{Nature, PokemonType, Rank, Status};
use crate::validation::{check_score, check_type_set, MSG_NON_NEGATIVE, MSG_POKEDEX_NUMBER};

/// The four Pokémon attribute scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PokemonAttributes {
    pub strength: u32,
    pub dexterity: u32,
    pub vitality: u32,
    pub insight: u32,
}

/// Battle history counters.
///
/// `vitorias <= batalhas` is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BattleRecord {
    pub batalhas: u32,
    pub vitorias: u32,
}

/// A Pokémon sheet.
///
/// Unlike the Trainer, combat stats (`hp`, `willPoints`, ...) are entered by
/// the user. The only derived constraint is on `moves`: the list never holds
/// more than `insight + 2` entries, and is truncated from the end whenever
/// insight drops or the list grows.
///
/// Stored records are checked again on load: the move cap is re-applied, and
/// a record that breaks a hard bound fails to deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredPokemon")]
pub struct Pokemon {
    pub id: PokemonId,
    pub nome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apelido: Option<String>,
    pub especie: String,
    pub numero_pokedex: u32,
    /// One or two types
    pub tipos: Vec<PokemonType>,
    pub rank: Rank,
    pub natureza: Nature,
    /// Height in cm
    pub tamanho: f64,
    /// Weight in kg
    pub peso: f64,
    atributos: PokemonAttributes,
    pub hp: u32,
    pub will_points: u32,
    pub iniciativa: u32,
    pub defesa_fisica: u32,
    pub defesa_especial: u32,
    pub status: Status,
    pub habilidade: String,
    moves: Vec<String>,
    /// 0 to 5
    pub felicidade: u8,
    /// 0 to 5
    pub lealdade: u8,
    pub historico: BattleRecord,
    /// Mirrors the Trainer's `party` list; not kept in sync transactionally
    pub esta_na_party: bool,
}

impl Pokemon {
    pub fn new(
        nome: impl Into<String>,
        especie: impl Into<String>,
        numero_pokedex: u32,
        tipos: Vec<PokemonType>,
        habilidade: impl Into<String>,
    ) -> Self {
        Self {
            id: PokemonId::new(),
            nome: nome.into(),
            apelido: None,
            especie: especie.into(),
            numero_pokedex,
            tipos,
            rank: Rank::default(),
            natureza: Nature::default(),
            tamanho: 0.0,
            peso: 0.0,
            atributos: PokemonAttributes::default(),
            hp: 0,
            will_points: 0,
            iniciativa: 0,
            defesa_fisica: 0,
            defesa_especial: 0,
            status: Status::default(),
            habilidade: habilidade.into(),
            moves: Vec::new(),
            felicidade: 0,
            lealdade: 0,
            historico: BattleRecord::default(),
            esta_na_party: false,
        }
    }

    /// Nickname if one is set, species name otherwise
    pub fn display_name(&self) -> &str {
        match self.apelido.as_deref() {
            Some(apelido) if !apelido.trim().is_empty() => apelido,
            _ => &self.nome,
        }
    }

    pub fn attributes(&self) -> &PokemonAttributes {
        &self.atributos
    }

    /// Replace the attribute scores, re-applying the move cap.
    pub fn set_attributes(&mut self, atributos: PokemonAttributes) {
        self.atributos = atributos;
        self.moves = cap_move_list(&self.moves, atributos.insight);
    }

    /// Change insight only, re-applying the move cap.
    pub fn set_insight(&mut self, insight: u32) {
        let atributos = PokemonAttributes {
            insight,
            ..self.atributos
        };
        self.set_attributes(atributos);
    }

    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    /// Replace the move list; anything past the cap is dropped.
    pub fn set_moves(&mut self, moves: Vec<String>) {
        self.moves = cap_move_list(&moves, self.atributos.insight);
    }

    /// Maximum number of moves at the current insight
    pub fn move_cap(&self) -> usize {
        move_cap(self.atributos.insight)
    }
}

/// On-disk shape of a Pokémon, checked before it becomes a [`Pokemon`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPokemon {
    id: PokemonId,
    nome: String,
    #[serde(default)]
    apelido: Option<String>,
    especie: String,
    numero_pokedex: u32,
    tipos: Vec<PokemonType>,
    rank: Rank,
    natureza: Nature,
    tamanho: f64,
    peso: f64,
    atributos: PokemonAttributes,
    hp: u32,
    will_points: u32,
    iniciativa: u32,
    defesa_fisica: u32,
    defesa_especial: u32,
    status: Status,
    habilidade: String,
    moves: Vec<String>,
    felicidade: u8,
    lealdade: u8,
    historico: BattleRecord,
    #[serde(default)]
    esta_na_party: bool,
}

impl TryFrom<StoredPokemon> for Pokemon {
    type Error = ValidationErrors;

    fn try_from(stored: StoredPokemon) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::new();
        if stored.numero_pokedex == 0 {
            errors.add("numeroPokedex", MSG_POKEDEX_NUMBER);
        }
        check_type_set(&mut errors, &stored.tipos);
        check_score(&mut errors, stored.felicidade, "felicidade");
        check_score(&mut errors, stored.lealdade, "lealdade");
        if stored.moves.len() > MAX_MOVES {
            errors.add("moves", format!("Máximo de {} moves", MAX_MOVES));
        }
        if !stored.tamanho.is_finite() || stored.tamanho < 0.0 {
            errors.add("tamanho", MSG_NON_NEGATIVE);
        }
        if !stored.peso.is_finite() || stored.peso < 0.0 {
            errors.add("peso", MSG_NON_NEGATIVE);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let mut pokemon = Pokemon::new(
            stored.nome,
            stored.especie,
            stored.numero_pokedex,
            stored.tipos,
            stored.habilidade,
        );
        pokemon.id = stored.id;
        pokemon.apelido = stored.apelido;
        pokemon.rank = stored.rank;
        pokemon.natureza = stored.natureza;
        pokemon.tamanho = stored.tamanho;
        pokemon.peso = stored.peso;
        pokemon.set_attributes(stored.atributos);
        pokemon.set_moves(stored.moves);
        pokemon.hp = stored.hp;
        pokemon.will_points = stored.will_points;
        pokemon.iniciativa = stored.iniciativa;
        pokemon.defesa_fisica = stored.defesa_fisica;
        pokemon.defesa_especial = stored.defesa_especial;
        pokemon.status = stored.status;
        pokemon.felicidade = stored.felicidade;
        pokemon.lealdade = stored.lealdade;
        pokemon.historico = stored.historico;
        pokemon.esta_na_party = stored.esta_na_party;
        Ok(pokemon)
    }
}
