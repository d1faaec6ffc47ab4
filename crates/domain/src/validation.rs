//! Entity schemas: field-level validation for submitted sheets.
//!
//! Validation is pure and collects every failing field instead of stopping at
//! the first one, so the form can flag all of them at once. Nothing is
//! persisted here; callers only store what comes back as `Ok`.
//!
//! Cross-field expectations (`capturados <= vistos`, `vitorias <= batalhas`,
//! `estaNaParty` vs the Trainer's party list) are not checked.

use std::str::FromStr;

use crate::derivation::MAX_MOVES;
use crate::entities::{
    BattleRecord, Pokedex, Pokemon, PokemonAttributes, Trainer, TrainerAttributes,
    TrainerSkills,
};
use crate::error::ValidationErrors;
use crate::ids::{PokemonId, TrainerId};
use crate::sheet::{PokemonInput, TrainerInput};
use crate::types::{Nature, PokemonType, Rank, Status};

pub(crate) const MSG_NON_NEGATIVE: &str = "Deve ser maior ou igual a 0";
const MSG_TYPE_COUNT: &str = "Informe 1 ou 2 tipos";
pub(crate) const MSG_SCORE_RANGE: &str = "Deve estar entre 0 e 5";
pub(crate) const MSG_POKEDEX_NUMBER: &str = "Número Pokédex inválido";

/// Upper bound for `felicidade` / `lealdade`
const MAX_SCORE: u8 = 5;

// =============================================================================
// Field helpers
// =============================================================================

/// Require a string that is non-empty after trimming.
fn require_non_empty(
    errors: &mut ValidationErrors,
    value: &str,
    field: &str,
    message: &str,
) -> String {
    if value.trim().is_empty() {
        errors.add(field, message);
    }
    value.trim().to_string()
}

/// Require an integer in `[min, max]`, returning the converted value.
///
/// On failure the error is recorded and `min` is returned as a placeholder;
/// the placeholder never escapes because the collector is non-empty.
fn require_range<T>(
    errors: &mut ValidationErrors,
    value: i64,
    min: T,
    max: T,
    field: &str,
    message: &str,
) -> T
where
    T: Copy + TryFrom<i64> + Into<i64>,
{
    if value < min.into() || value > max.into() {
        errors.add(field, message);
        return min;
    }
    T::try_from(value).unwrap_or(min)
}

/// Require an integer `>= 0` that fits the stored width.
fn require_non_negative(errors: &mut ValidationErrors, value: i64, field: &str) -> u32 {
    require_count(errors, value, field, MSG_NON_NEGATIVE)
}

/// Like [`require_non_negative`], with a field-specific message for negatives.
fn require_count(errors: &mut ValidationErrors, value: i64, field: &str, message: &str) -> u32 {
    if value < 0 {
        errors.add(field, message);
        return 0;
    }
    require_range(errors, value, 0u32, u32::MAX, field, "Valor muito grande")
}

/// Require a finite, non-negative measurement.
fn require_measure(errors: &mut ValidationErrors, value: f64, field: &str) -> f64 {
    if !value.is_finite() || value < 0.0 {
        errors.add(field, MSG_NON_NEGATIVE);
        return 0.0;
    }
    value
}

/// Require membership in a closed vocabulary.
fn require_member<T>(errors: &mut ValidationErrors, value: &str, field: &str, message: &str) -> T
where
    T: FromStr + Default,
{
    match value.parse::<T>() {
        Ok(parsed) => parsed,
        Err(_) => {
            errors.add(field, message);
            T::default()
        }
    }
}

fn trimmed_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

// =============================================================================
// Trainer
// =============================================================================

/// Validate a Trainer form submission.
///
/// On success the returned Trainer has `hp`/`willPoints` derived from its
/// attributes, keeps the submitted id (or a freshly generated one), and has
/// empty `party`/`box` lists; the caller carries roster references over from
/// the stored record.
pub fn validate_trainer(input: &TrainerInput) -> Result<Trainer, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let nome = require_non_empty(&mut errors, &input.nome, "nome", "Nome é obrigatório");
    let idade = require_count(&mut errors, input.idade, "idade", "Idade inválida");
    let natureza: Nature =
        require_member(&mut errors, &input.natureza, "natureza", "Natureza inválida");
    let ocupacao = require_non_empty(
        &mut errors,
        &input.ocupacao,
        "ocupacao",
        "Ocupação é obrigatória",
    );
    let rank: Rank = require_member(&mut errors, &input.rank, "rank", "Rank inválido");

    let mut attrs = [0u32; 9];
    for (slot, (name, value)) in attrs.iter_mut().zip(input.atributos.fields()) {
        *slot = require_non_negative(&mut errors, value, &format!("atributos.{}", name));
    }
    let [strength, dexterity, vitality, insight, tough, cute, cool, beauty, clever] = attrs;

    let mut skills = [0u32; 15];
    for (slot, (name, value)) in skills.iter_mut().zip(input.skills.fields()) {
        *slot = require_non_negative(&mut errors, value, &format!("skills.{}", name));
    }
    let [
        brawl,
        throw,
        evasion,
        alert,
        athletic,
        nature,
        stealth,
        empathy,
        etiquette,
        intimidate,
        perform,
        crafts,
        lore,
        medicine,
        science,
    ] = skills;

    let pokedex = Pokedex {
        vistos: require_non_negative(&mut errors, input.pokedex.vistos, "pokedex.vistos"),
        capturados: require_non_negative(
            &mut errors,
            input.pokedex.capturados,
            "pokedex.capturados",
        ),
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    let mut trainer = Trainer::with_attributes(
        input.id.unwrap_or_else(TrainerId::new),
        TrainerAttributes {
            strength,
            dexterity,
            vitality,
            insight,
            tough,
            cute,
            cool,
            beauty,
            clever,
        },
    );
    trainer.nome = nome;
    trainer.idade = idade;
    trainer.natureza = natureza;
    trainer.ocupacao = ocupacao;
    trainer.rank = rank;
    trainer.skills = TrainerSkills {
        brawl,
        throw,
        evasion,
        alert,
        athletic,
        nature,
        stealth,
        empathy,
        etiquette,
        intimidate,
        perform,
        crafts,
        lore,
        medicine,
        science,
    };
    trainer.pokedex = pokedex;
    trainer.itens.potions = trimmed_list(&input.itens.potions);
    trainer.itens.batalha = trimmed_list(&input.itens.batalha);
    trainer.itens.outros = trimmed_list(&input.itens.outros);

    Ok(trainer)
}

// =============================================================================
// Pokémon
// =============================================================================

fn validate_types(errors: &mut ValidationErrors, tipos: &[String]) -> Vec<PokemonType> {
    let tipos = trimmed_list(tipos);
    if tipos.is_empty() || tipos.len() > 2 {
        errors.add("tipos", MSG_TYPE_COUNT);
        return Vec::new();
    }

    let mut parsed = Vec::with_capacity(tipos.len());
    for tipo in &tipos {
        match tipo.parse::<PokemonType>() {
            Ok(t) => parsed.push(t),
            Err(_) => errors.add("tipos", format!("Tipo desconhecido: {}", tipo)),
        }
    }
    check_type_set(errors, &parsed);
    parsed
}

/// One or two types, no repeats. Shared with the load-time check on stored
/// Pokémon.
pub(crate) fn check_type_set(errors: &mut ValidationErrors, tipos: &[PokemonType]) {
    match tipos {
        [] => errors.add("tipos", MSG_TYPE_COUNT),
        [a, b] if a == b => errors.add("tipos", "Tipos repetidos"),
        [_] | [_, _] => {}
        _ => errors.add("tipos", MSG_TYPE_COUNT),
    }
}

/// A 0-5 score (`felicidade`, `lealdade`) already in its stored width.
pub(crate) fn check_score(errors: &mut ValidationErrors, value: u8, field: &str) {
    if value > MAX_SCORE {
        errors.add(field, MSG_SCORE_RANGE);
    }
}

/// Validate a Pokémon form submission.
///
/// The move list is checked against the hard ceiling of [`MAX_MOVES`] only.
/// The insight-based cap is a derivation, not a validation error, and is
/// applied when the moves are set on the returned Pokémon.
pub fn validate_pokemon(input: &PokemonInput) -> Result<Pokemon, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let nome = require_non_empty(&mut errors, &input.nome, "nome", "Nome é obrigatório");
    let apelido = input
        .apelido
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string);
    let especie = require_non_empty(
        &mut errors,
        &input.especie,
        "especie",
        "Espécie é obrigatória",
    );
    let numero_pokedex = require_range(
        &mut errors,
        input.numero_pokedex,
        1u32,
        u32::MAX,
        "numeroPokedex",
        MSG_POKEDEX_NUMBER,
    );
    let tipos = validate_types(&mut errors, &input.tipos);
    let rank: Rank = require_member(&mut errors, &input.rank, "rank", "Rank inválido");
    let natureza: Nature =
        require_member(&mut errors, &input.natureza, "natureza", "Natureza inválida");
    let tamanho = require_measure(&mut errors, input.tamanho, "tamanho");
    let peso = require_measure(&mut errors, input.peso, "peso");

    let mut attrs = [0u32; 4];
    for (slot, (name, value)) in attrs.iter_mut().zip(input.atributos.fields()) {
        *slot = require_non_negative(&mut errors, value, &format!("atributos.{}", name));
    }
    let [strength, dexterity, vitality, insight] = attrs;

    let hp = require_non_negative(&mut errors, input.hp, "hp");
    let will_points = require_non_negative(&mut errors, input.will_points, "willPoints");
    let iniciativa = require_non_negative(&mut errors, input.iniciativa, "iniciativa");
    let defesa_fisica = require_non_negative(&mut errors, input.defesa_fisica, "defesaFisica");
    let defesa_especial =
        require_non_negative(&mut errors, input.defesa_especial, "defesaEspecial");
    let status: Status = require_member(&mut errors, &input.status, "status", "Status inválido");
    let habilidade = require_non_empty(
        &mut errors,
        &input.habilidade,
        "habilidade",
        "Habilidade é obrigatória",
    );

    let moves = trimmed_list(&input.moves);
    if moves.len() > MAX_MOVES {
        errors.add("moves", format!("Máximo de {} moves", MAX_MOVES));
    }

    let felicidade = require_range(
        &mut errors,
        input.felicidade,
        0u8,
        MAX_SCORE,
        "felicidade",
        MSG_SCORE_RANGE,
    );
    let lealdade = require_range(
        &mut errors,
        input.lealdade,
        0u8,
        MAX_SCORE,
        "lealdade",
        MSG_SCORE_RANGE,
    );
    let historico = BattleRecord {
        batalhas: require_non_negative(
            &mut errors,
            input.historico.batalhas,
            "historico.batalhas",
        ),
        vitorias: require_non_negative(
            &mut errors,
            input.historico.vitorias,
            "historico.vitorias",
        ),
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    let mut pokemon = Pokemon::new(nome, especie, numero_pokedex, tipos, habilidade);
    pokemon.id = input.id.unwrap_or_else(PokemonId::new);
    pokemon.apelido = apelido;
    pokemon.rank = rank;
    pokemon.natureza = natureza;
    pokemon.tamanho = tamanho;
    pokemon.peso = peso;
    pokemon.set_attributes(PokemonAttributes {
        strength,
        dexterity,
        vitality,
        insight,
    });
    pokemon.hp = hp;
    pokemon.will_points = will_points;
    pokemon.iniciativa = iniciativa;
    pokemon.defesa_fisica = defesa_fisica;
    pokemon.defesa_especial = defesa_especial;
    pokemon.status = status;
    pokemon.set_moves(moves);
    pokemon.felicidade = felicidade;
    pokemon.lealdade = lealdade;
    pokemon.historico = historico;
    pokemon.esta_na_party = input.esta_na_party;

    Ok(pokemon)
}
