//! Personality natures shared by Trainers and Pokémon

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the 25 fixed personality natures.
///
/// Natures affect stat growth in the ruleset; nothing in this crate
/// computes with them, they are only validated and stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Nature {
    #[default]
    Hardy,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

impl Nature {
    /// All natures in their canonical order, for form dropdowns
    pub fn all() -> &'static [Nature] {
        &[
            Nature::Hardy,
            Nature::Lonely,
            Nature::Brave,
            Nature::Adamant,
            Nature::Naughty,
            Nature::Bold,
            Nature::Docile,
            Nature::Relaxed,
            Nature::Impish,
            Nature::Lax,
            Nature::Timid,
            Nature::Hasty,
            Nature::Serious,
            Nature::Jolly,
            Nature::Naive,
            Nature::Modest,
            Nature::Mild,
            Nature::Quiet,
            Nature::Bashful,
            Nature::Rash,
            Nature::Calm,
            Nature::Gentle,
            Nature::Sassy,
            Nature::Careful,
            Nature::Quirky,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Nature::Hardy => "Hardy",
            Nature::Lonely => "Lonely",
            Nature::Brave => "Brave",
            Nature::Adamant => "Adamant",
            Nature::Naughty => "Naughty",
            Nature::Bold => "Bold",
            Nature::Docile => "Docile",
            Nature::Relaxed => "Relaxed",
            Nature::Impish => "Impish",
            Nature::Lax => "Lax",
            Nature::Timid => "Timid",
            Nature::Hasty => "Hasty",
            Nature::Serious => "Serious",
            Nature::Jolly => "Jolly",
            Nature::Naive => "Naive",
            Nature::Modest => "Modest",
            Nature::Mild => "Mild",
            Nature::Quiet => "Quiet",
            Nature::Bashful => "Bashful",
            Nature::Rash => "Rash",
            Nature::Calm => "Calm",
            Nature::Gentle => "Gentle",
            Nature::Sassy => "Sassy",
            Nature::Careful => "Careful",
            Nature::Quirky => "Quirky",
        }
    }
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Nature {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Nature::all()
            .iter()
            .copied()
            .find(|n| n.display_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::parse(format!("Unknown nature: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_there_are_25_natures() {
        assert_eq!(Nature::all().len(), 25);
        assert_eq!(Nature::all().first(), Some(&Nature::Hardy));
        assert_eq!(Nature::all().last(), Some(&Nature::Quirky));
    }

    #[test]
    fn test_parse_roundtrips_every_display_name() {
        for nature in Nature::all() {
            let parsed: Nature = nature.display_name().parse().unwrap();
            assert_eq!(parsed, *nature);
        }
    }

    #[test]
    fn test_parse_ignores_case_and_whitespace() {
        assert_eq!(" adamant ".parse::<Nature>().unwrap(), Nature::Adamant);
        assert!("Grumpy".parse::<Nature>().is_err());
    }

    #[test]
    fn test_serializes_as_canonical_name() {
        assert_eq!(serde_json::to_string(&Nature::Jolly).unwrap(), "\"Jolly\"");
    }
}
