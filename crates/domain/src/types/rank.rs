//! Rank ladder shared by Trainers and Pokémon

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Five-tier proficiency ladder.
///
/// Variants are declared in ladder order, so the derived `Ord` gives
/// `Starter < Beginner < Amateur < Ace < Professional`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Rank {
    #[default]
    Starter,
    Beginner,
    Amateur,
    Ace,
    Professional,
}

impl Rank {
    /// All ranks from lowest to highest
    pub fn all() -> &'static [Rank] {
        &[
            Rank::Starter,
            Rank::Beginner,
            Rank::Amateur,
            Rank::Ace,
            Rank::Professional,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Rank::Starter => "Starter",
            Rank::Beginner => "Beginner",
            Rank::Amateur => "Amateur",
            Rank::Ace => "Ace",
            Rank::Professional => "Professional",
        }
    }

    /// Zero-based position on the ladder
    pub fn tier(&self) -> u8 {
        match self {
            Rank::Starter => 0,
            Rank::Beginner => 1,
            Rank::Amateur => 2,
            Rank::Ace => 3,
            Rank::Professional => 4,
        }
    }

    /// The rank one step up, or `None` at the top of the ladder
    pub fn next(&self) -> Option<Rank> {
        Rank::all().get(usize::from(self.tier()) + 1).copied()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Rank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "starter" => Rank::Starter,
            "beginner" => Rank::Beginner,
            "amateur" => Rank::Amateur,
            "ace" => Rank::Ace,
            "professional" => Rank::Professional,
            _ => return Err(DomainError::parse(format!("Unknown rank: {}", s))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_order() {
        assert!(Rank::Starter < Rank::Beginner);
        assert!(Rank::Beginner < Rank::Amateur);
        assert!(Rank::Amateur < Rank::Ace);
        assert!(Rank::Ace < Rank::Professional);
    }

    #[test]
    fn test_tier_matches_position() {
        for (i, rank) in Rank::all().iter().enumerate() {
            assert_eq!(usize::from(rank.tier()), i);
        }
    }

    #[test]
    fn test_next() {
        assert_eq!(Rank::Starter.next(), Some(Rank::Beginner));
        assert_eq!(Rank::Professional.next(), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("ACE".parse::<Rank>().unwrap(), Rank::Ace);
        assert!("Master".parse::<Rank>().is_err());
    }
}
