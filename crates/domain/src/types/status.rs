//! Pokémon condition status

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Exactly one condition is active on a Pokémon at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Status {
    #[default]
    Healthy,
    Poisoned,
    Paralyzed,
    Burned,
    Frozen,
    Asleep,
    Fainted,
}

impl Status {
    pub fn all() -> &'static [Status] {
        &[
            Status::Healthy,
            Status::Poisoned,
            Status::Paralyzed,
            Status::Burned,
            Status::Frozen,
            Status::Asleep,
            Status::Fainted,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Status::Healthy => "Healthy",
            Status::Poisoned => "Poisoned",
            Status::Paralyzed => "Paralyzed",
            Status::Burned => "Burned",
            Status::Frozen => "Frozen",
            Status::Asleep => "Asleep",
            Status::Fainted => "Fainted",
        }
    }

    /// Whether the Pokémon can still act
    pub fn can_battle(&self) -> bool {
        !matches!(self, Status::Fainted)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Status {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "healthy" => Status::Healthy,
            "poisoned" => Status::Poisoned,
            "paralyzed" => Status::Paralyzed,
            "burned" => Status::Burned,
            "frozen" => Status::Frozen,
            "asleep" => Status::Asleep,
            "fainted" => Status::Fainted,
            _ => return Err(DomainError::parse(format!("Unknown status: {}", s))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_statuses_default_healthy() {
        assert_eq!(Status::all().len(), 7);
        assert_eq!(Status::default(), Status::Healthy);
    }

    #[test]
    fn test_only_fainted_cannot_battle() {
        let unable: Vec<_> = Status::all().iter().filter(|s| !s.can_battle()).collect();
        assert_eq!(unable, vec![&Status::Fainted]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("asleep".parse::<Status>().unwrap(), Status::Asleep);
        assert!("Confused".parse::<Status>().is_err());
    }
}
