//! Derivation rules for dependent sheet fields
//!
//! Derived fields are a pure function of their inputs. They are recomputed on
//! every change to an input (not only on submit) and are never set directly.
//!
//! | Derived | Inputs | Rule |
//! |---|---|---|
//! | Trainer `hp` | vitality | `10 + vitality` |
//! | Trainer `willPoints` | insight | `insight + 2` |
//! | Pokémon move cap | insight | `insight + 2`, list truncated from the end |

use serde::{Deserialize, Serialize};

/// Base HP every Trainer has before vitality
pub const BASE_TRAINER_HP: u32 = 10;

/// Added to insight for Will Points and for the move cap
pub const WILL_POINTS_BONUS: u32 = 2;

/// Hard ceiling on a Pokémon's move list, independent of insight
pub const MAX_MOVES: usize = 10;

/// A Trainer's derived vitals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerVitals {
    pub hp: u32,
    pub will_points: u32,
}

/// Compute a Trainer's HP and Will Points from vitality and insight.
pub fn derive_trainer_vitals(vitality: u32, insight: u32) -> TrainerVitals {
    TrainerVitals {
        hp: BASE_TRAINER_HP.saturating_add(vitality),
        will_points: insight.saturating_add(WILL_POINTS_BONUS),
    }
}

/// How many moves a Pokémon with this insight may know.
pub fn move_cap(insight: u32) -> usize {
    usize::try_from(insight.saturating_add(WILL_POINTS_BONUS)).unwrap_or(usize::MAX)
}

/// Truncate `moves` to at most `insight + 2` entries.
///
/// Keeps the input order and drops from the end. Idempotent for a fixed
/// insight.
pub fn cap_move_list(moves: &[String], insight: u32) -> Vec<String> {
    moves.iter().take(move_cap(insight)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_trainer_vitals_formula() {
        for vitality in 0..8 {
            for insight in 0..8 {
                let vitals = derive_trainer_vitals(vitality, insight);
                assert_eq!(vitals.hp, 10 + vitality);
                assert_eq!(vitals.will_points, insight + 2);
            }
        }
    }

    #[test]
    fn test_starter_trainer_vitals() {
        let vitals = derive_trainer_vitals(2, 1);
        assert_eq!(vitals, TrainerVitals { hp: 12, will_points: 3 });
    }

    #[test]
    fn test_vitals_saturate_instead_of_overflowing() {
        let vitals = derive_trainer_vitals(u32::MAX, u32::MAX);
        assert_eq!(vitals.hp, u32::MAX);
        assert_eq!(vitals.will_points, u32::MAX);
    }

    #[test]
    fn test_cap_drops_only_the_last_move() {
        let list = moves(&["Tackle", "Growl", "Ember", "Bite", "Slam", "Cut"]);
        let capped = cap_move_list(&list, 3);
        assert_eq!(capped, moves(&["Tackle", "Growl", "Ember", "Bite", "Slam"]));
    }

    #[test]
    fn test_cap_keeps_short_lists_untouched() {
        let list = moves(&["Tackle", "Growl"]);
        assert_eq!(cap_move_list(&list, 0), list);
        assert_eq!(cap_move_list(&[], 5), Vec::<String>::new());
    }

    #[test]
    fn test_cap_is_idempotent_and_order_preserving() {
        let list = moves(&["A", "B", "C", "D", "E", "F", "G", "H"]);
        for insight in 0..10 {
            let once = cap_move_list(&list, insight);
            let twice = cap_move_list(&once, insight);
            assert_eq!(once, twice);
            assert!(once.len() <= insight as usize + 2);
            assert_eq!(once[..], list[..once.len()]);
        }
    }

    #[test]
    fn test_vitals_wire_names() {
        let json = serde_json::to_string(&derive_trainer_vitals(1, 1)).unwrap();
        assert_eq!(json, r#"{"hp":11,"willPoints":3}"#);
    }
}
