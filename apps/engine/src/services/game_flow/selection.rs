//! Input events from the human seat.

use crate::domain::Role;

/// Raw input value for "end move" while attacking.
pub const END_ATTACK_RAW: i64 = -1;
/// Raw input value for "take the table" while defending.
pub const TAKE_TABLE_RAW: i64 = -2;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Selection {
    /// Index into the player's hand.
    Card(usize),
    /// Stop attacking; the table is discarded. Attack phases only.
    EndAttack,
    /// Give up defending; the table goes to the defender's hand. Defend phases only.
    TakeTable,
}

impl Selection {
    /// Map the integer produced by the input layer. Unknown negatives are no input.
    pub fn from_raw(raw: i64) -> Option<Selection> {
        match raw {
            END_ATTACK_RAW => Some(Selection::EndAttack),
            TAKE_TABLE_RAW => Some(Selection::TakeTable),
            i if i >= 0 => usize::try_from(i).ok().map(Selection::Card),
            _ => None,
        }
    }

    /// Translate an `AiPlayer` answer for `role` into a selection, so an AI
    /// can sit in the player's seat.
    pub fn from_choice(role: Role, choice: Option<usize>) -> Selection {
        match (choice, role) {
            (Some(index), _) => Selection::Card(index),
            (None, Role::Attack) => Selection::EndAttack,
            (None, Role::Defend) => Selection::TakeTable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_map_to_selections() {
        assert_eq!(Selection::from_raw(0), Some(Selection::Card(0)));
        assert_eq!(Selection::from_raw(5), Some(Selection::Card(5)));
        assert_eq!(Selection::from_raw(-1), Some(Selection::EndAttack));
        assert_eq!(Selection::from_raw(-2), Some(Selection::TakeTable));
        assert_eq!(Selection::from_raw(-3), None);
    }

    #[test]
    fn empty_ai_choice_maps_to_the_role_sentinel() {
        assert_eq!(Selection::from_choice(Role::Attack, None), Selection::EndAttack);
        assert_eq!(Selection::from_choice(Role::Defend, None), Selection::TakeTable);
        assert_eq!(Selection::from_choice(Role::Defend, Some(2)), Selection::Card(2));
    }
}
