//! Heuristic: the deterministic default opponent.
//!
//! A thin seat adapter over [`select_move`](super::select_move). All scoring
//! lives in `ai::scoring`; this type only carries the concurrency knob.

use super::selector::select_move;
use super::trait_def::{AiError, AiPlayer};
use crate::domain::player_view::SeatView;
use crate::domain::Role;

#[derive(Clone, Debug)]
pub struct Heuristic {
    concurrency: usize,
}

impl Heuristic {
    pub const NAME: &'static str = "Heuristic";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(concurrency: usize) -> Self {
        Self {
            concurrency: concurrency.max(1),
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }
}

impl AiPlayer for Heuristic {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn choose_attack(&self, view: &SeatView<'_>) -> Result<Option<usize>, AiError> {
        Ok(select_move(
            view.hand,
            view.table,
            view.trump,
            Role::Attack,
            self.concurrency,
        ))
    }

    fn choose_defense(&self, view: &SeatView<'_>) -> Result<Option<usize>, AiError> {
        Ok(select_move(
            view.hand,
            view.table,
            view.trump,
            Role::Defend,
            self.concurrency,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{try_parse_cards, Table};

    #[test]
    fn concurrency_is_at_least_one() {
        assert_eq!(Heuristic::new(0).concurrency(), 1);
        assert_eq!(Heuristic::new(4).concurrency(), 4);
    }

    #[test]
    fn takes_the_table_when_nothing_beats() {
        let hand = try_parse_cards(["2H", "TD"]).unwrap();
        let mut table = Table::new();
        table.push_attack("AH".parse().unwrap());
        let view = SeatView {
            hand: &hand,
            table: &table,
            trump: "KS".parse().unwrap(),
            deck_remaining: 3,
            opponent_hand_size: 5,
        };
        assert_eq!(Heuristic::new(2).choose_defense(&view).unwrap(), None);
    }
}
