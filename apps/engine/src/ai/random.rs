//! Random AI player - makes random legal moves.
//!
//! [`RandomPlayer`] is the baseline opponent for simulations and the
//! reference implementation of [`AiPlayer`](super::AiPlayer): it only ever
//! picks from the `legal_*()` helpers on [`SeatView`], supports optional
//! seeding for reproducible runs and never panics.

use parking_lot::Mutex;
use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::player_view::SeatView;

/// AI that picks uniformly among legal moves.
///
/// It attacks whenever some card is legal and ends the move otherwise; it
/// defends whenever some card beats the target and takes the table otherwise.
///
/// ```rust,ignore
/// // Deterministic, for tests and simulations
/// let seeded = RandomPlayer::new(Some(12345));
///
/// // Seeded from the OS
/// let fresh = RandomPlayer::new(None);
/// ```
pub struct RandomPlayer {
    /// `AiPlayer` methods take `&self`, the RNG needs `&mut`.
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn pick(&self, legal: &[usize]) -> Option<usize> {
        let mut rng = self.rng.lock();
        legal.choose(&mut *rng).copied()
    }
}

impl AiPlayer for RandomPlayer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn choose_attack(&self, view: &SeatView<'_>) -> Result<Option<usize>, AiError> {
        Ok(self.pick(&view.legal_attacks()))
    }

    fn choose_defense(&self, view: &SeatView<'_>) -> Result<Option<usize>, AiError> {
        if view.table.target().is_none() {
            return Err(AiError::InvalidMove("no attack to defend against".into()));
        }
        Ok(self.pick(&view.legal_defenses()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{try_parse_cards, Card, Table};

    fn view<'a>(hand: &'a [Card], table: &'a Table) -> SeatView<'a> {
        SeatView {
            hand,
            table,
            trump: "AS".parse().unwrap(),
            deck_remaining: 0,
            opponent_hand_size: 6,
        }
    }

    #[test]
    fn seeded_players_agree() {
        let hand = try_parse_cards(["2H", "TD", "JC", "QS", "KH", "AD"]).unwrap();
        let table = Table::new();
        let a = RandomPlayer::new(Some(42));
        let b = RandomPlayer::new(Some(42));
        for _ in 0..10 {
            assert_eq!(
                a.choose_attack(&view(&hand, &table)).unwrap(),
                b.choose_attack(&view(&hand, &table)).unwrap()
            );
        }
    }

    #[test]
    fn only_legal_defences_are_picked() {
        let hand = try_parse_cards(["2H", "TD", "KH", "QS"]).unwrap();
        let mut table = Table::new();
        table.push_attack("JH".parse().unwrap());
        let ai = RandomPlayer::new(Some(7));
        for _ in 0..20 {
            let choice = ai.choose_defense(&view(&hand, &table)).unwrap();
            assert!(matches!(choice, Some(2) | Some(3)), "got {choice:?}");
        }
    }

    #[test]
    fn defending_an_empty_table_is_an_error() {
        let hand = try_parse_cards(["2H"]).unwrap();
        let table = Table::new();
        let ai = RandomPlayer::new(Some(1));
        assert!(ai.choose_defense(&view(&hand, &table)).is_err());
    }
}
