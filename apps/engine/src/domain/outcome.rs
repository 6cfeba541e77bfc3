//! End-of-game detection and the winner verdict.
//!
//! Both functions look at hand emptiness only. The turn state machine decides
//! when to ask: on entering an attack phase once the draw pile is exhausted.

use serde::Serialize;

use super::cards_types::Card;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    InProgress,
    PlayerWins,
    ComputerWins,
    Draw,
}

impl Outcome {
    pub fn is_decided(self) -> bool {
        self != Outcome::InProgress
    }
}

pub fn is_over(player: &[Card], computer: &[Card]) -> bool {
    player.is_empty() || computer.is_empty()
}

/// Whoever emptied their hand wins; both empty is a draw.
pub fn winner(player: &[Card], computer: &[Card]) -> Outcome {
    match (player.is_empty(), computer.is_empty()) {
        (true, true) => Outcome::Draw,
        (true, false) => Outcome::PlayerWins,
        (false, true) => Outcome::ComputerWins,
        (false, false) => Outcome::InProgress,
    }
}
