//! AI player trait definition.

use thiserror::Error;

use crate::domain::player_view::SeatView;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("AI internal error: {0}")]
    Internal(String),
    #[error("AI invalid move: {0}")]
    InvalidMove(String),
}

/// A seat-filling strategy.
///
/// Both methods return an index into `view.hand`. `None` is a decision too:
/// from `choose_attack` it ends the move, from `choose_defense` it takes the
/// table. Implementations must be `Send + Sync` so a game can be driven from
/// any thread.
pub trait AiPlayer: Send + Sync {
    fn name(&self) -> &'static str;

    fn choose_attack(&self, view: &SeatView<'_>) -> Result<Option<usize>, AiError>;

    fn choose_defense(&self, view: &SeatView<'_>) -> Result<Option<usize>, AiError>;
}
