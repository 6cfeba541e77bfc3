//! Computer opponent: move scoring, selection and pluggable AI players.
//!
//! - `select_move`: the single selection contract, serial or fanned out
//! - `AiPlayer`: the seat seam the turn state machine talks to
//! - `Heuristic` (default) and `RandomPlayer`, listed in `registry`

pub mod config;
mod heuristic;
mod random;
pub mod registry;
pub mod scoring;
mod selector;
#[cfg(test)]
mod tests_props_selector;
mod trait_def;

pub use config::AiConfig;
pub use heuristic::Heuristic;
pub use random::RandomPlayer;
pub use scoring::ScoringStrategy;
pub use selector::{select_move, SERIAL_HAND_THRESHOLD};
pub use trait_def::{AiError, AiPlayer};

pub use crate::domain::Role;

/// What the turn state machine does when an AI errors or proposes an
/// illegal index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiFailureMode {
    /// Panic (for tests)
    Panic,
    /// Fall back to a serial `select_move` (default)
    FallbackHeuristic,
}

/// Create a registered AI by name. Returns `None` for unknown names.
pub fn create_ai(name: &str, config: &AiConfig) -> Option<Box<dyn AiPlayer>> {
    registry::by_name(name).map(|factory| (factory.make)(config))
}
