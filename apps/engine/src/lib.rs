#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use ai::{create_ai, select_move, AiConfig, AiError, AiFailureMode, AiPlayer};
pub use config::{ConfigError, GameConfig};
pub use domain::{Card, Outcome, Phase, Rank, RenderView, Role, SeatView, Side, Suit, Table};
pub use errors::{DomainError, ValidationKind};
pub use services::game_flow::{GameFlow, Selection, TickOutcome};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
