//! Game flow: the turn state machine that drives one game tick by tick.
//!
//! `GameFlow` owns every card collection. The renderer reads `view()`, the
//! input layer feeds `Selection`s into `tick()`, and the computer seat is an
//! `AiPlayer` consulted from the computer phases.

mod ai_coordinator;
mod orchestration;
mod player_actions;
mod round_lifecycle;
mod selection;

pub use orchestration::{FlowStats, GameFlow, TickOutcome};
pub use selection::{Selection, END_ATTACK_RAW, TAKE_TABLE_RAW};

pub use crate::domain::Phase;
