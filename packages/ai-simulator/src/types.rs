//! Shared types for the simulator.

use clap::ValueEnum;
use durak_engine::ai::{Heuristic, RandomPlayer};

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line, written as games finish
    Jsonl,
    /// A single JSON array, written at the end of the run
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AiType {
    Heuristic,
    Random,
}

impl AiType {
    /// Name in the engine's AI registry.
    pub fn name(self) -> &'static str {
        match self {
            AiType::Heuristic => Heuristic::NAME,
            AiType::Random => RandomPlayer::NAME,
        }
    }
}
