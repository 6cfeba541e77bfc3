//! Per-game metrics written by the simulator.

use durak_engine::services::game_flow::FlowStats;
use durak_engine::Outcome;
use serde::Serialize;

use crate::simulator::GameResult;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: RunConfig,
    pub result: GameResultMetrics,
    pub stats: FlowStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunConfig {
    pub player_ai: String,
    pub computer_ai: String,
    pub include_jokers: bool,
    pub ai_concurrency: usize,
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub outcome: Outcome,
    pub trump: Option<String>,
    pub player_cards_left: usize,
    pub computer_cards_left: usize,
    pub duration_ms: f64,
}

pub fn build_game_metrics(
    game_id: u32,
    seed: u64,
    config: RunConfig,
    result: &GameResult,
    duration_ms: f64,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    GameMetrics {
        game_id,
        seed,
        timestamp,
        config,
        result: GameResultMetrics {
            outcome: result.outcome,
            trump: result.trump.map(|c| c.to_string()),
            player_cards_left: result.player_cards_left,
            computer_cards_left: result.computer_cards_left,
            duration_ms,
        },
        stats: result.stats.clone(),
    }
}

/// One line of the CSV summary.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub outcome: Outcome,
    pub trump: String,
    pub ticks: u64,
    pub attacks: u32,
    pub defenses: u32,
    pub discards: u32,
    pub player_takes: u32,
    pub computer_takes: u32,
    pub ai_fallbacks: u32,
    pub player_ai: String,
    pub computer_ai: String,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(m: &GameMetrics) -> Self {
        Self {
            game_id: m.game_id,
            seed: m.seed,
            outcome: m.result.outcome,
            trump: m.result.trump.clone().unwrap_or_default(),
            ticks: m.stats.ticks,
            attacks: m.stats.attacks,
            defenses: m.stats.defenses,
            discards: m.stats.discards,
            player_takes: m.stats.player_takes,
            computer_takes: m.stats.computer_takes,
            ai_fallbacks: m.stats.ai_fallbacks,
            player_ai: m.config.player_ai.clone(),
            computer_ai: m.config.computer_ai.clone(),
        }
    }
}
