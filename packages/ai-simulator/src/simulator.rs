//! Headless game runner.
//!
//! Drives one `GameFlow` per game: the computer seat uses the engine's own
//! AI, the player seat is another `AiPlayer` whose answers are turned into
//! selections. Nothing is rendered and no input is waited for.

use durak_engine::services::game_flow::FlowStats;
use durak_engine::{
    AiError, AiPlayer, Card, ConfigError, DomainError, GameConfig, GameFlow, Outcome, TickOutcome,
};
use tracing::debug;

/// Summary of one finished game.
pub struct GameResult {
    pub outcome: Outcome,
    pub trump: Option<Card>,
    pub player_cards_left: usize,
    pub computer_cards_left: usize,
    pub stats: FlowStats,
}

pub struct Simulator {
    config: GameConfig,
    max_ticks: u64,
    check_conservation: bool,
}

impl Simulator {
    pub fn new(config: GameConfig, max_ticks: u64) -> Self {
        Self {
            config,
            max_ticks,
            check_conservation: false,
        }
    }

    /// Verify card conservation after every tick.
    pub fn with_conservation_checks(mut self, enabled: bool) -> Self {
        self.check_conservation = enabled;
        self
    }

    pub fn simulate_game(&self, player: &dyn AiPlayer) -> Result<GameResult, SimulatorError> {
        let mut flow = GameFlow::new(self.config.clone()).map_err(SimulatorError::Config)?;

        while !flow.is_over() {
            if flow.stats().ticks >= self.max_ticks {
                return Err(SimulatorError::Stalled(flow.stats().ticks));
            }
            let input = flow
                .player_choice(player)
                .map_err(|e| SimulatorError::AiError(player.name(), e))?;
            if let TickOutcome::Rejected(err) = flow.tick(input) {
                return Err(SimulatorError::Rejected(err));
            }
            if self.check_conservation {
                flow.check_conservation()
                    .map_err(SimulatorError::Conservation)?;
            }
        }

        debug!(outcome = ?flow.outcome(), ticks = flow.stats().ticks, "simulated game finished");
        Ok(GameResult {
            outcome: flow.outcome(),
            trump: flow.trump(),
            player_cards_left: flow.player_hand().len(),
            computer_cards_left: flow.computer_hand().len(),
            stats: flow.stats().clone(),
        })
    }
}

/// Errors that can occur during simulation.
#[derive(Debug)]
pub enum SimulatorError {
    /// Game configuration was refused
    Config(ConfigError),
    /// Player-seat AI returned an error
    AiError(&'static str, AiError),
    /// Engine refused a selection the player-seat AI produced
    Rejected(DomainError),
    /// Card conservation check failed
    Conservation(DomainError),
    /// No GameOver within the tick limit
    Stalled(u64),
}

impl std::fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulatorError::Config(err) => write!(f, "Config error: {err}"),
            SimulatorError::AiError(name, err) => write!(f, "AI error ({name}): {err}"),
            SimulatorError::Rejected(err) => write!(f, "Selection rejected: {err}"),
            SimulatorError::Conservation(err) => write!(f, "Conservation failed: {err}"),
            SimulatorError::Stalled(ticks) => write!(f, "Game stalled after {ticks} ticks"),
        }
    }
}

impl std::error::Error for SimulatorError {}
