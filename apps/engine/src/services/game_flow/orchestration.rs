use serde::Serialize;
use tracing::{debug, error, info};

use super::Selection;
use crate::ai::{create_ai, AiFailureMode, AiPlayer};
use crate::config::{ConfigError, GameConfig};
use crate::domain::outcome::{is_over, winner};
use crate::domain::{Card, Deal, Deck, Outcome, Phase, RenderView, SeatView, Side, Table};
use crate::errors::domain::DomainError;

/// Counters kept across a game, reported by the simulator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlowStats {
    pub ticks: u64,
    pub transitions: u64,
    pub rejections: u64,
    pub attacks: u32,
    pub defenses: u32,
    /// Exchanges ended by "end move" or a computer pass.
    pub discards: u32,
    pub player_takes: u32,
    pub computer_takes: u32,
    pub ai_fallbacks: u32,
}

/// Result of one `tick`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to do: waiting for input, or the game is over.
    Idle,
    /// The selection was refused; state is unchanged.
    Rejected(DomainError),
    Transitioned { from: Phase, to: Phase },
}

/// One game between the player and the computer.
pub struct GameFlow {
    pub(super) config: GameConfig,
    pub(super) phase: Phase,
    pub(super) deck: Deck,
    pub(super) trump: Option<Card>,
    pub(super) player_hand: Vec<Card>,
    pub(super) computer_hand: Vec<Card>,
    pub(super) table: Table,
    pub(super) discard: Vec<Card>,
    pub(super) computer: Box<dyn AiPlayer>,
    pub(super) failure_mode: AiFailureMode,
    pub(super) outcome: Outcome,
    pub(super) stats: FlowStats,
}

impl GameFlow {
    /// A fresh game in `StartGame`, with the computer AI taken from the registry.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let computer = create_ai(&config.ai, &config.ai_config())
            .ok_or_else(|| ConfigError::UnknownAi(config.ai.clone()))?;
        Ok(Self::with_computer(config, computer))
    }

    fn with_computer(config: GameConfig, computer: Box<dyn AiPlayer>) -> Self {
        Self {
            config,
            phase: Phase::StartGame,
            deck: Deck::default(),
            trump: None,
            player_hand: Vec::new(),
            computer_hand: Vec::new(),
            table: Table::new(),
            discard: Vec::new(),
            computer,
            failure_mode: AiFailureMode::FallbackHeuristic,
            outcome: Outcome::InProgress,
            stats: FlowStats::default(),
        }
    }

    /// A game already dealt from `deal`, waiting for the player's first attack.
    pub fn with_deal(
        config: GameConfig,
        deal: Deal,
        computer: Box<dyn AiPlayer>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut flow = Self::with_computer(config, computer);
        flow.install_deal(deal);
        flow.enter(Phase::PlayerAttack);
        Ok(flow)
    }

    pub fn set_failure_mode(&mut self, mode: AiFailureMode) {
        self.failure_mode = mode;
    }

    /// Advance by at most one transition.
    ///
    /// `input` is only read in the player phases; computer phases ask the AI
    /// and ignore it.
    pub fn tick(&mut self, input: Option<Selection>) -> TickOutcome {
        self.stats.ticks += 1;
        let from = self.phase;
        let step = match from {
            Phase::StartGame => self.start_game().map(Some),
            Phase::PlayerAttack => input.map(|s| self.player_attack(s)).transpose(),
            Phase::PlayerDefend => input.map(|s| self.player_defend(s)).transpose(),
            Phase::ComputerAttack => self.computer_attack().map(Some),
            Phase::ComputerDefend => self.computer_defend().map(Some),
            Phase::GameOver => Ok(None),
        };

        match step {
            Ok(None) => TickOutcome::Idle,
            Ok(Some(next)) => {
                let to = self.enter(next);
                self.stats.transitions += 1;
                debug!(?from, ?to, "phase transition");
                TickOutcome::Transitioned { from, to }
            }
            Err(err) => {
                self.stats.rejections += 1;
                match &err {
                    DomainError::Validation(..) => {
                        debug!(phase = ?from, error = %err, "selection rejected");
                    }
                    DomainError::Invariant(_) => {
                        error!(phase = ?from, error = %err, "engine invariant broken");
                    }
                }
                TickOutcome::Rejected(err)
            }
        }
    }

    /// Move to `next`, diverting to `GameOver` when an attack phase starts
    /// with an exhausted deck and an empty hand.
    pub(super) fn enter(&mut self, next: Phase) -> Phase {
        let next = if next.is_attack()
            && self.deck.is_empty()
            && is_over(&self.player_hand, &self.computer_hand)
        {
            self.outcome = winner(&self.player_hand, &self.computer_hand);
            info!(outcome = ?self.outcome, ticks = self.stats.ticks, "game over");
            Phase::GameOver
        } else {
            next
        };
        self.phase = next;
        next
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn trump(&self) -> Option<Card> {
        self.trump
    }

    pub fn player_hand(&self) -> &[Card] {
        &self.player_hand
    }

    pub fn computer_hand(&self) -> &[Card] {
        &self.computer_hand
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    pub fn stats(&self) -> &FlowStats {
        &self.stats
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn computer_name(&self) -> &'static str {
        self.computer.name()
    }

    /// What `side` can see, or `None` before the deal.
    pub fn seat_view(&self, side: Side) -> Option<SeatView<'_>> {
        let trump = self.trump?;
        Some(SeatView {
            hand: self.hand(side),
            table: &self.table,
            trump,
            deck_remaining: self.deck.remaining(),
            opponent_hand_size: self.hand(side.opponent()).len(),
        })
    }

    /// Read-only render feed for the current frame.
    pub fn view(&self) -> RenderView {
        RenderView {
            phase: self.phase,
            player_hand: RenderView::hand_views(&self.player_hand, true),
            computer_hand: RenderView::hand_views(&self.computer_hand, false),
            table: RenderView::slot_views(&self.table),
            trump: self.trump,
            deck_remaining: self.deck.remaining(),
            discard_size: self.discard.len(),
            outcome: self.outcome,
        }
    }
}
