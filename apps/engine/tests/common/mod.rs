#![allow(dead_code)]

// tests/common/mod.rs
use std::collections::VecDeque;

use durak_engine::ai::Heuristic;
use durak_engine::domain::{try_parse_cards, Card, Deal, Deck, SeatView};
use durak_engine::{AiError, AiPlayer, GameConfig, GameFlow};
use parking_lot::Mutex;

pub mod proptest_prelude;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    engine_test_support::logging::init();
}

pub fn card(token: &str) -> Card {
    token.parse().expect("valid card token")
}

pub fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("valid card tokens")
}

pub fn test_config() -> GameConfig {
    GameConfig {
        seed: Some(20240601),
        ai_concurrency: 1,
        ..GameConfig::default()
    }
}

/// A game dealt from explicit hands; the rest of the deck is shuffled into the pile.
pub fn arranged_flow(
    player: &[&str],
    computer: &[&str],
    trump: &str,
    ai: Box<dyn AiPlayer>,
) -> GameFlow {
    let config = test_config();
    let deal = Deal::arranged(
        cards(player),
        cards(computer),
        card(trump),
        config.include_jokers,
        7,
    )
    .expect("valid arranged deal");
    GameFlow::with_deal(config, deal, ai).expect("valid test config")
}

/// A game with an already exhausted draw pile. Conservation does not hold here.
pub fn endgame_flow(
    player: &[&str],
    computer: &[&str],
    trump: &str,
    ai: Box<dyn AiPlayer>,
) -> GameFlow {
    let deal = Deal {
        player: cards(player),
        computer: cards(computer),
        trump: card(trump),
        deck: Deck::default(),
    };
    GameFlow::with_deal(test_config(), deal, ai).expect("valid test config")
}

pub fn heuristic() -> Box<dyn AiPlayer> {
    Box::new(Heuristic::new(1))
}

/// AI that replays queued answers, then falls silent.
pub struct ScriptedAi {
    attacks: Mutex<VecDeque<Result<Option<usize>, AiError>>>,
    defenses: Mutex<VecDeque<Result<Option<usize>, AiError>>>,
}

impl ScriptedAi {
    pub fn new(
        attacks: Vec<Result<Option<usize>, AiError>>,
        defenses: Vec<Result<Option<usize>, AiError>>,
    ) -> Self {
        Self {
            attacks: Mutex::new(attacks.into()),
            defenses: Mutex::new(defenses.into()),
        }
    }
}

impl AiPlayer for ScriptedAi {
    fn name(&self) -> &'static str {
        "Scripted"
    }

    fn choose_attack(&self, _view: &SeatView<'_>) -> Result<Option<usize>, AiError> {
        self.attacks.lock().pop_front().unwrap_or(Ok(None))
    }

    fn choose_defense(&self, _view: &SeatView<'_>) -> Result<Option<usize>, AiError> {
        self.defenses.lock().pop_front().unwrap_or(Ok(None))
    }
}
