//! How to register your AI
//!
//! 1) Implement `AiPlayer` for your type in its module.
//! 2) Add an `AiFactory` entry below with a stable `name` and `version`.
//! 3) Keep ordering stable; constructors must not have side effects.
//! 4) Same seed, same behaviour.

use super::config::AiConfig;
use super::heuristic::Heuristic;
use super::random::RandomPlayer;
use super::trait_def::AiPlayer;

/// Factory definition for constructing AI implementations.
pub struct AiFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(config: &AiConfig) -> Box<dyn AiPlayer>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        name: Heuristic::NAME,
        version: Heuristic::VERSION,
        make: make_heuristic,
    },
    AiFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
];

pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    registered_ais().iter().find(|factory| factory.name == name)
}

fn make_heuristic(config: &AiConfig) -> Box<dyn AiPlayer> {
    Box::new(Heuristic::new(config.concurrency()))
}

fn make_random_player(config: &AiConfig) -> Box<dyn AiPlayer> {
    Box::new(RandomPlayer::new(config.seed()))
}
