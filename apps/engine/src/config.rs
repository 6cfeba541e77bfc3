//! Game configuration: defaults, JSON and environment overrides.

use std::env;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::ai::{registry, AiConfig, Heuristic};
use crate::domain::rules::{deck_size, hand_size_fits, HAND_SIZE};
use crate::domain::{derive_ai_seed, Side};

/// Upper bound for the default AI worker count.
pub const MAX_DEFAULT_CONCURRENCY: usize = 4;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: '{value}'")]
    InvalidVar { name: &'static str, value: String },
    #[error("unknown AI '{0}'")]
    UnknownAi(String),
    #[error("hand size {hand_size} cannot be dealt from a {deck_size}-card deck")]
    HandSizeTooLarge { hand_size: usize, deck_size: usize },
    #[error("AI concurrency must be at least 1")]
    ZeroConcurrency,
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything needed to start one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Shuffle seed; `None` draws one from the OS at StartGame.
    pub seed: Option<u64>,
    pub include_jokers: bool,
    pub hand_size: usize,
    /// Registered name of the computer's AI.
    pub ai: String,
    pub ai_concurrency: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            include_jokers: true,
            hand_size: HAND_SIZE,
            ai: Heuristic::NAME.to_string(),
            ai_concurrency: default_concurrency(),
        }
    }
}

/// Available cores, capped at [`MAX_DEFAULT_CONCURRENCY`].
pub fn default_concurrency() -> usize {
    num_cpus::get().clamp(1, MAX_DEFAULT_CONCURRENCY)
}

impl GameConfig {
    /// Parse from optional JSON; missing fields take their defaults.
    pub fn from_json(value: Option<&JsonValue>) -> Result<Self, ConfigError> {
        let config = match value {
            Some(json) => serde_json::from_value(json.clone())?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `DURAK_SEED`, `DURAK_INCLUDE_JOKERS`, `DURAK_AI`
    /// and `DURAK_AI_CONCURRENCY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup("DURAK_SEED") {
            config.seed = Some(parse_var("DURAK_SEED", &raw)?);
        }
        if let Some(raw) = lookup("DURAK_INCLUDE_JOKERS") {
            config.include_jokers = parse_bool("DURAK_INCLUDE_JOKERS", &raw)?;
        }
        if let Some(raw) = lookup("DURAK_AI") {
            config.ai = raw;
        }
        if let Some(raw) = lookup("DURAK_AI_CONCURRENCY") {
            config.ai_concurrency = parse_var("DURAK_AI_CONCURRENCY", &raw)?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !hand_size_fits(self.hand_size, self.include_jokers) {
            return Err(ConfigError::HandSizeTooLarge {
                hand_size: self.hand_size,
                deck_size: deck_size(self.include_jokers),
            });
        }
        if self.ai_concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        if registry::by_name(&self.ai).is_none() {
            return Err(ConfigError::UnknownAi(self.ai.clone()));
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Settings for the computer seat; its seed is derived from the game seed.
    pub fn ai_config(&self) -> AiConfig {
        let mut config = AiConfig::empty().with_concurrency(self.ai_concurrency);
        config.seed = self.seed.map(|seed| derive_ai_seed(seed, Side::Computer));
        config
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidVar {
        name,
        value: raw.to_string(),
    })
}

fn parse_bool(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidVar {
            name,
            value: raw.to_string(),
        }),
    }
}
