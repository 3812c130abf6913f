//! Opponent configuration.

use crate::games::tictactoe::{Cell, DEFAULT_RANDOM_MOVE_PROBABILITY, MoveSelector};
use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Which side takes the first move in a new match.
///
/// Defaults to [`FirstPlayer::Human`], as in the hint minigame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// The human opens as X.
    #[default]
    Human,
    /// The computer opens.
    Computer,
}

impl FirstPlayer {
    /// Board mark of the opening side.
    #[instrument]
    pub fn cell(self) -> Cell {
        match self {
            Self::Human => Cell::Human,
            Self::Computer => Cell::Computer,
        }
    }
}

/// Settings for the automated opponent and the match it plays.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct OpponentConfig {
    /// Chance that the opponent plays a random legal move instead of searching.
    #[serde(default = "default_random_move_probability")]
    random_move_probability: f64,

    /// Fixed rng seed for reproducible games; fresh entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Side that opens each match.
    #[serde(default)]
    first_player: FirstPlayer,
}

#[instrument]
fn default_random_move_probability() -> f64 {
    DEFAULT_RANDOM_MOVE_PROBABILITY
}

impl Default for OpponentConfig {
    fn default() -> Self {
        Self {
            random_move_probability: default_random_move_probability(),
            seed: None,
            first_player: FirstPlayer::default(),
        }
    }
}

impl OpponentConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(
            random_move_probability = config.random_move_probability,
            seed = ?config.seed,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Checks that the probability is a number in `[0, 1]`.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.random_move_probability) {
            return Err(ConfigError::new(format!(
                "random_move_probability must be within [0, 1], got {}",
                self.random_move_probability
            )));
        }
        Ok(())
    }

    /// Overrides the fallback probability.
    pub fn with_random_move_probability(mut self, probability: f64) -> Self {
        self.random_move_probability = probability;
        self
    }

    /// Overrides the rng seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the opening side.
    pub fn with_first_player(mut self, first_player: FirstPlayer) -> Self {
        self.first_player = first_player;
        self
    }

    /// Builds the opponent described by this configuration.
    #[instrument(skip(self), fields(seed = ?self.seed))]
    pub fn build_selector(&self) -> Result<MoveSelector<StdRng>, ConfigError> {
        self.validate()?;
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(MoveSelector::new(rng).with_random_move_probability(self.random_move_probability))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
