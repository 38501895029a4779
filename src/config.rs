//! Engine configuration
//!
//! All tunables of the bot in one serde-friendly struct. Missing fields in a
//! config file fall back to the defaults below.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Tunables for guess selection, learning and game rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Turn-zero guesses, picked uniformly
    pub opening_words: Vec<String>,
    /// How many top-scored candidates take part in weighted sampling
    pub top_k: usize,
    /// Weight multiplier for words guessed in a won game
    pub win_factor: f64,
    /// Weight multiplier for words guessed in a lost game
    pub loss_factor: f64,
    /// Optional `(min, max)` clamp applied after every reinforcement
    pub weight_bounds: Option<(f64, f64)>,
    /// Exclude every position a Present letter was ever tried at, not only
    /// the positions from the most recent guess
    pub cumulative_exclusion: bool,
    pub max_attempts_solo: usize,
    pub max_attempts_versus: usize,
    /// Number of finished games kept in the learning history
    pub history_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            opening_words: ["arose", "slate", "crane", "stare", "about"]
                .map(String::from)
                .to_vec(),
            top_k: 5,
            win_factor: 1.05,
            loss_factor: 0.95,
            weight_bounds: None,
            cumulative_exclusion: false,
            max_attempts_solo: 6,
            max_attempts_versus: 10,
            history_limit: 100,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, is not valid JSON,
    /// or fails validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    ///
    /// # Errors
    /// Returns `ConfigError` if the string is not valid JSON or fails validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` describing the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_k == 0 {
            return Err(ConfigError::Invalid("top_k must be at least 1".into()));
        }
        if self.win_factor <= 0.0 || self.loss_factor <= 0.0 {
            return Err(ConfigError::Invalid(
                "reinforcement factors must be positive".into(),
            ));
        }
        if let Some((min, max)) = self.weight_bounds
            && (min <= 0.0 || min > max)
        {
            return Err(ConfigError::Invalid(format!(
                "weight_bounds must satisfy 0 < min <= max, got ({min}, {max})"
            )));
        }
        if self.max_attempts_solo == 0 || self.max_attempts_versus == 0 {
            return Err(ConfigError::Invalid(
                "attempt limits must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
