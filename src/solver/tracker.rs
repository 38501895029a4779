//! Long-run learning across games
//!
//! Per-word multiplicative weights nudged after every finished game, plus
//! aggregate statistics about the bot's play.

use crate::config::EngineConfig;
use crate::core::Word;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

/// Weight of any word that has never been reinforced
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Learned score multiplier for each word
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerformanceWeights(FxHashMap<String, f64>);

impl PerformanceWeights {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Weights for every corpus word set to 1.0
    #[must_use]
    pub fn for_words(words: &[Word]) -> Self {
        Self(
            words
                .iter()
                .map(|w| (w.text().to_string(), DEFAULT_WEIGHT))
                .collect(),
        )
    }

    /// Add 1.0 entries for words that have none, keeping learned values
    pub fn fill_missing(&mut self, words: &[Word]) {
        for word in words {
            self.0
                .entry(word.text().to_string())
                .or_insert(DEFAULT_WEIGHT);
        }
    }

    /// Current weight, 1.0 if the word was never seen
    #[inline]
    #[must_use]
    pub fn get(&self, word: &str) -> f64 {
        self.0.get(word).copied().unwrap_or(DEFAULT_WEIGHT)
    }

    pub fn set(&mut self, word: &str, weight: f64) {
        self.0.insert(word.to_string(), weight);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Words sorted by weight, highest first
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self.0.iter().map(|(w, &v)| (w.as_str(), v)).collect();
        entries.sort_by(|(wa, a), (wb, b)| b.total_cmp(a).then_with(|| wa.cmp(wb)));
        entries
    }

    fn scale(&mut self, word: &str, factor: f64, bounds: Option<(f64, f64)>) {
        let weight = self.0.entry(word.to_string()).or_insert(DEFAULT_WEIGHT);
        *weight *= factor;
        if let Some((min, max)) = bounds {
            *weight = weight.clamp(min, max);
        }
    }
}

/// Multiplicative update rule applied at game end
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reinforcement {
    pub win_factor: f64,
    pub loss_factor: f64,
    pub bounds: Option<(f64, f64)>,
}

impl Default for Reinforcement {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl Reinforcement {
    #[must_use]
    pub const fn from_config(config: &EngineConfig) -> Self {
        Self {
            win_factor: config.win_factor,
            loss_factor: config.loss_factor,
            bounds: config.weight_bounds,
        }
    }

    /// Scale the weight of every guessed word by the win or loss factor
    ///
    /// A word guessed twice in the same game is scaled twice.
    pub fn apply(&self, weights: &mut PerformanceWeights, guessed: &[Word], won: bool) {
        let factor = if won { self.win_factor } else { self.loss_factor };
        for word in guessed {
            weights.scale(word.text(), factor, self.bounds);
        }
        info!(words = guessed.len(), won, factor, "weights reinforced");
    }
}

/// Summary of one finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game: u64,
    pub guesses: usize,
    pub won: bool,
    pub timestamp_ms: u64,
}

/// Aggregate play statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningStats {
    pub games_played: u64,
    pub wins: u64,
    pub total_guesses: u64,
    pub history: VecDeque<GameRecord>,
    pub history_limit: usize,
}

impl Default for LearningStats {
    fn default() -> Self {
        Self::with_limit(EngineConfig::default().history_limit)
    }
}

impl LearningStats {
    #[must_use]
    pub fn with_limit(history_limit: usize) -> Self {
        Self {
            games_played: 0,
            wins: 0,
            total_guesses: 0,
            history: VecDeque::with_capacity(history_limit),
            history_limit,
        }
    }

    /// Count a finished game, keeping only the most recent records
    pub fn record(&mut self, guesses: usize, won: bool) {
        self.games_played += 1;
        if won {
            self.wins += 1;
        }
        self.total_guesses += guesses as u64;

        self.history.push_back(GameRecord {
            game: self.games_played,
            guesses,
            won,
            timestamp_ms: now_ms(),
        });
        self.trim_history();
    }

    /// Change the history cap, dropping the oldest records that no longer fit
    pub fn set_history_limit(&mut self, limit: usize) {
        self.history_limit = limit;
        self.trim_history();
    }

    fn trim_history(&mut self) {
        while self.history.len() > self.history_limit {
            self.history.pop_front();
        }
    }

    /// Percentage of games won, 0 before any game
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.wins as f64 / self.games_played as f64 * 100.0
        }
    }

    /// Mean guesses per game, 0 before any game
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_guesses as f64 / self.games_played as f64
        }
    }

    /// Rough learning progress in percent: two points per game, capped at 100
    #[must_use]
    pub fn learning_progress(&self) -> u8 {
        self.games_played.saturating_mul(2).min(100) as u8
    }
}

/// Everything the bot carries from one game to the next
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnerState {
    pub weights: PerformanceWeights,
    pub stats: LearningStats,
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
