//! Persistence for learned weights and statistics

use crate::solver::LearnerState;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Learner state I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Learner state is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where the learner state lives between runs
pub trait WeightStore {
    /// Load the saved state, or a fresh one if nothing was saved yet
    ///
    /// # Errors
    /// Returns `StoreError` if saved state exists but cannot be read.
    fn load(&self) -> Result<LearnerState, StoreError>;

    /// Persist the state, replacing any earlier save
    ///
    /// # Errors
    /// Returns `StoreError` if the state cannot be written.
    fn save(&self, state: &LearnerState) -> Result<(), StoreError>;
}

/// Learner state kept as a pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WeightStore for JsonFileStore {
    fn load(&self) -> Result<LearnerState, StoreError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "no saved learner state, starting fresh");
            return Ok(LearnerState::default());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let state: LearnerState = serde_json::from_str(&contents)?;
        info!(
            path = %self.path.display(),
            words = state.weights.len(),
            games = state.stats.games_played,
            "learner state loaded"
        );
        Ok(state)
    }

    /// Write to a sibling temp file, then rename over the target so a crash
    /// never leaves a half-written file behind
    fn save(&self, state: &LearnerState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(state)?;
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;

        info!(
            path = %self.path.display(),
            games = state.stats.games_played,
            "learner state saved"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{LearningStats, PerformanceWeights};

    #[test]
    fn missing_file_loads_fresh_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("learner.json"));

        let state = store.load().unwrap();
        assert_eq!(state, LearnerState::default());
    }

    #[test]
    fn save_then_load_restores_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("learner.json"));

        let mut weights = PerformanceWeights::new();
        weights.set("angle", 1.05);
        weights.set("apple", 0.95);
        let mut stats = LearningStats::default();
        stats.record(4, true);
        stats.record(6, false);
        let state = LearnerState { weights, stats };

        store.save(&state).unwrap();
        assert!(store.path().exists());
        assert!(!store.path().with_extension("json.tmp").exists());

        let loaded = store.load().unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("learner.json");
        std::fs::write(&path, "{not valid json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Json(_))));
    }

    #[test]
    fn stale_tmp_file_does_not_affect_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("learner.json"));
        store.save(&LearnerState::default()).unwrap();

        std::fs::write(store.path().with_extension("json.tmp"), b"{garbage").unwrap();
        assert!(store.load().is_ok());
    }
}
