//! Deduction engine
//!
//! Per-turn flow: knowledge update, candidate filtering, scoring, then guess
//! selection. After each game the guessed words are reinforced.

pub mod filter;
pub mod knowledge;
pub mod scoring;
pub mod selector;
mod session;
pub mod tracker;

pub use filter::{Exclusion, filter_candidates, is_candidate};
pub use knowledge::KnowledgeState;
pub use scoring::{ScoredCandidate, rank, score, score_all};
pub use selector::{GuessSelector, Selection, SelectionKind, weighted_pick};
pub use session::{BotTurn, Session};
pub use tracker::{GameRecord, LearnerState, LearningStats, PerformanceWeights, Reinforcement};
