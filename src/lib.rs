//! Wordle Bot
//!
//! A self-improving Wordle bot. Each turn it eliminates words that contradict
//! the feedback so far, scores the survivors by letter frequency, position and
//! a learned per-word weight, then samples among the best few. Finished games
//! nudge the weights of the words it guessed up or down.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_bot::{config::EngineConfig, corpus::Corpus, solver::Session};
//!
//! let corpus = Corpus::embedded();
//! let mut session = Session::new(&corpus, EngineConfig::default());
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let target = corpus.words()[0].clone();
//! let (game, turns) = session.play_game(target, 6, &mut rng).unwrap();
//! assert_eq!(turns.len(), game.attempts_used());
//! assert_eq!(session.stats().games_played, 1);
//! ```

// Core domain types
pub mod core;

// Word lists and letter statistics
pub mod corpus;

// Engine tunables
pub mod config;

// Elimination, scoring, selection and learning
pub mod solver;

// Learner persistence
pub mod store;

// Diagnostics
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
