//! Single game referee
//!
//! Holds the secret target, validates and evaluates submitted guesses, and
//! tracks attempts. Validation lives here rather than in the solver: the
//! solver assumes every word it sees is well-formed.

use super::{Feedback, Word, WordError};
use crate::corpus::Corpus;
use thiserror::Error;

/// Errors raised when submitting a guess
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{0}")]
    InvalidWord(#[from] WordError),
    #[error("'{0}' is not in the word list")]
    NotInCorpus(String),
    #[error("the game is already over")]
    GameOver,
}

/// Final state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// A revealed guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
}

/// One game against a fixed target
#[derive(Debug, Clone)]
pub struct Game {
    target: Word,
    max_attempts: usize,
    turns: Vec<Turn>,
    outcome: Outcome,
}

impl Game {
    #[must_use]
    pub const fn new(target: Word, max_attempts: usize) -> Self {
        Self {
            target,
            max_attempts,
            turns: Vec::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// Parse, check against the corpus, then submit a guess
    ///
    /// # Errors
    /// Returns `GameError` if the text is not a valid word, is not in the
    /// corpus, or the game is already over.
    pub fn submit_text(&mut self, text: &str, corpus: &Corpus) -> Result<Feedback, GameError> {
        let word = Word::new(text)?;
        if !corpus.contains(&word) {
            return Err(GameError::NotInCorpus(word.text().to_string()));
        }
        self.submit(word)
    }

    /// Submit an already-validated guess
    ///
    /// # Errors
    /// Returns `GameError::GameOver` if the game has already finished.
    pub fn submit(&mut self, guess: Word) -> Result<Feedback, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let feedback = Feedback::evaluate(&guess, &self.target);
        self.turns.push(Turn { guess, feedback });

        if feedback.is_solved() {
            self.outcome = Outcome::Won;
        } else if self.turns.len() >= self.max_attempts {
            self.outcome = Outcome::Lost;
        }

        Ok(feedback)
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Guessed words in order
    #[must_use]
    pub fn guesses(&self) -> Vec<Word> {
        self.turns.iter().map(|t| t.guess.clone()).collect()
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.max_attempts.saturating_sub(self.turns.len())
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.outcome == Outcome::Won
    }
}
