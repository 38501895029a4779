//! Core domain types for the game

pub mod feedback;
pub mod game;
pub mod letters;
pub mod word;

pub use feedback::{Classification, Feedback, evaluate};
pub use game::{Game, GameError, Outcome, Turn};
pub use letters::{ALPHABET_SIZE, LetterSet, letter_index};
pub use word::{WORD_LEN, Word, WordError};
