//! Candidate scoring heuristic
//!
//! Rewards common letters, middle positions, words that did well in past games,
//! and letters nothing has been learned about yet.

use super::knowledge::KnowledgeState;
use super::tracker::PerformanceWeights;
use crate::core::{WORD_LEN, Word};
use crate::corpus::LetterFrequency;
use rayon::prelude::*;

/// Multiplier on each distinct letter's normalized frequency
const FREQUENCY_SCALE: f64 = 10.0;
/// Bonus per distinct letter with no verdict yet
const NEW_LETTER_BONUS: f64 = 5.0;
/// Peak of the triangular positional window, reached at the middle slot
const POSITION_PEAK: f64 = 3.0;
const POSITION_SCALE: f64 = 0.5;

/// A word with its heuristic score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub word: &'a Word,
    pub score: f64,
}

/// Triangular bonus summed over every slot, centered at `(WORD_LEN - 1) / 2`
fn positional_term() -> f64 {
    let center = (WORD_LEN as f64 - 1.0) / 2.0;
    (0..WORD_LEN)
        .map(|i| (POSITION_PEAK - (center - i as f64).abs()) * POSITION_SCALE)
        .sum()
}

/// Score one word against the current knowledge
///
/// `(frequency + positional) * weight + new_letters`, where repeated letters
/// count once in both the frequency and the new-letter terms.
///
/// # Examples
/// ```
/// use wordle_bot::core::Word;
/// use wordle_bot::corpus::LetterFrequency;
/// use wordle_bot::solver::{KnowledgeState, PerformanceWeights, score};
///
/// let words = vec![Word::new("apple").unwrap(), Word::new("angle").unwrap()];
/// let freq = LetterFrequency::from_words(&words);
/// let state = KnowledgeState::new();
/// let weights = PerformanceWeights::new();
///
/// // ANGLE has five distinct letters, APPLE only four
/// assert!(score(&words[1], &state, &weights, &freq) > score(&words[0], &state, &weights, &freq));
/// ```
#[must_use]
pub fn score(
    word: &Word,
    state: &KnowledgeState,
    weights: &PerformanceWeights,
    freq: &LetterFrequency,
) -> f64 {
    let letters = word.letters();

    let frequency: f64 = letters.iter().map(|l| freq.get(l) * FREQUENCY_SCALE).sum();
    let base = (frequency + positional_term()) * weights.get(word.text());

    let unseen = letters.difference(state.classified_letters()).len();
    base + NEW_LETTER_BONUS * unseen as f64
}

/// Score every candidate, preserving input order
#[must_use]
pub fn score_all<'a>(
    candidates: &[&'a Word],
    state: &KnowledgeState,
    weights: &PerformanceWeights,
    freq: &LetterFrequency,
) -> Vec<ScoredCandidate<'a>> {
    candidates
        .par_iter()
        .map(|&word| ScoredCandidate {
            word,
            score: score(word, state, weights, freq),
        })
        .collect()
}

/// Sort highest score first; equal scores keep their input order
pub fn rank(scored: &mut [ScoredCandidate<'_>]) {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
}
