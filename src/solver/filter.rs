//! Candidate filtering
//!
//! Recomputes the full candidate set from the corpus on every call; there is
//! no incremental state to keep in sync.

use super::knowledge::KnowledgeState;
use crate::core::{Classification, Word};

/// How Present-but-misplaced letters restrict positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Exclusion {
    /// Only the most recent guess's misplaced positions are ruled out
    #[default]
    LastGuess,
    /// Every misplaced position seen during the game is ruled out
    Cumulative,
}

impl Exclusion {
    #[must_use]
    pub const fn from_cumulative(cumulative: bool) -> Self {
        if cumulative {
            Self::Cumulative
        } else {
            Self::LastGuess
        }
    }
}

/// Check whether `word` is consistent with every constraint in `state`
///
/// A word survives when:
/// 1. it has each known-correct letter at its position
/// 2. it contains every known-present letter
/// 3. it contains no known-absent letter
/// 4. it does not repeat a letter at the slot where the last guess saw it Present
/// 5. with [`Exclusion::Cumulative`], the same holds for every earlier guess too
#[must_use]
pub fn is_candidate(word: &Word, state: &KnowledgeState, exclusion: Exclusion) -> bool {
    let chars = word.chars();

    let correct_ok = state
        .known_correct()
        .iter()
        .zip(chars)
        .all(|(slot, &ch)| slot.is_none_or(|letter| letter == ch));
    if !correct_ok {
        return false;
    }

    let letters = word.letters();
    if !state.known_present().difference(letters).is_empty() {
        return false;
    }
    if !state.known_absent().is_disjoint(letters) {
        return false;
    }

    if let Some((last_guess, last_feedback)) = state.last() {
        let repeats_misplaced = last_guess
            .chars()
            .iter()
            .zip(last_feedback.classes())
            .zip(chars)
            .any(|((&g, &class), &ch)| class == Classification::Present && ch == g);
        if repeats_misplaced {
            return false;
        }
    }

    if exclusion == Exclusion::Cumulative {
        return chars
            .iter()
            .enumerate()
            .all(|(i, &ch)| state.excluded_positions(ch) & (1 << i) == 0);
    }

    true
}

/// Corpus words consistent with `state`, in corpus order
///
/// May be empty when the feedback contradicts itself or the target is not in
/// the corpus.
#[must_use]
pub fn filter_candidates<'a>(
    state: &KnowledgeState,
    words: &'a [Word],
    exclusion: Exclusion,
) -> Vec<&'a Word> {
    words
        .iter()
        .filter(|word| is_candidate(word, state, exclusion))
        .collect()
}
