//! Accumulated constraints for the current game
//!
//! Every evaluated guess is folded into position and letter facts that the
//! candidate filter and the scoring heuristic read back.

use crate::core::{ALPHABET_SIZE, Classification, Feedback, LetterSet, WORD_LEN, Word, letter_index};
use tracing::debug;

/// Constraints learned so far in one game
///
/// Invariants, held after every [`KnowledgeState::update`]:
/// - letters fixed in `known_correct` are never in `known_absent`
/// - `known_present` and `known_absent` are disjoint
/// - a letter leaves `known_present` when it is fixed at a position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeState {
    known_correct: [Option<u8>; WORD_LEN],
    known_present: LetterSet,
    known_absent: LetterSet,
    last: Option<(Word, Feedback)>,
    /// Per-letter bitmask of positions where the letter was seen as Present
    excluded_positions: [u8; ALPHABET_SIZE],
}

impl KnowledgeState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything; used at the start of each game
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fold one guess and its feedback into the constraints
    ///
    /// Correct and Present verdicts are applied before any Absent verdict,
    /// so a repeated letter that is Absent at one slot but Correct or Present
    /// at another is never excluded from the whole word.
    pub fn update(&mut self, guess: &Word, feedback: &Feedback) {
        for (i, (&letter, &class)) in guess.chars().iter().zip(feedback.classes()).enumerate() {
            match class {
                Classification::Correct => {
                    self.known_correct[i] = Some(letter);
                    self.known_present.remove(letter);
                    self.known_absent.remove(letter);
                }
                Classification::Present => {
                    self.known_present.insert(letter);
                    self.known_absent.remove(letter);
                    self.excluded_positions[letter_index(letter)] |= 1 << i;
                }
                Classification::Absent => {}
            }
        }

        let correct = self.correct_letters();
        for (&letter, &class) in guess.chars().iter().zip(feedback.classes()) {
            if class == Classification::Absent
                && !self.known_present.contains(letter)
                && !correct.contains(letter)
            {
                self.known_absent.insert(letter);
            }
        }

        self.last = Some((guess.clone(), *feedback));

        debug!(
            guess = guess.text(),
            feedback = %feedback,
            correct = %self.pattern(),
            present = %self.known_present,
            absent = %self.known_absent,
            "knowledge updated"
        );
    }

    /// Letter fixed at each position, if known
    #[must_use]
    pub const fn known_correct(&self) -> &[Option<u8>; WORD_LEN] {
        &self.known_correct
    }

    #[must_use]
    pub const fn known_present(&self) -> LetterSet {
        self.known_present
    }

    #[must_use]
    pub const fn known_absent(&self) -> LetterSet {
        self.known_absent
    }

    /// The most recent guess and its feedback
    #[must_use]
    pub const fn last(&self) -> Option<&(Word, Feedback)> {
        self.last.as_ref()
    }

    /// Bitmask of positions `letter` has been seen Present at during this game
    #[must_use]
    pub const fn excluded_positions(&self, letter: u8) -> u8 {
        self.excluded_positions[letter_index(letter)]
    }

    /// Letters fixed at some position
    #[must_use]
    pub fn correct_letters(&self) -> LetterSet {
        self.known_correct.iter().flatten().copied().collect()
    }

    /// Every letter with any verdict so far
    #[must_use]
    pub fn classified_letters(&self) -> LetterSet {
        self.correct_letters()
            .union(self.known_present)
            .union(self.known_absent)
    }

    /// Check if the state carries no constraints at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.last.is_none()
    }

    /// Known positions rendered like `a__le`
    #[must_use]
    pub fn pattern(&self) -> String {
        self.known_correct
            .iter()
            .map(|slot| slot.map_or('_', char::from))
            .collect()
    }
}
