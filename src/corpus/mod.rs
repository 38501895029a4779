//! Game corpus
//!
//! The closed, ordered set of valid words and the letter statistics derived
//! from it. Immutable once built.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::{ALPHABET_SIZE, Word, letter_index};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// Frequency used for letters that never occur in the corpus
pub const UNSEEN_LETTER_FREQUENCY: f64 = 0.5;

/// Normalized letter frequencies
///
/// Each letter's raw occurrence count across the corpus divided by the
/// largest count, so the most common letter maps to 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterFrequency([f64; ALPHABET_SIZE]);

impl LetterFrequency {
    /// Count every letter occurrence (duplicates within a word included)
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        let mut counts = [0usize; ALPHABET_SIZE];
        for word in words {
            for &ch in word.chars() {
                counts[letter_index(ch)] += 1;
            }
        }

        let max = counts.iter().copied().max().unwrap_or(0);
        let mut normalized = [0.0; ALPHABET_SIZE];
        if max > 0 {
            for (slot, &count) in normalized.iter_mut().zip(&counts) {
                *slot = count as f64 / max as f64;
            }
        }
        Self(normalized)
    }

    /// Normalized frequency in (0, 1], or 0.5 when the letter never occurs
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> f64 {
        let value = self.0[letter_index(letter)];
        if value > 0.0 {
            value
        } else {
            UNSEEN_LETTER_FREQUENCY
        }
    }
}

/// Immutable ordered word list
#[derive(Debug, Clone)]
pub struct Corpus {
    words: Vec<Word>,
    index: FxHashSet<String>,
    frequency: LetterFrequency,
}

impl Corpus {
    /// Build a corpus, dropping repeated words but keeping first-seen order
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|w| index.insert(w.text().to_string()))
            .collect();
        let frequency = LetterFrequency::from_words(&words);

        Self {
            words,
            index,
            frequency,
        }
    }

    /// The corpus compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(WORDS))
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word.text())
    }

    #[must_use]
    pub fn contains_text(&self, text: &str) -> bool {
        self.index.contains(text)
    }

    #[inline]
    #[must_use]
    pub const fn letter_frequency(&self) -> &LetterFrequency {
        &self.frequency
    }

    /// Uniformly random word, or `None` for an empty corpus
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn embedded_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
        assert_eq!(Corpus::embedded().len(), WORDS_COUNT);
    }

    #[test]
    fn duplicates_are_dropped_in_order() {
        let corpus = Corpus::new(words_from_slice(&["angle", "apple", "angle"]));
        let texts: Vec<&str> = corpus.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["angle", "apple"]);
    }

    #[test]
    fn letter_frequency_is_normalized() {
        // a:3 p:2 l:3 e:3 n:2 g:1 k:1
        let corpus = Corpus::new(words_from_slice(&["apple", "angle", "ankle"]));
        let freq = corpus.letter_frequency();

        assert!((freq.get(b'a') - 1.0).abs() < f64::EPSILON);
        assert!((freq.get(b'p') - 2.0 / 3.0).abs() < 1e-12);
        assert!((freq.get(b'g') - 1.0 / 3.0).abs() < 1e-12);
        assert!((freq.get(b'z') - UNSEEN_LETTER_FREQUENCY).abs() < f64::EPSILON);
    }

    #[test]
    fn contains_checks_membership() {
        let corpus = Corpus::new(words_from_slice(&["apple", "angle"]));
        assert!(corpus.contains(&Word::new("apple").unwrap()));
        assert!(!corpus.contains(&Word::new("ankle").unwrap()));
        assert!(corpus.contains_text("angle"));
    }

    #[test]
    fn random_word_comes_from_corpus() {
        let corpus = Corpus::new(words_from_slice(&["apple", "angle", "ankle"]));
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let word = corpus.random_word(&mut rng).unwrap();
            assert!(corpus.contains(word));
        }

        let empty = Corpus::new(Vec::new());
        assert!(empty.random_word(&mut rng).is_none());
    }
}
