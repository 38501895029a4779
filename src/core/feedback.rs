//! Guess feedback calculation and representation
//!
//! Feedback is one classification per letter position of a guess:
//! - Correct: letter is in the target at this position
//! - Present: letter is in the target at another, unmatched position
//! - Absent: no unmatched copy of the letter remains in the target

use super::letters::letter_index;
use super::word::{WORD_LEN, Word};
use std::fmt;
use std::str::FromStr;

/// Verdict for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Correct,
    Present,
    Absent,
}

impl Classification {
    /// Emoji tile used by the game's share format
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single character code used for text input (`G`, `Y`, `-`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback for a whole guess, one classification per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Classification; WORD_LEN]);

impl Feedback {
    /// All positions correct
    pub const SOLVED: Self = Self([Classification::Correct; WORD_LEN]);

    #[inline]
    #[must_use]
    pub const fn new(classes: [Classification; WORD_LEN]) -> Self {
        Self(classes)
    }

    /// Evaluate `guess` against the secret `target`
    ///
    /// Implements the game's exact feedback rules, including duplicate letters.
    ///
    /// # Algorithm
    /// 1. Count the remaining copies of each letter in the target
    /// 2. First pass: mark exact matches Correct and consume their copies
    /// 3. Second pass: mark remaining letters Present while unconsumed copies
    ///    remain, otherwise Absent
    ///
    /// Correct matches must be consumed before any Present is handed out,
    /// otherwise an early duplicate could steal the copy a later exact match needs.
    ///
    /// # Examples
    /// ```
    /// use wordle_bot::core::{Classification::*, Feedback, Word};
    ///
    /// let guess = Word::new("apple").unwrap();
    /// let target = Word::new("angle").unwrap();
    ///
    /// let feedback = Feedback::evaluate(&guess, &target);
    /// assert_eq!(feedback.classes(), &[Correct, Absent, Absent, Correct, Correct]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut result = [Classification::Absent; WORD_LEN];
        let mut matched = [false; WORD_LEN];
        let mut remaining = target.char_counts();

        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                result[i] = Classification::Correct;
                matched[i] = true;
                remaining[letter_index(g)] -= 1;
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            if matched[i] {
                continue;
            }
            let count = &mut remaining[letter_index(g)];
            if *count > 0 {
                result[i] = Classification::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn classes(&self) -> &[Classification; WORD_LEN] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> Classification {
        self.0[position]
    }

    /// Check if every position is Correct
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Count positions with the given classification
    #[must_use]
    pub fn count(&self, class: Classification) -> usize {
        self.0.iter().filter(|&&c| c == class).count()
    }

    /// Parse feedback from a string like `"GY-GY"` or `"🟩🟨⬜🟩🟨"`
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for Correct
    /// - 'Y'/'y'/🟨 for Present
    /// - '-'/'_'/'.'/⬜/⬛ for Absent
    ///
    /// # Examples
    /// ```
    /// use wordle_bot::core::Feedback;
    ///
    /// let f1 = Feedback::parse("GY-GY").unwrap();
    /// let f2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// assert!(Feedback::parse("GYG").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut classes = [Classification::Absent; WORD_LEN];
        let mut chars = s.trim().chars();

        for slot in &mut classes {
            *slot = Classification::from_char(chars.next()?)?;
        }

        chars.next().is_none().then_some(Self(classes))
    }

    /// Render as emoji tiles, e.g. `"🟩⬜⬜🟩🟩"`
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for class in &self.0 {
            write!(f, "{}", class.code())?;
        }
        Ok(())
    }
}

/// Evaluate `guess` against `target`
///
/// Free-function form of [`Feedback::evaluate`].
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Feedback {
    Feedback::evaluate(guess, target)
}

#[cfg(test)]
mod tests {
    use super::Classification::{Absent, Correct, Present};
    use super::*;

    fn eval(guess: &str, target: &str) -> Feedback {
        Feedback::evaluate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn all_absent() {
        let feedback = eval("abcde", "fghij");
        assert_eq!(feedback.count(Absent), 5);
        assert!(!feedback.is_solved());
    }

    #[test]
    fn self_evaluation_is_solved() {
        for word in ["crane", "angle", "speed", "zzzzz", "aaaaa"] {
            assert_eq!(eval(word, word), Feedback::SOLVED);
        }
    }

    #[test]
    fn apple_against_angle() {
        assert_eq!(
            eval("apple", "angle").classes(),
            &[Correct, Absent, Absent, Correct, Correct]
        );
    }

    #[test]
    fn duplicate_letters_speed_epees() {
        // SPEED vs EPEES: P and both E's line up, the S moves, D is absent
        assert_eq!(
            eval("speed", "epees").classes(),
            &[Present, Correct, Correct, Correct, Absent]
        );
        // EPEES vs SPEED: only two E's exist, so the leading E finds no spare copy
        assert_eq!(
            eval("epees", "speed").classes(),
            &[Absent, Correct, Correct, Correct, Present]
        );
    }

    #[test]
    fn duplicate_letters_speed_erase() {
        // ERASE has two E's, both guessed E's are Present
        assert_eq!(
            eval("speed", "erase").classes(),
            &[Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn duplicate_letters_correct_consumes_first() {
        // ROBOT vs FLOOR: second O is exact, first O takes the remaining copy
        assert_eq!(
            eval("robot", "floor").classes(),
            &[Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn duplicate_letters_exact_match_wins_over_earlier_copy() {
        // GEESE vs CRANE: only the final E is in CRANE, and it is exact
        assert_eq!(
            eval("geese", "crane").classes(),
            &[Absent, Absent, Absent, Absent, Correct]
        );
    }

    #[test]
    fn duplicate_letters_extra_copies_absent() {
        // LLAMA vs HELLO: two L's, both Present; A's absent
        assert_eq!(
            eval("llama", "hello").classes(),
            &[Present, Present, Absent, Absent, Absent]
        );
        // ALLEY vs LEVEL: the E is exact, both L's are elsewhere
        assert_eq!(
            eval("alley", "level").classes(),
            &[Absent, Present, Present, Correct, Absent]
        );
    }

    #[test]
    fn parse_valid() {
        let f1 = Feedback::parse("GY-G_").unwrap();
        let f2 = Feedback::parse("🟩🟨⬜🟩⬛").unwrap();
        let f3 = Feedback::parse("gy.g-").unwrap();

        assert_eq!(f1, f2);
        assert_eq!(f1, f3);
        assert_eq!(f1.classes(), &[Correct, Present, Absent, Correct, Absent]);
    }

    #[test]
    fn parse_invalid() {
        assert!(Feedback::parse("GYGGYX").is_none());
        assert!(Feedback::parse("GYG").is_none());
        assert!(Feedback::parse("GXGGY").is_none());
        assert!(Feedback::parse("").is_none());
        assert!("GXGGY".parse::<Feedback>().is_err());
    }

    #[test]
    fn display_and_emoji() {
        let feedback = eval("apple", "angle");
        assert_eq!(feedback.to_string(), "G--GG");
        assert_eq!(feedback.to_emoji(), "🟩⬜⬜🟩🟩");
    }
}
