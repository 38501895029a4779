//! Compact letter sets over the `a..=z` alphabet
//!
//! Each letter occupies one bit of a `u32`, so membership, insertion and
//! removal are single bit operations and sets are `Copy`.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Index of a lowercase ASCII letter in the alphabet (0-25)
///
/// # Panics
/// Panics in debug mode if `letter` is not in `b'a'..=b'z'`
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase(), "letter must be a-z");
    (letter - b'a') as usize
}

/// A set of lowercase ASCII letters stored as a bitmask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Build a set from the distinct letters of a byte slice
    #[must_use]
    pub fn from_letters(letters: &[u8]) -> Self {
        let mut set = Self::new();
        for &letter in letters {
            set.insert(letter);
        }
        set
    }

    /// Add a letter, returning `true` if it was not already present
    #[inline]
    pub fn insert(&mut self, letter: u8) -> bool {
        let bit = 1 << letter_index(letter);
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    /// Remove a letter, returning `true` if it was present
    #[inline]
    pub fn remove(&mut self, letter: u8) -> bool {
        let bit = 1 << letter_index(letter);
        let removed = self.0 & bit != 0;
        self.0 &= !bit;
        removed
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & (1 << letter_index(letter)) != 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Iterate letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_SIZE as u8).filter_map(move |i| (self.0 & (1 << i) != 0).then_some(b'a' + i))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, letter) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", letter as char)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_remove() {
        let mut set = LetterSet::new();
        assert!(set.insert(b'a'));
        assert!(!set.insert(b'a'));
        assert!(set.insert(b'z'));
        assert_eq!(set.len(), 2);

        assert!(set.remove(b'a'));
        assert!(!set.remove(b'a'));
        assert!(!set.contains(b'a'));
        assert!(set.contains(b'z'));
    }

    #[test]
    fn from_letters_dedupes() {
        let set = LetterSet::from_letters(b"speed");
        assert_eq!(set.len(), 4);
        assert_eq!(set.iter().collect::<Vec<_>>(), b"deps".to_vec());
    }

    #[test]
    fn set_algebra() {
        let a = LetterSet::from_letters(b"abc");
        let b = LetterSet::from_letters(b"cde");

        assert_eq!(a.union(b).len(), 5);
        assert_eq!(a.intersection(b), LetterSet::from_letters(b"c"));
        assert_eq!(a.difference(b), LetterSet::from_letters(b"ab"));
        assert!(!a.is_disjoint(b));
        assert!(a.is_disjoint(LetterSet::from_letters(b"xyz")));
    }

    #[test]
    fn display_lists_letters() {
        let set = LetterSet::from_letters(b"pa");
        assert_eq!(set.to_string(), "{a, p}");
        assert_eq!(LetterSet::EMPTY.to_string(), "{}");
    }
}
