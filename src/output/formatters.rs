//! Formatting utilities for terminal output

use crate::core::{Classification, Feedback, Word};
use colored::{ColoredString, Colorize};

/// Color one letter tile by its classification
#[must_use]
pub fn letter_tile(letter: u8, class: Classification) -> ColoredString {
    let tile = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    match class {
        Classification::Correct => tile.black().on_green().bold(),
        Classification::Present => tile.black().on_yellow().bold(),
        Classification::Absent => tile.white().on_bright_black(),
    }
}

/// A guess rendered as colored tiles
#[must_use]
pub fn colored_guess(word: &Word, feedback: &Feedback) -> String {
    word.chars()
        .iter()
        .zip(feedback.classes())
        .map(|(&letter, &class)| letter_tile(letter, class).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Headline and remark for a game solved in `guesses` tries
#[must_use]
pub const fn performance_label(guesses: usize) -> (&'static str, &'static str) {
    match guesses {
        1 => ("🏆 Perfect!", "Incredible hole-in-one!"),
        2 => ("⭐ Excellent!", "Outstanding performance!"),
        3 => ("💫 Great!", "Very well played!"),
        4 => ("✨ Good!", "Nice work!"),
        5 => ("👍 Solved!", "Got it!"),
        _ => ("✓ Complete!", "Success!"),
    }
}

/// `guess` or `guesses`
#[must_use]
pub const fn plural_guesses(n: usize) -> &'static str {
    if n == 1 { "guess" } else { "guesses" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored_guess_keeps_letters_in_order() {
        let word = Word::new("apple").unwrap();
        let feedback = Feedback::evaluate(&word, &Word::new("angle").unwrap());
        let rendered = colored_guess(&word, &feedback);

        let letters: String = rendered.chars().filter(char::is_ascii_uppercase).collect();
        assert_eq!(letters, "APPLE");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn labels_for_guess_counts() {
        assert_eq!(performance_label(1).0, "🏆 Perfect!");
        assert_eq!(performance_label(9).0, "✓ Complete!");
        assert_eq!(plural_guesses(1), "guess");
        assert_eq!(plural_guesses(3), "guesses");
    }
}
