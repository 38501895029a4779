//! Word solving command
//!
//! The bot plays one game against a known target and reports every step.

use crate::core::{Feedback, GameError, Word};
use crate::solver::{SelectionKind, Session};
use rand::Rng;

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: Word,
    pub feedback: Feedback,
    pub kind: SelectionKind,
    pub score: Option<f64>,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Let the bot solve `target`, then record the game for learning
///
/// # Errors
///
/// Returns `GameError::InvalidWord` if the target is not a well-formed word.
/// The target does not need to be in the corpus; the bot then usually runs
/// out of candidates and falls back to random corpus words.
pub fn solve_word<R: Rng + ?Sized>(
    session: &mut Session<'_>,
    target: &str,
    max_attempts: usize,
    rng: &mut R,
) -> Result<SolveResult, GameError> {
    let target_word = Word::new(target)?;
    let (game, turns) = session.play_game(target_word, max_attempts, rng)?;

    let guesses = turns
        .into_iter()
        .map(|turn| GuessStep {
            word: turn.selection.word,
            feedback: turn.feedback,
            kind: turn.selection.kind,
            score: turn.selection.score,
            candidates_before: turn.candidates_before,
            candidates_after: turn.candidates_after,
        })
        .collect();

    Ok(SolveResult {
        success: game.is_won(),
        guesses,
        target: game.target().text().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::corpus::Corpus;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn solve_word_records_history() {
        let corpus = Corpus::embedded();
        let mut session = Session::new(&corpus, EngineConfig::default());
        let mut rng = StdRng::seed_from_u64(1);

        let result = solve_word(&mut session, "angle", 6, &mut rng).unwrap();

        assert!(!result.guesses.is_empty());
        assert!(result.guesses.len() <= 6);
        assert_eq!(result.guesses[0].kind, SelectionKind::Opening);
        assert_eq!(result.guesses[0].candidates_before, corpus.len());
        assert_eq!(result.target, "angle");
        if result.success {
            assert!(result.guesses.last().unwrap().feedback.is_solved());
        }
        assert_eq!(session.stats().games_played, 1);
    }

    #[test]
    fn cumulative_candidates_never_grow() {
        let corpus = Corpus::embedded();
        let config = EngineConfig {
            cumulative_exclusion: true,
            ..EngineConfig::default()
        };
        let mut session = Session::new(&corpus, config);
        let mut rng = StdRng::seed_from_u64(2);

        let result = solve_word(&mut session, "speed", 10, &mut rng).unwrap();
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_respects_attempt_limit() {
        let corpus = Corpus::embedded();
        let mut session = Session::new(&corpus, EngineConfig::default());
        let mut rng = StdRng::seed_from_u64(3);

        let result = solve_word(&mut session, "youth", 2, &mut rng).unwrap();
        assert!(result.guesses.len() <= 2);
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let corpus = Corpus::embedded();
        let mut session = Session::new(&corpus, EngineConfig::default());
        let mut rng = StdRng::seed_from_u64(4);

        assert!(matches!(
            solve_word(&mut session, "toolong", 6, &mut rng),
            Err(GameError::InvalidWord(_))
        ));
        assert_eq!(session.stats().games_played, 0);
    }
}
