//! Candidate score inspection
//!
//! Replays `guess=pattern` observations and shows how the heuristic ranks the
//! words that are still possible.

use crate::core::{Feedback, Word, WordError};
use crate::solver::Session;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObservationError {
    #[error("expected 'guess=pattern', got '{0}'")]
    Malformed(String),
    #[error("invalid guess in '{0}': {1}")]
    Word(String, WordError),
    #[error("invalid pattern in '{0}', use G/Y/- or emoji squares")]
    Pattern(String),
}

/// Ranked candidates after a series of observations
#[derive(Debug, Clone)]
pub struct ScoresReport {
    pub observations: Vec<(Word, Feedback)>,
    pub total_candidates: usize,
    pub top: Vec<(String, f64)>,
}

/// Parse `crane=GY---` style observations
///
/// # Errors
///
/// Returns `ObservationError` naming the offending input.
pub fn parse_observation(text: &str) -> Result<(Word, Feedback), ObservationError> {
    let (guess, pattern) = text
        .split_once('=')
        .ok_or_else(|| ObservationError::Malformed(text.to_string()))?;
    let word =
        Word::new(guess.trim()).map_err(|e| ObservationError::Word(text.to_string(), e))?;
    let feedback = Feedback::parse(pattern.trim())
        .ok_or_else(|| ObservationError::Pattern(text.to_string()))?;
    Ok((word, feedback))
}

/// Apply observations to a fresh game and score what remains
///
/// # Errors
///
/// Returns the first `ObservationError` encountered; nothing is applied then.
pub fn score_observations(
    session: &mut Session<'_>,
    observations: &[String],
    top_n: usize,
) -> Result<ScoresReport, ObservationError> {
    let parsed = observations
        .iter()
        .map(|o| parse_observation(o))
        .collect::<Result<Vec<_>, _>>()?;

    session.reset_knowledge();
    for (word, feedback) in &parsed {
        session.update_knowledge(word, feedback);
    }

    let top = session
        .candidate_scores(top_n)
        .into_iter()
        .map(|c| (c.word.text().to_string(), c.score))
        .collect();

    Ok(ScoresReport {
        observations: parsed,
        total_candidates: session.available_candidates().len(),
        top,
    })
}
