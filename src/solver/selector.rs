//! Guess selection
//!
//! Turn zero draws from a fixed opening book. Later turns filter the corpus,
//! score what is left, and sample among the best few so repeated games do not
//! all play out the same way.

use super::filter::{Exclusion, filter_candidates};
use super::knowledge::KnowledgeState;
use super::scoring::{ScoredCandidate, rank, score_all};
use super::tracker::PerformanceWeights;
use crate::core::Word;
use crate::corpus::Corpus;
use rand::Rng;
use rand::prelude::IndexedRandom;
use tracing::{debug, warn};

/// Why a guess was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// Drawn from the opening book on the first turn
    Opening,
    /// The single word consistent with the feedback
    OnlyCandidate,
    /// Sampled from the top-scored candidates
    Weighted,
    /// No word fits the constraints; picked from the whole corpus
    Fallback,
}

/// A chosen guess
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub word: Word,
    pub kind: SelectionKind,
    /// Heuristic score, for weighted picks only
    pub score: Option<f64>,
    /// Candidates left before choosing (0 on the opening turn)
    pub candidates: usize,
}

/// Opening book plus top-K weighted sampling
#[derive(Debug, Clone)]
pub struct GuessSelector {
    openers: Vec<Word>,
    top_k: usize,
}

impl GuessSelector {
    /// Build from opening word texts; malformed entries are skipped
    #[must_use]
    pub fn new<S: AsRef<str>>(openers: &[S], top_k: usize) -> Self {
        let openers = openers
            .iter()
            .filter_map(|text| match Word::new(text.as_ref()) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!(opener = text.as_ref(), error = %e, "skipping opening word");
                    None
                }
            })
            .collect();

        Self {
            openers,
            top_k: top_k.max(1),
        }
    }

    #[must_use]
    pub fn openers(&self) -> &[Word] {
        &self.openers
    }

    #[must_use]
    pub const fn top_k(&self) -> usize {
        self.top_k
    }

    /// Pick the guess for `turn` (0-based)
    ///
    /// Returns `None` only when the corpus is empty and there is no opening
    /// word to fall back on.
    pub fn choose<R: Rng + ?Sized>(
        &self,
        turn: usize,
        state: &KnowledgeState,
        corpus: &Corpus,
        weights: &PerformanceWeights,
        exclusion: Exclusion,
        rng: &mut R,
    ) -> Option<Selection> {
        if turn == 0
            && let Some(opener) = self.openers.choose(rng)
        {
            debug!(guess = opener.text(), "opening guess");
            return Some(Selection {
                word: opener.clone(),
                kind: SelectionKind::Opening,
                score: None,
                candidates: 0,
            });
        }

        let candidates = filter_candidates(state, corpus.words(), exclusion);
        debug!(turn, candidates = candidates.len(), "candidates filtered");

        match candidates.as_slice() {
            [] => {
                let word = corpus.random_word(rng)?;
                warn!(
                    turn,
                    guess = word.text(),
                    "no word fits the feedback, guessing from the whole corpus"
                );
                Some(Selection {
                    word: word.clone(),
                    kind: SelectionKind::Fallback,
                    score: None,
                    candidates: 0,
                })
            }
            [only] => {
                debug!(guess = only.text(), "single candidate left");
                Some(Selection {
                    word: (*only).clone(),
                    kind: SelectionKind::OnlyCandidate,
                    score: None,
                    candidates: 1,
                })
            }
            _ => {
                let mut scored = score_all(&candidates, state, weights, corpus.letter_frequency());
                rank(&mut scored);
                let pick = weighted_pick(&scored, self.top_k, rng)?;
                debug!(guess = pick.word.text(), score = pick.score, "weighted guess");
                Some(Selection {
                    word: pick.word.clone(),
                    kind: SelectionKind::Weighted,
                    score: Some(pick.score),
                    candidates: candidates.len(),
                })
            }
        }
    }
}

/// Sample one of the first `top_k` entries of `ranked` with probability
/// proportional to its score
///
/// `ranked` must already be sorted best first. Falls back to the best entry
/// when the scores sum to zero or rounding leaves the draw unspent.
pub fn weighted_pick<'r, 'a, R: Rng + ?Sized>(
    ranked: &'r [ScoredCandidate<'a>],
    top_k: usize,
    rng: &mut R,
) -> Option<&'r ScoredCandidate<'a>> {
    let top = &ranked[..ranked.len().min(top_k)];
    let best = top.first()?;

    let total: f64 = top.iter().map(|c| c.score).sum();
    if total <= 0.0 {
        return Some(best);
    }

    let mut remaining = rng.random::<f64>() * total;
    for candidate in top {
        remaining -= candidate.score;
        if remaining <= 0.0 {
            return Some(candidate);
        }
    }
    Some(best)
}
