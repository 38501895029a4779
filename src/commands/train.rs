//! Self-play training
//!
//! The bot plays random corpus targets back to back, learning after each game.

use crate::core::GameError;
use crate::solver::{SelectionKind, Session};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Summary of a training run
#[derive(Debug, Clone)]
pub struct TrainingResult {
    pub games: usize,
    pub wins: usize,
    /// Average guesses over won games
    pub average_guesses: f64,
    /// Guess count of each won game
    pub distribution: FxHashMap<usize, usize>,
    pub fallbacks: usize,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl TrainingResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64 * 100.0
        }
    }
}

/// Play `count` games against random corpus words
///
/// # Errors
///
/// Returns `GameError` if a game rejects a bot guess, which only happens
/// when the game state is inconsistent.
pub fn run_training<R: Rng + ?Sized>(
    session: &mut Session<'_>,
    count: usize,
    max_attempts: usize,
    show_progress: bool,
    rng: &mut R,
) -> Result<TrainingResult, GameError> {
    let start = Instant::now();
    let corpus = session.corpus();

    let pb = if show_progress {
        let pb = ProgressBar::new(count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut wins = 0;
    let mut won_guesses = 0;
    let mut fallbacks = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for game_index in 0..count {
        let Some(target) = corpus.random_word(rng) else {
            break;
        };
        let (game, turns) = session.play_game(target.clone(), max_attempts, rng)?;

        fallbacks += turns
            .iter()
            .filter(|t| t.selection.kind == SelectionKind::Fallback)
            .count();
        if game.is_won() {
            wins += 1;
            won_guesses += game.attempts_used();
            *distribution.entry(game.attempts_used()).or_insert(0) += 1;
        }

        if game_index % 10 == 0 {
            pb.set_message(format!(
                "Win rate: {:.1}%",
                wins as f64 / (game_index + 1) as f64 * 100.0
            ));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let games = pb.position() as usize;

    Ok(TrainingResult {
        games,
        wins,
        average_guesses: if wins > 0 {
            won_guesses as f64 / wins as f64
        } else {
            0.0
        },
        distribution,
        fallbacks,
        duration,
        games_per_second: games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
