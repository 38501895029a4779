//! Solo game for a human player
//!
//! The player guesses a random corpus word on their own. The bot only referees
//! and nothing is learned.

use crate::core::{Feedback, Game, Outcome, Word};
use crate::corpus::Corpus;
use crate::output::formatters::{colored_guess, performance_label};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Play one solo game on stdin and stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play(corpus: &Corpus, target: Word, max_attempts: usize) -> io::Result<Outcome> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_play_with(corpus, target, max_attempts, &mut stdin.lock(), &mut stdout.lock())
}

/// Play one solo game on any line-based input and output
///
/// Returns `Outcome::InProgress` when the player quits early.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play_with<R: BufRead, W: Write>(
    corpus: &Corpus,
    target: Word,
    max_attempts: usize,
    input: &mut R,
    out: &mut W,
) -> io::Result<Outcome> {
    let mut game = Game::new(target, max_attempts);

    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "SOLO GAME".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(out, "\nGuess the five-letter word in {max_attempts} attempts.")?;
    writeln!(out, "Type 'quit' to give up.\n")?;

    while !game.is_over() {
        if player_turn(&mut game, corpus, input, out)?.is_none() {
            writeln!(out, "\n🏳️  You gave up.")?;
            break;
        }
    }

    let word = game.target().text().to_uppercase();
    if game.is_won() {
        let (headline, remark) = performance_label(game.attempts_used());
        writeln!(out, "\n  {}", headline.bright_yellow().bold())?;
        writeln!(out, "  {}", remark.bright_white())?;
    } else {
        writeln!(out, "\n{}", "❌ Out of luck!".red().bold())?;
    }
    writeln!(out, "The word was: {}\n", word.bold())?;

    Ok(game.outcome())
}

/// Read guesses until one is accepted; `None` when the player quits
pub(crate) fn player_turn<R: BufRead, W: Write>(
    game: &mut Game,
    corpus: &Corpus,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<(Word, Feedback)>> {
    loop {
        write!(out, "Your guess ({} left): ", game.attempts_left())?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim().to_lowercase();
        if matches!(line.as_str(), "quit" | "q" | "exit") {
            return Ok(None);
        }

        match game.submit_text(&line, corpus) {
            Ok(feedback) => {
                let Some(turn) = game.turns().last() else {
                    continue;
                };
                writeln!(
                    out,
                    "🧑 You    {}/{}: {} {}",
                    game.attempts_used(),
                    game.max_attempts(),
                    colored_guess(&turn.guess, &feedback),
                    feedback.to_emoji()
                )?;
                return Ok(Some((turn.guess.clone(), feedback)));
            }
            Err(e) => writeln!(out, "❌ {e}")?,
        }
    }
}
