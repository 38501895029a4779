//! Player versus bot
//!
//! Both sides chase the same secret word and take turns. Every revealed
//! guess, the player's included, is folded into the bot's knowledge.

use super::play::player_turn;
use crate::core::{Game, Word};
use crate::output::formatters::colored_guess;
use crate::solver::Session;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Who solved the word first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Player,
    Bot,
    Draw,
}

/// Play one versus round on stdin and stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_versus<G: Rng + ?Sized>(
    session: &mut Session<'_>,
    target: Word,
    rng: &mut G,
) -> io::Result<Winner> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_versus_with(session, target, &mut stdin.lock(), &mut stdout.lock(), rng)
}

/// Play one versus round on any line-based input and output
///
/// The bot keeps its own turn counter, so the player's guesses add knowledge
/// without moving the bot past its opening move.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_versus_with<R: BufRead, W: Write, G: Rng + ?Sized>(
    session: &mut Session<'_>,
    target: Word,
    input: &mut R,
    out: &mut W,
    rng: &mut G,
) -> io::Result<Winner> {
    let max_attempts = session.config().max_attempts_versus;
    let corpus = session.corpus();
    let mut player = Game::new(target.clone(), max_attempts);
    let mut bot = Game::new(target, max_attempts);
    session.reset_knowledge();

    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "PLAYER vs BOT".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        "\nSame secret word, {max_attempts} attempts each. The bot sees your feedback too!"
    )?;
    writeln!(out, "Type 'quit' to give up.\n")?;

    let winner = loop {
        if !player.is_over() {
            let Some((guess, feedback)) = player_turn(&mut player, corpus, input, out)? else {
                writeln!(out, "\n🏳️  You gave up.")?;
                break Winner::Bot;
            };
            session.update_knowledge(&guess, &feedback);
            shared_knowledge_hint(session, out)?;

            if player.is_won() {
                break Winner::Player;
            }
        }

        if !bot.is_over() {
            let turn = session.play_turn(&mut bot, rng).map_err(io::Error::other)?;
            if let Some(turn) = turn {
                writeln!(
                    out,
                    "🤖 Bot    {}/{}: {} {}",
                    bot.attempts_used(),
                    max_attempts,
                    colored_guess(&turn.selection.word, &turn.feedback),
                    turn.feedback.to_emoji()
                )?;
            } else {
                writeln!(out, "🤖 Bot has nothing to guess.")?;
                break Winner::Draw;
            }

            if bot.is_won() {
                break Winner::Bot;
            }
        }

        if player.is_over() && bot.is_over() {
            break Winner::Draw;
        }
    };

    let word = player.target().text().to_uppercase();
    match winner {
        Winner::Player => writeln!(out, "\n{}", "🎉 YOU WIN!".bright_green().bold())?,
        Winner::Bot => writeln!(out, "\n{}", "🤖 BOT WINS!".bright_red().bold())?,
        Winner::Draw => writeln!(out, "\n{}", "🤝 DRAW!".bright_yellow().bold())?,
    }
    writeln!(out, "The word was: {}\n", word.bold())?;

    Ok(winner)
}

fn shared_knowledge_hint<W: Write>(session: &Session<'_>, out: &mut W) -> io::Result<()> {
    let knowledge = session.knowledge();
    let correct = knowledge.known_correct().iter().flatten().count();
    let present = knowledge.known_present().len();
    let absent = knowledge.known_absent().len();
    if correct + present + absent == 0 {
        return Ok(());
    }

    writeln!(
        out,
        "   {} {correct} correct position(s), {present} present letter(s), {absent} eliminated letter(s)",
        "Shared knowledge:".bright_black()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::corpus::Corpus;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn play(session: &mut Session<'_>, target: &str, script: &str) -> (Winner, String) {
        let mut input = script.as_bytes();
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(17);
        let winner =
            run_versus_with(session, Word::new(target).unwrap(), &mut input, &mut out, &mut rng)
                .unwrap();
        (winner, String::from_utf8(out).unwrap())
    }

    #[test]
    fn player_solving_first_wins() {
        let corpus = Corpus::embedded();
        let mut session = Session::new(&corpus, EngineConfig::default());

        let (winner, output) = play(&mut session, "angle", "angle\n");
        assert_eq!(winner, Winner::Player);
        assert!(output.contains("YOU WIN"));
        assert!(output.contains("ANGLE"));
    }

    #[test]
    fn invalid_guesses_are_retried() {
        let corpus = Corpus::embedded();
        let mut session = Session::new(&corpus, EngineConfig::default());

        let (winner, output) = play(&mut session, "angle", "zzzzz\nabcd\nangle\n");
        assert_eq!(winner, Winner::Player);
        assert!(output.contains("not in the word list"));
        assert!(output.contains("exactly 5 letters"));
    }

    #[test]
    fn player_feedback_reaches_bot() {
        let corpus = Corpus::embedded();
        let mut session = Session::new(&corpus, EngineConfig::default());

        let (winner, output) = play(&mut session, "angle", "apple\nquit\n");
        assert_eq!(winner, Winner::Bot);
        assert!(output.contains("Shared knowledge"));
        assert_eq!(session.knowledge().known_correct()[0], Some(b'a'));
        assert_eq!(session.knowledge().known_correct()[4], Some(b'e'));
    }

    #[test]
    fn single_attempt_each_ends_in_draw() {
        let corpus = Corpus::embedded();
        let config = EngineConfig {
            max_attempts_versus: 1,
            ..EngineConfig::default()
        };
        let mut session = Session::new(&corpus, config);

        // YOUTH is not an opening word, so both sides miss
        let (winner, output) = play(&mut session, "youth", "world\n");
        assert_eq!(winner, Winner::Draw);
        assert!(output.contains("DRAW"));
    }

    #[test]
    fn versus_does_not_touch_learning() {
        let corpus = Corpus::embedded();
        let mut session = Session::new(&corpus, EngineConfig::default());
        let before = session.weights().clone();

        play(&mut session, "angle", "world\nangle\n");
        assert_eq!(session.stats().games_played, 0);
        assert_eq!(session.weights(), &before);
    }
}
