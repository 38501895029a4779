//! Interactive assistant mode
//!
//! The bot suggests a guess, the user plays it in some other Wordle and types
//! back the colors. Finished games feed the learner.

use crate::core::{Feedback, Word};
use crate::output::formatters::{colored_guess, performance_label, plural_guesses};
use crate::solver::{SelectionKind, Session};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// How one game in the assistant ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameEnd {
    Solved,
    OutOfAttempts,
    Restarted,
    Quit,
}

/// Run the assistant on stdin and stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_assist<G: Rng + ?Sized>(session: &mut Session<'_>, rng: &mut G) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_assist_with(session, &mut stdin.lock(), &mut stdout.lock(), rng)
}

/// Run the assistant on any line-based input and output
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_assist_with<R: BufRead, W: Write, G: Rng + ?Sized>(
    session: &mut Session<'_>,
    input: &mut R,
    out: &mut W,
    rng: &mut G,
) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                Wordle Bot - Assistant Mode                   ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;

    writeln!(out, "I'll suggest a guess each turn. Play it, then enter the colors:\n")?;
    writeln!(out, "  - Use G/g/🟩 for green (correct position)")?;
    writeln!(out, "  - Use Y/y/🟨 for yellow (wrong position)")?;
    writeln!(out, "  - Use -/_/⬜ for gray (not in word)")?;
    writeln!(out, "  - Played a different word? Enter it first: 'crane GY---'")?;
    writeln!(out, "  - Or type 'win' if you got it right!\n")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n")?;

    loop {
        match play_one(session, input, out, rng)? {
            GameEnd::Quit => break,
            GameEnd::Restarted => writeln!(out, "\n🔄 New game started!\n")?,
            GameEnd::Solved | GameEnd::OutOfAttempts => {
                match prompt(input, out, "Play again? (yes/no)")?.as_deref() {
                    Some("yes" | "y") => writeln!(out, "\n🔄 New game started!\n")?,
                    _ => break,
                }
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

fn play_one<R: BufRead, W: Write, G: Rng + ?Sized>(
    session: &mut Session<'_>,
    input: &mut R,
    out: &mut W,
    rng: &mut G,
) -> io::Result<GameEnd> {
    let max_attempts = session.config().max_attempts_solo;
    let mut history: Vec<(Word, Feedback)> = Vec::new();
    session.reset_knowledge();

    loop {
        let turn = history.len();
        let candidates = session.available_candidates();

        if candidates.is_empty() {
            writeln!(out, "\n❌ No candidates remain! Your feedback may be incorrect.")?;
            writeln!(out, "Type 'undo' to go back, or 'new' to start over.\n")?;
            match prompt(input, out, "Command")?.as_deref() {
                None | Some("quit" | "q" | "exit") => return Ok(GameEnd::Quit),
                Some("undo" | "u") => {
                    undo(session, &mut history, out)?;
                    continue;
                }
                Some("new" | "n") => return Ok(GameEnd::Restarted),
                Some(_) => {}
            }
        }

        let Some(selection) = session.next_guess(turn, rng) else {
            writeln!(out, "❌ The word list is empty, nothing to suggest.")?;
            return Ok(GameEnd::Quit);
        };

        writeln!(out, "────────────────────────────────────────────────────────────")?;
        writeln!(
            out,
            "Turn {}/{max_attempts}: {} candidates remaining",
            turn + 1,
            candidates.len()
        )?;
        writeln!(out, "────────────────────────────────────────────────────────────")?;
        writeln!(out, "\n📊 Suggested guess: {}", selection.word.text().to_uppercase().bold())?;
        match selection.kind {
            SelectionKind::Opening => writeln!(out, "   From the opening book")?,
            SelectionKind::OnlyCandidate => writeln!(out, "   The only word left!")?,
            SelectionKind::Weighted => {
                if let Some(score) = selection.score {
                    writeln!(out, "   Score:            {score:.1}")?;
                }
            }
            SelectionKind::Fallback => writeln!(out, "   Random pick, nothing fits")?,
        }

        if turn > 0 && candidates.len() <= 10 {
            writeln!(out, "\nRemaining candidates:")?;
            for candidate in &candidates {
                writeln!(out, "  • {}", candidate.text().to_uppercase())?;
            }
        }
        writeln!(out)?;

        let observation = loop {
            let Some(line) = prompt(input, out, "Enter feedback (G/Y/-, 'win', or command)")?
            else {
                return Ok(GameEnd::Quit);
            };

            match line.as_str() {
                "quit" | "q" | "exit" => return Ok(GameEnd::Quit),
                "new" | "n" => return Ok(GameEnd::Restarted),
                "undo" | "u" => {
                    if undo(session, &mut history, out)? {
                        break None;
                    }
                }
                "win" | "correct" | "yes" | "solved" => {
                    break Some((selection.word.clone(), Feedback::SOLVED));
                }
                _ => match parse_feedback_line(&line, &selection.word) {
                    Some(observed) => break Some(observed),
                    None => writeln!(
                        out,
                        "❌ Invalid input! Use G/Y/-, 'win', '🟩🟨⬜🟩🟨' or 'word GY-GY'\n"
                    )?,
                },
            }
        };

        let Some((guess, feedback)) = observation else {
            continue;
        };

        session.update_knowledge(&guess, &feedback);
        history.push((guess, feedback));

        if feedback.is_solved() {
            celebrate(&history, out)?;
            let guesses: Vec<Word> = history.iter().map(|(w, _)| w.clone()).collect();
            session.record_game(&guesses, true);
            return Ok(GameEnd::Solved);
        }
        if history.len() >= max_attempts {
            writeln!(
                out,
                "\n{}",
                format!("❌ Out of attempts after {max_attempts} guesses").red().bold()
            )?;
            let guesses: Vec<Word> = history.iter().map(|(w, _)| w.clone()).collect();
            session.record_game(&guesses, false);
            return Ok(GameEnd::OutOfAttempts);
        }
    }
}

/// Parse `pattern` or `word pattern`; a bare pattern applies to `suggested`
fn parse_feedback_line(line: &str, suggested: &Word) -> Option<(Word, Feedback)> {
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(pattern), None, None) => Some((suggested.clone(), Feedback::parse(pattern)?)),
        (Some(word), Some(pattern), None) => {
            Some((Word::new(word).ok()?, Feedback::parse(pattern)?))
        }
        _ => None,
    }
}

/// Drop the last guess and rebuild knowledge from what is left
fn undo<W: Write>(
    session: &mut Session<'_>,
    history: &mut Vec<(Word, Feedback)>,
    out: &mut W,
) -> io::Result<bool> {
    if history.pop().is_none() {
        writeln!(out, "Nothing to undo!\n")?;
        return Ok(false);
    }

    session.reset_knowledge();
    for (word, feedback) in history.iter() {
        session.update_knowledge(word, feedback);
    }
    writeln!(out, "✓ Undone! Back to turn {}\n", history.len() + 1)?;
    Ok(true)
}

fn celebrate<W: Write>(history: &[(Word, Feedback)], out: &mut W) -> io::Result<()> {
    let turns = history.len();
    writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    )?;
    writeln!(out, "{}", "═".repeat(70).bright_cyan())?;

    let (headline, remark) = performance_label(turns);
    writeln!(out, "\n  {}", headline.bright_yellow().bold())?;
    writeln!(out, "  {}", remark.bright_white())?;
    writeln!(
        out,
        "\n  Solution found in {} {}",
        turns.to_string().bright_cyan().bold(),
        plural_guesses(turns)
    )?;

    writeln!(out, "\n  Guess history:")?;
    for (i, (word, feedback)) in history.iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            colored_guess(word, feedback),
            feedback.to_emoji()
        )?;
    }
    writeln!(out, "\n{}\n", "═".repeat(70).bright_cyan())
}

/// Print `text` and read one trimmed, lowercased line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::corpus::Corpus;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn run(session: &mut Session<'_>, script: &str) -> String {
        let mut input = script.as_bytes();
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(21);
        run_assist_with(session, &mut input, &mut out, &mut rng).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn win_is_recorded() {
        let corpus = Corpus::embedded();
        let mut session = Session::new(&corpus, EngineConfig::default());

        let output = run(&mut session, "win\nno\n");

        assert!(output.contains("Suggested guess"));
        assert!(output.contains("Thanks for playing"));
        assert_eq!(session.stats().games_played, 1);
        assert_eq!(session.stats().wins, 1);
    }

    #[test]
    fn explicit_word_and_pattern_narrow_candidates() {
        let corpus = Corpus::embedded();
        let mut session = Session::new(&corpus, EngineConfig::default());

        // APPLE against ANGLE, then quit mid-game
        let output = run(&mut session, "apple g--gg\nquit\n");

        assert!(output.contains("Turn 2/6"));
        assert!(session.available_candidates().iter().any(|w| w.text() == "angle"));
        assert_eq!(session.stats().games_played, 0);
    }

    #[test]
    fn undo_restores_previous_knowledge() {
        let corpus = Corpus::embedded();
        let mut session = Session::new(&corpus, EngineConfig::default());

        let output = run(&mut session, "apple g--gg\nundo\nquit\n");

        assert!(output.contains("Undone! Back to turn 1"));
        assert!(session.knowledge().is_empty());
    }

    #[test]
    fn invalid_input_is_rejected() {
        let corpus = Corpus::embedded();
        let mut session = Session::new(&corpus, EngineConfig::default());

        let output = run(&mut session, "gggg\nundo\n");

        assert!(output.contains("Invalid input"));
        assert!(output.contains("Nothing to undo"));
    }

    #[test]
    fn running_out_of_attempts_records_loss() {
        let corpus = Corpus::embedded();
        let config = EngineConfig {
            max_attempts_solo: 1,
            ..EngineConfig::default()
        };
        let mut session = Session::new(&corpus, config);

        let output = run(&mut session, "-----\nno\n");

        assert!(output.contains("Out of attempts"));
        assert_eq!(session.stats().games_played, 1);
        assert_eq!(session.stats().wins, 0);
    }

    #[test]
    fn contradictory_feedback_offers_undo() {
        let corpus = Corpus::embedded();
        let mut session = Session::new(&corpus, EngineConfig::default());

        let output = run(&mut session, "zzzzz yyyyy\nnew\nquit\n");

        assert!(output.contains("No candidates remain"));
        assert!(output.contains("New game started"));
    }

    #[test]
    fn parse_feedback_line_forms() {
        let suggested = Word::new("crane").unwrap();

        let (word, feedback) = parse_feedback_line("gy---", &suggested).unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(feedback.to_string(), "GY---");

        let (word, _) = parse_feedback_line("slate ---gg", &suggested).unwrap();
        assert_eq!(word.text(), "slate");

        assert!(parse_feedback_line("slate", &suggested).is_none());
        assert!(parse_feedback_line("a b c", &suggested).is_none());
    }
}
