//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, plural_guesses};
use crate::commands::{ScoresReport, SolveResult, TrainingResult};
use crate::solver::{LearningStats, PerformanceWeights, SelectionKind};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            colored_guess(&step.word, &step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            match (step.kind, step.score) {
                (SelectionKind::Weighted, Some(score)) => println!("  Score:      {score:.1}"),
                (SelectionKind::Opening, _) => println!("  Opening book"),
                (SelectionKind::OnlyCandidate, _) => println!("  Only candidate left"),
                (SelectionKind::Fallback, _) => {
                    println!("  {}", "No candidate fit, random corpus pick".yellow());
                }
                (SelectionKind::Weighted, None) => {}
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!(
                "✅ Solved in {} {}!",
                result.guesses.len(),
                plural_guesses(result.guesses.len())
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a training run
pub fn print_training_result(result: &TrainingResult, max_attempts: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TRAINING RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate()).bright_yellow().bold()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses).bright_yellow()
    );
    if result.fallbacks > 0 {
        println!(
            "   Fallback picks:   {}",
            result.fallbacks.to_string().yellow()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=max_attempts {
        let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
        let pct = if result.games > 0 {
            count as f64 / result.games as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
    let lost = result.games - result.wins;
    if lost > 0 {
        println!("   ✗: {} lost", lost.to_string().red());
    }
}

/// Print persisted learning statistics and the extremes of the weight table
pub fn print_learning_stats(stats: &LearningStats, weights: &PerformanceWeights, top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LEARNING STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n🧠 {}", "Bot:".bright_cyan().bold());
    println!("   Games played:     {}", stats.games_played);
    println!("   Wins:             {}", stats.wins);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Average guesses:  {:.2}", stats.average_guesses());
    println!(
        "   Learning:         [{}] {}%",
        create_progress_bar(f64::from(stats.learning_progress()), 100.0, 30).green(),
        stats.learning_progress()
    );

    if !stats.history.is_empty() {
        println!("\n🕑 {}", "Recent games:".bright_cyan().bold());
        for record in stats.history.iter().rev().take(10) {
            let outcome = if record.won {
                "won ".green()
            } else {
                "lost".red()
            };
            println!(
                "   #{:<5} {outcome} in {} {}",
                record.game,
                record.guesses,
                plural_guesses(record.guesses)
            );
        }
    }

    let ranked = weights.ranked();
    if ranked.is_empty() || top == 0 {
        return;
    }

    println!("\n⭐ {}", "Most trusted words:".bright_cyan().bold());
    for (word, weight) in ranked.iter().take(top) {
        println!("   {:<8} {weight:.3}", word.to_uppercase().green());
    }

    println!("\n🔻 {}", "Least trusted words:".bright_cyan().bold());
    for (word, weight) in ranked.iter().rev().take(top) {
        println!("   {:<8} {weight:.3}", word.to_uppercase().red());
    }
}

/// Print ranked candidate scores
pub fn print_scores_report(report: &ScoresReport) {
    println!("\n{}", "─".repeat(60).cyan());
    for (word, feedback) in &report.observations {
        println!("  {} {}", colored_guess(word, feedback), feedback.to_emoji());
    }
    println!(
        "\n{} candidates remaining",
        report.total_candidates.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let max = report.top.first().map_or(0.0, |(_, s)| *s);
    for (i, (word, score)) in report.top.iter().enumerate() {
        println!(
            "  {:>2}. {:<6} {} {score:6.1}",
            i + 1,
            word.to_uppercase().bold(),
            create_progress_bar(*score, max, 30).cyan()
        );
    }
}
