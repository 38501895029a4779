//! Wordle Bot - CLI
//!
//! Self-improving Wordle bot with a TUI watch mode and plain CLI modes.
//! Learned weights and statistics persist between runs in a JSON state file.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use wordle_bot::{
    commands::{run_assist, run_play, run_training, run_versus, score_observations, solve_word},
    config::EngineConfig,
    corpus::{Corpus, loader::load_from_file},
    logging,
    output::{
        print_learning_stats, print_scores_report, print_solve_result, print_training_result,
    },
    solver::Session,
    store::{JsonFileStore, WeightStore},
};

#[derive(Parser)]
#[command(
    name = "wordle_bot",
    about = "Self-improving Wordle bot with heuristic scoring and learned word weights",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// JSON file with engine settings (defaults are used when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Where learned weights and statistics are kept
    #[arg(long, global = true, default_value = "wordle_bot_state.json")]
    state: PathBuf,

    /// Seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch the bot play in the TUI (default)
    Watch,

    /// Let the bot play against a given target word
    Solve {
        /// The target word
        word: String,

        /// Show candidate counts and scores per turn
        #[arg(long)]
        details: bool,
    },

    /// Train the bot on random games
    Train {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Get suggestions for a game played elsewhere
    Assist,

    /// Play a solo game yourself
    Play,

    /// Race the bot on the same hidden word
    Versus,

    /// Score the remaining candidates after some observations
    Scores {
        /// Observations like 'crane=GY---'
        observations: Vec<String>,

        /// Number of candidates to show
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Show what the bot has learned so far
    Stats {
        /// Number of most and least trusted words to show
        #[arg(short, long, default_value = "10")]
        top: usize,
    },
}

fn load_corpus(wordlist: &str) -> Result<Corpus> {
    let corpus = match wordlist {
        "embedded" => Corpus::embedded(),
        path => Corpus::new(
            load_from_file(path).with_context(|| format!("failed to load wordlist {path}"))?,
        ),
    };
    if corpus.is_empty() {
        bail!("wordlist '{wordlist}' contains no valid five-letter words");
    }
    Ok(corpus)
}

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig> {
    path.map_or_else(
        || Ok(EngineConfig::default()),
        |p| {
            EngineConfig::from_file(p)
                .with_context(|| format!("failed to load config {}", p.display()))
        },
    )
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let corpus = load_corpus(&cli.wordlist)?;
    let config = load_config(cli.config.as_ref())?;
    let store = JsonFileStore::new(&cli.state);
    let learner = store
        .load()
        .with_context(|| format!("failed to load state {}", cli.state.display()))?;
    let mut session = Session::with_learner(&corpus, config, learner);
    let mut rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    // Default to Watch mode if no command given
    let command = cli.command.unwrap_or(Commands::Watch);

    match command {
        Commands::Watch => {
            use wordle_bot::interactive::{App, run_tui};

            let app = App::new(session, rng);
            let learner = run_tui(app)?;
            save(&store, &learner)?;
        }
        Commands::Solve { word, details } => {
            let max_attempts = session.config().max_attempts_solo;
            let result = solve_word(&mut session, &word, max_attempts, &mut rng)?;
            print_solve_result(&result, details);
            save(&store, &session.learner())?;
        }
        Commands::Train { count } => {
            let max_attempts = session.config().max_attempts_solo;
            println!("Training on {count} random games...");
            let result = run_training(&mut session, count, max_attempts, true, &mut rng)?;
            print_training_result(&result, max_attempts);
            print_learning_stats(session.stats(), session.weights(), 5);
            save(&store, &session.learner())?;
        }
        Commands::Assist => {
            run_assist(&mut session, &mut rng)?;
            save(&store, &session.learner())?;
        }
        Commands::Play => {
            let target = corpus
                .random_word(&mut rng)
                .cloned()
                .context("wordlist is empty")?;
            let outcome = run_play(&corpus, target, session.config().max_attempts_solo)?;
            tracing::debug!(?outcome, "solo game finished");
        }
        Commands::Versus => {
            let target = corpus
                .random_word(&mut rng)
                .cloned()
                .context("wordlist is empty")?;
            let winner = run_versus(&mut session, target, &mut rng)?;
            tracing::debug!(?winner, "versus round finished");
        }
        Commands::Scores { observations, top } => {
            let report = score_observations(&mut session, &observations, top)?;
            print_scores_report(&report);
        }
        Commands::Stats { top } => {
            print_learning_stats(session.stats(), session.weights(), top);
        }
    }

    Ok(())
}

fn save(store: &JsonFileStore, learner: &wordle_bot::solver::LearnerState) -> Result<()> {
    store
        .save(learner)
        .with_context(|| format!("failed to save state {}", store.path().display()))
}
