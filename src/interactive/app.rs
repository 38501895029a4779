//! TUI application state and logic

use crate::core::{Feedback, Game, Word};
use crate::solver::{LearnerState, SelectionKind, Session};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Number of scored candidates shown in the side panel
pub const SHOWN_CANDIDATES: usize = 8;

const MIN_DELAY: Duration = Duration::from_millis(100);
const MAX_DELAY: Duration = Duration::from_millis(3_000);
/// Event wait while nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    rng: StdRng,
    pub game: Option<Game>,
    pub board: Vec<BoardRow>,
    pub top_candidates: Vec<(String, f64)>,
    pub candidates_left: usize,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub auto_play: bool,
    pub delay: Duration,
    pub max_attempts: usize,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Watching,
    RoundOver,
}

/// One revealed bot guess
#[derive(Debug, Clone)]
pub struct BoardRow {
    pub guess: Word,
    pub feedback: Feedback,
    pub kind: SelectionKind,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a>, rng: StdRng) -> Self {
        let max_attempts = session.config().max_attempts_solo;
        Self {
            session,
            rng,
            game: None,
            board: Vec::new(),
            top_candidates: Vec::new(),
            candidates_left: 0,
            messages: vec![Message {
                text: "Welcome! Space steps one guess, 'a' toggles auto-play.".to_string(),
                style: MessageStyle::Info,
            }],
            input_mode: InputMode::Watching,
            auto_play: false,
            delay: Duration::from_millis(800),
            max_attempts,
            should_quit: false,
        }
    }

    /// Pick a fresh random target and clear the board
    pub fn new_round(&mut self) {
        let Some(target) = self.session.corpus().random_word(&mut self.rng) else {
            self.add_message("The word list is empty!", MessageStyle::Error);
            self.game = None;
            return;
        };

        self.session.reset_knowledge();
        self.game = Some(Game::new(target.clone(), self.max_attempts));
        self.board.clear();
        self.input_mode = InputMode::Watching;
        self.refresh_candidates();
        self.add_message("New round! The bot is thinking...", MessageStyle::Info);
    }

    /// Let the bot make one guess
    pub fn step(&mut self) {
        if self.input_mode == InputMode::RoundOver {
            if self.auto_play {
                self.new_round();
            }
            return;
        }
        let Some(game) = self.game.as_mut() else {
            self.new_round();
            return;
        };

        match self.session.play_turn(game, &mut self.rng) {
            Ok(Some(turn)) => {
                if turn.selection.kind == SelectionKind::Fallback {
                    self.add_message(
                        "No word fits the feedback, guessing at random",
                        MessageStyle::Error,
                    );
                }
                self.refresh_candidates();
                self.board.push(BoardRow {
                    guess: turn.selection.word,
                    feedback: turn.feedback,
                    kind: turn.selection.kind,
                    candidates_before: turn.candidates_before,
                    candidates_after: turn.candidates_after,
                });
            }
            Ok(None) => {
                self.add_message("No guess available!", MessageStyle::Error);
                return;
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        }

        if self.game.as_ref().is_some_and(Game::is_over) {
            self.finish_round();
        }
    }

    fn finish_round(&mut self) {
        let Some(game) = self.game.as_ref() else {
            return;
        };
        let won = game.is_won();
        let guesses = game.guesses();
        let target = game.target().text().to_uppercase();
        self.session.record_game(&guesses, won);
        self.input_mode = InputMode::RoundOver;

        if won {
            let celebration = match guesses.len() {
                1 => "🎯 HOLE IN ONE!",
                2 => "🔥 MAGNIFICENT! Two guesses!",
                3 => "✨ SPLENDID! Three guesses!",
                4 => "👏 GREAT JOB! Four guesses!",
                5 => "🎉 NICE WORK! Five guesses!",
                _ => "😅 PHEW! Got it!",
            };
            self.add_message(&format!("{celebration} ({target})"), MessageStyle::Success);
        } else {
            self.add_message(&format!("Out of guesses, it was {target}"), MessageStyle::Error);
        }
    }

    fn refresh_candidates(&mut self) {
        self.candidates_left = self.session.available_candidates().len();
        self.top_candidates = self
            .session
            .candidate_scores(SHOWN_CANDIDATES)
            .into_iter()
            .map(|c| (c.word.text().to_string(), c.score))
            .collect();
    }

    pub fn toggle_auto_play(&mut self) {
        self.auto_play = !self.auto_play;
        let state = if self.auto_play { "on" } else { "off" };
        self.add_message(&format!("Auto-play {state}"), MessageStyle::Info);
    }

    pub fn faster(&mut self) {
        self.delay = (self.delay / 2).max(MIN_DELAY);
    }

    pub fn slower(&mut self) {
        self.delay = (self.delay * 2).min(MAX_DELAY);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// How long to wait for input before the next redraw
    ///
    /// With auto-play on this is the time left until the next step, otherwise
    /// a fixed idle interval.
    #[must_use]
    pub fn poll_timeout(&self, since_last_step: Duration) -> Duration {
        if self.auto_play {
            self.delay.saturating_sub(since_last_step)
        } else {
            IDLE_POLL
        }
    }

    /// Target shown on the board once the round is over
    #[must_use]
    pub fn revealed_target(&self) -> Option<&str> {
        match (&self.game, &self.input_mode) {
            (Some(game), InputMode::RoundOver) => Some(game.target().text()),
            _ => None,
        }
    }
}

/// Run the TUI application and hand back what the bot learned
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(mut app: App) -> Result<LearnerState> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(app.session.learner())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    app.new_round();
    let mut last_step = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        let timeout = app.poll_timeout(last_step.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char(' ') | KeyCode::Enter => {
                        app.step();
                        last_step = Instant::now();
                    }
                    KeyCode::Char('n') => app.new_round(),
                    KeyCode::Char('a') => app.toggle_auto_play(),
                    KeyCode::Char('+' | '=') => app.faster(),
                    KeyCode::Char('-') => app.slower(),
                    _ => {}
                }
            }
        } else if app.auto_play {
            app.step();
            last_step = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
