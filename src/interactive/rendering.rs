//! TUI rendering with ratatui
//!
//! Board, candidate score bars and learning statistics for watch mode.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Classification, WORD_LEN};
use crate::solver::SelectionKind;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Board
            Constraint::Percentage(55), // Scores, stats, messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🤖 WORDLE BOT - Watch Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn tile_color(class: Classification) -> Color {
    match class {
        Classification::Correct => Color::Green,
        Classification::Present => Color::Yellow,
        Classification::Absent => Color::DarkGray,
    }
}

fn tile(letter: char, bg: Color) -> Span<'static> {
    Span::styled(
        format!(" {letter} "),
        Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(app.max_attempts * 2 + 2);

    for row in &app.board {
        let mut spans: Vec<Span> = row
            .guess
            .chars()
            .iter()
            .zip(row.feedback.classes())
            .flat_map(|(&letter, &class)| {
                [
                    tile(char::from(letter.to_ascii_uppercase()), tile_color(class)),
                    Span::raw(" "),
                ]
            })
            .collect();

        let note = match row.kind {
            SelectionKind::Opening => "opening".to_string(),
            SelectionKind::OnlyCandidate => "only one left".to_string(),
            SelectionKind::Fallback => "random fallback".to_string(),
            SelectionKind::Weighted => {
                format!("{} → {}", row.candidates_before, row.candidates_after)
            }
        };
        spans.push(Span::styled(
            format!(" {note}"),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    for _ in app.board.len()..app.max_attempts {
        let spans: Vec<Span> = (0..WORD_LEN)
            .flat_map(|_| [tile('·', Color::Black), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let target = app.revealed_target().map_or_else(
        || "?????".to_string(),
        str::to_uppercase,
    );
    lines.push(Line::from(vec![
        Span::raw("Target: "),
        Span::styled(
            target,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45), // Candidate scores
            Constraint::Length(6),      // Learning stats
            Constraint::Length(3),      // Learning gauge
            Constraint::Min(3),         // Messages
        ])
        .split(area);

    render_candidates(f, app, chunks[0]);
    render_stats(f, app, chunks[1]);
    render_learning_progress(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    const BAR_WIDTH: usize = 20;

    let max = app.top_candidates.first().map_or(0.0, |(_, s)| *s);
    let mut lines = vec![Line::from(format!(
        "{} candidates remaining",
        app.candidates_left
    ))];

    for (word, score) in &app.top_candidates {
        let filled = if max > 0.0 {
            ((score / max) * BAR_WIDTH as f64) as usize
        } else {
            0
        }
        .min(BAR_WIDTH);
        let bar = "█".repeat(filled) + &"░".repeat(BAR_WIDTH - filled);

        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<6}", word.to_uppercase()),
                Style::default().fg(Color::Green),
            ),
            Span::styled(bar, Style::default().fg(Color::Cyan)),
            Span::raw(format!(" {score:.1}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Candidate Scores ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.session.stats();
    let content = vec![
        Line::from(format!("Games played:    {}", stats.games_played)),
        Line::from(format!("Win rate:        {:.1}%", stats.win_rate())),
        Line::from(format!("Average guesses: {:.2}", stats.average_guesses())),
        Line::from(format!("Words learned:   {}", app.session.weights().len())),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Learning ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_learning_progress(f: &mut Frame, app: &App, area: Rect) {
    let progress = app.session.stats().learning_progress();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Magenta))
        .percent(u16::from(progress))
        .label(format!("Learning progress {progress}%"));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = match (app.auto_play, &app.input_mode) {
        (true, _) => format!("Auto ({}ms)", app.delay.as_millis()),
        (false, InputMode::RoundOver) => "Round over".to_string(),
        (false, InputMode::Watching) => "Stepping".to_string(),
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let attempts = app.game.as_ref().map_or(0, |g| g.attempts_used());
    let turn = Paragraph::new(format!("Guess {attempts}/{}", app.max_attempts))
        .alignment(Alignment::Center);
    f.render_widget(turn, chunks[1]);

    let help = Paragraph::new("q: Quit | Space: Step | a: Auto | n: New | +/-: Speed")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::corpus::Corpus;
    use crate::solver::Session;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_board_and_scores() {
        let corpus = Corpus::embedded();
        let session = Session::new(&corpus, EngineConfig::default());
        let mut app = App::new(session, StdRng::seed_from_u64(1));
        app.new_round();
        app.step();
        app.step();

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Board"));
        assert!(text.contains("Candidate Scores"));
        assert!(text.contains("candidates remaining"));
    }

    #[test]
    fn hides_target_until_round_over() {
        let corpus = Corpus::embedded();
        let session = Session::new(&corpus, EngineConfig::default());
        let mut app = App::new(session, StdRng::seed_from_u64(2));
        app.new_round();

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        assert!(buffer_text(&terminal).contains("?????"));

        while app.input_mode == InputMode::Watching {
            app.step();
        }
        terminal.draw(|f| ui(f, &app)).unwrap();
        let target = app.revealed_target().unwrap().to_uppercase();
        assert!(buffer_text(&terminal).contains(&target));
    }
}
