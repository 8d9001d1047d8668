//! TUI rendering with ratatui
//!
//! Everything drawn here comes from the [`Screen`] and the session state;
//! nothing in this module changes the game.

use super::app::App;
use super::screen::Screen;
use crate::core::{Feedback, Letter, MAX_GUESSES, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                            // Header
            Constraint::Length(1),                            // Alert
            Constraint::Length((MAX_GUESSES * 2 + 1) as u16), // Board
            Constraint::Length(7),                            // Keyboard
            Constraint::Min(0),                               // Filler
            Constraint::Length(3),                            // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_alert(f, &app.screen, chunks[1]);
    render_board(f, &app.screen, chunks[2]);
    render_keyboard(f, &app.screen, chunks[3]);
    render_status(f, app, chunks[5]);

    if let Some(message) = app.screen.overlay() {
        let area = f.area();
        render_overlay(f, message, area);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDO")
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .style(Style::default().fg(Color::Gray)),
        );
    f.render_widget(header, area);
}

fn render_alert(f: &mut Frame, screen: &Screen, area: Rect) {
    if let Some(message) = screen.alert() {
        let alert = Paragraph::new(Span::styled(
            format!(" {message} "),
            Style::default()
                .bg(Color::White)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        f.render_widget(alert, area);
    }
}

/// Colors for a tile or key with known feedback
fn feedback_style(feedback: Feedback) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match feedback {
        Feedback::Correct => base.bg(Color::Green).fg(Color::White),
        Feedback::Present => base.bg(Color::Yellow).fg(Color::Black),
        Feedback::Absent => base.bg(Color::DarkGray).fg(Color::White),
    }
}

fn render_board(f: &mut Frame, screen: &Screen, area: Rect) {
    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);

    for row in 0..MAX_GUESSES {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for col in 0..WORD_LENGTH {
            let tile = screen.tile(row, col);
            let (text, style) = match (tile.letter, tile.feedback) {
                (Some(letter), Some(feedback)) => (format!(" {letter} "), feedback_style(feedback)),
                (Some(letter), None) => (
                    format!(" {letter} "),
                    Style::default()
                        .bg(Color::Gray)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ),
                (None, _) => (" · ".to_string(), Style::default().fg(Color::DarkGray)),
            };
            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(board, area);
}

fn key_span(screen: &Screen, letter: Letter) -> Span<'static> {
    let style = screen.key(letter).map_or_else(
        || Style::default().bg(Color::Gray).fg(Color::Black),
        feedback_style,
    );
    Span::styled(format!(" {letter} "), style)
}

fn render_keyboard(f: &mut Frame, screen: &Screen, area: Rect) {
    let control = Style::default().bg(Color::Gray).fg(Color::Black);
    let mut lines = Vec::with_capacity(KEYBOARD_ROWS.len() * 2);

    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        let mut spans = Vec::new();
        let last = i == KEYBOARD_ROWS.len() - 1;
        if last {
            spans.push(Span::styled(" ENTER ", control));
            spans.push(Span::raw(" "));
        }
        for letter in row.chars().filter_map(Letter::from_char) {
            spans.push(key_span(screen, letter));
            spans.push(Span::raw(" "));
        }
        if last {
            spans.push(Span::styled(" ⌫ ", control));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(keyboard, area);
}

fn render_overlay(f: &mut Frame, message: &str, area: Rect) {
    let popup = centered_rect(40, 11, area);

    let mut lines: Vec<Line> = vec![Line::from("")];
    lines.extend(message.lines().map(|text| {
        Line::from(Span::styled(
            text.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: Play Again | q: Quit",
        Style::default().fg(Color::Cyan),
    )));

    let overlay = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::White)),
        );

    f.render_widget(Clear, popup);
    f.render_widget(overlay, popup);
}

/// Rectangle of at most `width`×`height` centered in `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let state = app.session.state();
    let stats = app.session.stats();

    let guess_text = format!("Guess: {}/{MAX_GUESSES}", state.guess_count());
    let guess = Paragraph::new(guess_text).alignment(Alignment::Center);
    f.render_widget(guess, chunks[0]);

    let streak_text = format!("Streak: {} (best {})", state.streak(), stats.max_streak);
    let streak = Paragraph::new(streak_text).alignment(Alignment::Center);
    f.render_widget(streak, chunks[1]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        stats.games_played,
        stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[2]);

    let help = Paragraph::new("Enter: Submit | ⌫: Delete | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
