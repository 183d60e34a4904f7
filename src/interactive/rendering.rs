//! TUI rendering with ratatui
//!
//! Board, keyboard and success screen for the word-guessing game.

use super::app::{App, Screen};
use crate::core::{Cell, Row, Verdict};
use crate::game::{Board, Keyboard};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    match app.screen {
        Screen::Board => render_game(f, app),
        Screen::Solved => render_success(f, app),
    }
}

fn render_game(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Board
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app.game.board(), chunks[1]);
    render_keyboard(f, app.game.keyboard(), chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORD GUESS")
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

fn cell_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Verdict::Partial => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Verdict::Incorrect => Style::default().fg(Color::White).bg(Color::DarkGray),
        Verdict::Filled => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        Verdict::Empty => Style::default().fg(Color::DarkGray),
    }
}

fn cell_span(cell: Cell) -> Span<'static> {
    let text = format!(" {} ", cell.ch().unwrap_or('·'));
    Span::styled(text, cell_style(cell.verdict()))
}

fn row_line(row: &Row) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.len() * 2);
    for (i, &cell) in row.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(cell_span(cell));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, board: &Board, area: Rect) {
    let mut lines = Vec::new();
    for row in board.rows() {
        lines.push(row_line(row));
        lines.push(Line::default());
    }
    lines.pop();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, keyboard: &Keyboard, area: Rect) {
    let [top, middle, bottom] = keyboard.rows();

    let key_row = |keys: &[Cell]| -> Vec<Span<'static>> {
        let mut spans = Vec::with_capacity(keys.len() * 2);
        for (i, &key) in keys.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(cell_span(key));
        }
        spans
    };

    let wide_key = |label: &'static str| {
        Span::styled(
            format!(" {label} "),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        )
    };

    // Bottom row carries the wide ENTER and DEL keys, like the on-screen
    // keyboard of the original game
    let mut bottom_spans = vec![wide_key("ENTER"), Span::raw(" ")];
    bottom_spans.extend(key_row(bottom));
    bottom_spans.push(Span::raw(" "));
    bottom_spans.push(wide_key("DEL"));

    let lines = vec![
        Line::from(key_row(top)),
        Line::from(key_row(middle)),
        Line::from(bottom_spans),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if app.game.out_of_guesses() {
        (
            format!(
                "Out of guesses — the word was {}",
                app.game.target().text()
            ),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            "Type letters | Enter: submit | Backspace: delete | Esc: quit".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    };

    let status = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

fn render_success(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Banner
            Constraint::Min(8),    // Finished board
            Constraint::Length(3), // Help
        ])
        .split(f.area());

    let guesses = app.game.cursor().0 + 1;
    let banner = Paragraph::new(vec![
        Line::from(Span::styled(
            "CONGRATULATIONS!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(format!(
            "You found {} in {} {}",
            app.game.target().text(),
            guesses,
            if guesses == 1 { "guess" } else { "guesses" }
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(banner, chunks[0]);

    render_board(f, app.game.board(), chunks[1]);

    let help = Paragraph::new("n: New Game | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
