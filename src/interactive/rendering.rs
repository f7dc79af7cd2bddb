//! TUI rendering with ratatui
//!
//! Letter grid, progress gauges and message panel for the game.

use super::app::App;
use crate::core::LetterState;
use crate::game::{Cell, CellMark, GameState, MessageStyle};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Message
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Progress and stats
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_message(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let rules = app.session.rules();
    let header = Paragraph::new(format!(
        "🎯 WORDLE - {} letters, {} tries",
        rules.word_length, rules.max_rows
    ))
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

fn cell_style(cell: &Cell, focused: bool, enabled: bool) -> Style {
    let style = match cell.mark {
        Some(CellMark::Verdict(LetterState::InPlace)) => {
            Style::default().fg(Color::Black).bg(Color::Green)
        }
        Some(CellMark::Verdict(LetterState::Correct)) => {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        }
        Some(CellMark::Verdict(LetterState::Wrong)) => {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        }
        Some(CellMark::Hint) => Style::default().fg(Color::Black).bg(Color::Cyan),
        None if enabled => Style::default().fg(Color::White),
        None => Style::default().fg(Color::DarkGray),
    };

    if focused {
        style.add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        style.add_modifier(Modifier::BOLD)
    }
}

fn render_board<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let board = &app.board;
    let focus = board.focus();

    let mut lines = vec![Line::from("")];
    for row in 0..board.row_count() {
        let enabled = board.is_row_enabled(row);
        let mut spans = vec![Span::styled(
            if enabled { "▶ " } else { "  " },
            Style::default().fg(Color::Cyan),
        )];
        for (column, cell) in board.row(row).iter().enumerate() {
            let focused = focus == Some((row, column));
            let text = format!(" {} ", cell.letter.unwrap_or('·'));
            spans.push(Span::styled(text, cell_style(cell, focused, enabled)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(3), // Hints gauge
            Constraint::Min(4),    // Statistics
        ])
        .split(area);

    let tracker = app.session.tracker();
    let rules = app.session.rules();

    render_gauge(
        f,
        chunks[0],
        " Attempts ",
        tracker.attempts().len(),
        rules.max_rows,
        Color::Cyan,
    );
    render_gauge(
        f,
        chunks[1],
        " Hints ",
        tracker.hints().used(),
        rules.max_hints,
        Color::Magenta,
    );
    render_statistics(f, app, chunks[2]);
}

fn render_gauge(f: &mut Frame, area: Rect, title: &str, value: usize, max: usize, color: Color) {
    let percent = if max == 0 {
        0
    } else {
        u16::try_from(value.min(max) * 100 / max).unwrap_or(100)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{value}/{max}"));

    f.render_widget(gauge, area);
}

fn render_statistics<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let stats = &app.stats;
    let peak = stats.guess_distribution.iter().copied().max().unwrap_or(0);

    let mut items = vec![ListItem::new(format!(
        "Games: {} | Won: {} | Win Rate: {}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    ))];
    for (row, &count) in stats.guess_distribution.iter().enumerate() {
        let width = if peak == 0 { 0 } else { count * 12 / peak };
        items.push(ListItem::new(Line::from(vec![
            Span::raw(format!("{}: ", row + 1)),
            Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ])));
    }

    let list = List::new(items).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_message<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let (text, color) = app.board.message().map_or((String::new(), Color::White), |msg| {
        let color = match msg.style {
            MessageStyle::Info => Color::White,
            MessageStyle::Success => Color::Green,
            MessageStyle::Error => Color::Red,
            MessageStyle::Hint => Color::Cyan,
        };
        (msg.text.clone(), color)
    });

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Message ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(paragraph, area);
}

fn render_status<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let tracker = app.session.tracker();
    let state_text = match tracker.state() {
        GameState::AwaitingGuess(row) => format!(
            "Row {}/{} | Confirmed: {}",
            row + 1,
            app.session.rules().max_rows,
            tracker.correct_count()
        ),
        GameState::Won => "Solved!".to_string(),
        GameState::Lost => "Out of tries".to_string(),
    };
    f.render_widget(
        Paragraph::new(state_text).alignment(Alignment::Center),
        chunks[0],
    );

    let help_text = if tracker.state().is_terminal() {
        "Enter: New Game | Esc: Quit"
    } else if app.board.hint_enabled() {
        "Enter: Submit | ←/→: Move | Tab: Hint | Ctrl-N: New Game | Esc: Quit"
    } else {
        "Enter: Submit | ←/→: Move | Ctrl-N: New Game | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
