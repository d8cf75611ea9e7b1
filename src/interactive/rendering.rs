//! TUI rendering with ratatui
//!
//! Login form, game board and notification panels.

use super::app::{App, InputMode, MessageStyle};
use crate::client::Authenticator;
use crate::core::Classification;
use crate::game::GameSession;
use crate::wordlists::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<A: Authenticator, W: WordSource>(f: &mut Frame, app: &App<A, W>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    match (app.input_mode, app.session()) {
        (InputMode::Username | InputMode::Password, _) | (_, None) => {
            render_login(f, app, main_chunks[0]);
        }
        (_, Some(session)) => render_board(f, session, main_chunks[0]),
    }
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

fn render_login<A: Authenticator, W: WordSource>(f: &mut Frame, app: &App<A, W>, area: Rect) {
    let field_style = |active: bool| {
        if active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    };

    let content = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  Username: "),
            Span::styled(
                app.username.clone(),
                field_style(app.input_mode == InputMode::Username),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("  Password: "),
            Span::styled(
                "•".repeat(app.password.chars().count()),
                field_style(app.input_mode == InputMode::Password),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Login ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn tile_style(classification: Classification) -> Style {
    let bg = match classification {
        Classification::Correct => Color::Green,
        Classification::Present => Color::Yellow,
        Classification::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

/// Build one board line per row: submitted rows colored, the current row
/// showing typed letters, later rows empty
fn board_lines(session: &GameSession) -> Vec<Line<'static>> {
    let width = session.word_length();
    let mut lines = Vec::with_capacity(session.max_attempts());

    for row in 0..session.max_attempts() {
        let mut spans = vec![Span::raw("  ")];

        if let Some(attempt) = session.attempts().get(row) {
            for (&letter, &c) in attempt
                .guess
                .chars()
                .iter()
                .zip(attempt.feedback.classifications())
            {
                let text = format!(" {} ", char::from(letter).to_ascii_uppercase());
                spans.push(Span::styled(text, tile_style(c)));
                spans.push(Span::raw(" "));
            }
        } else {
            let typed: Vec<char> = if row == session.row() && !session.status().is_over() {
                session.input().chars().collect()
            } else {
                Vec::new()
            };

            for i in 0..width {
                let span = match typed.get(i) {
                    Some(c) => Span::styled(
                        format!("[{}]", c.to_ascii_uppercase()),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    None => Span::styled("[ ]", Style::default().fg(Color::DarkGray)),
                };
                spans.push(span);
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn render_board(f: &mut Frame, session: &GameSession, area: Rect) {
    let title = format!(
        " Board ({} letters, {} left) ",
        session.word_length(),
        session.remaining_attempts()
    );

    let paragraph = Paragraph::new(board_lines(session)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_info_panel<A: Authenticator, W: WordSource>(
    f: &mut Frame,
    app: &App<A, W>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_attempts_gauge(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_attempts_gauge<A: Authenticator, W: WordSource>(
    f: &mut Frame,
    app: &App<A, W>,
    area: Rect,
) {
    let (used, max) = app
        .session()
        .map_or((0, 0), |s| (s.attempts().len(), s.max_attempts()));
    let percent = if max == 0 {
        0
    } else {
        (used * 100 / max).min(100) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{max} used"));

    f.render_widget(gauge, area);
}

fn render_messages<A: Authenticator, W: WordSource>(f: &mut Frame, app: &App<A, W>, area: Rect) {
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

fn render_input<A: Authenticator, W: WordSource>(f: &mut Frame, app: &App<A, W>, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Username => (" Enter username | TAB to switch field ", Color::Cyan),
        InputMode::Password => (" Enter password | ENTER to log in ", Color::Cyan),
        InputMode::Playing => (
            " Type letters | BACKSPACE to delete | ENTER to submit ",
            Color::Yellow,
        ),
        InputMode::Finished => (
            " Game over | 'n' new game | 'l' log out | 'q' quit ",
            Color::Green,
        ),
    };

    let content = match (app.input_mode, app.session()) {
        (InputMode::Playing, Some(session)) => session.input().to_uppercase(),
        _ => String::new(),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<A: Authenticator, W: WordSource>(f: &mut Frame, app: &App<A, W>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let user_text = app
        .client
        .username()
        .map_or_else(|| "Not logged in".to_string(), |u| format!("User: {u}"));
    let user = Paragraph::new(user_text).alignment(Alignment::Center);
    f.render_widget(user, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Username | InputMode::Password => "ESC: Quit | TAB: Switch field",
        InputMode::Playing => "ESC: Quit | Ctrl+N: New game | Ctrl+L: Log out",
        InputMode::Finished => "q: Quit | n: New game | l: Log out",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
