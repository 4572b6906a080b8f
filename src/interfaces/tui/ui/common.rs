use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::session::SessionState;

/// Draw title bar with version, list scope and session
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let session_style = match app.session_state {
        SessionState::Authenticated { .. } => Style::default().fg(Color::Green),
        SessionState::Anonymous => Style::default().fg(Color::Yellow),
        SessionState::Unknown => Style::default().fg(Color::DarkGray),
    };

    let mut spans = vec![
        Span::styled("Shortlink Console", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} ", app.snapshot.scope.title()),
            Style::default().fg(Color::Yellow),
        ),
    ];
    if let Some(data) = &app.snapshot.data {
        spans.push(Span::styled(
            format!("({}) ", data.pagination.total),
            Style::default().fg(Color::Yellow),
        ));
    }
    spans.push(Span::styled("| ", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(app.session_state.describe(), session_style));

    let title = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if !app.error_message.is_empty() {
        (
            format!("[ERROR] {}", app.error_message),
            Style::default().fg(Color::White).bg(Color::Red).bold(),
        )
    } else if !app.status_message.is_empty() {
        (
            format!("[SUCCESS] {}", app.status_message),
            Style::default().fg(Color::Black).bg(Color::Green).bold(),
        )
    } else if app.is_loading() || app.is_submitting() {
        ("Loading...".to_string(), Style::default().fg(Color::Yellow))
    } else {
        ("Ready".to_string(), Style::default().fg(Color::Cyan))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

/// Keyboard shortcuts for the current screen
fn shortcuts(app: &App) -> Vec<(&'static str, &'static str, Color)> {
    match app.current_screen {
        CurrentScreen::Main => {
            let mut keys = vec![
                ("Up/Down", "Navigate", Color::Cyan),
                ("Left/Right", "Page", Color::Cyan),
                ("s/o/p", "Sort", Color::Cyan),
                ("Tab", "All/Mine", Color::Cyan),
                ("a", "Shorten", Color::Green),
            ];
            if app.session_state.is_authenticated() {
                keys.push(("L", "Logout", Color::Yellow));
            } else {
                keys.push(("l", "Login", Color::Green));
                keys.push(("u", "Register", Color::Green));
            }
            keys.push(("?", "Help", Color::Blue));
            keys.push(("q", "Quit", Color::Magenta));
            keys
        }
        CurrentScreen::Login | CurrentScreen::Register => vec![
            ("Tab", "Switch Field", Color::Cyan),
            ("Enter", "Submit", Color::Green),
            ("Esc", "Cancel", Color::Red),
        ],
        CurrentScreen::Shorten => vec![
            ("Tab", "Switch Field", Color::Cyan),
            ("Space", "Toggle Permanent", Color::Cyan),
            ("Enter", "Shorten", Color::Green),
            ("Esc", "Cancel", Color::Red),
        ],
        CurrentScreen::ViewDetails => vec![
            ("y", "Copy Short URL", Color::Green),
            ("Y", "Copy Original URL", Color::Green),
            ("q/Esc", "Close", Color::Red),
        ],
        CurrentScreen::Help => vec![("any key", "Close", Color::Red)],
        CurrentScreen::Exiting => vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)],
    }
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
