use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::{InputField, Popup};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};

/// Inline form error, or the submit hint while idle
pub(super) fn form_footer(error: Option<&str>, loading: bool, hint: &'static str) -> Paragraph<'static> {
    let line = if loading {
        Line::from(Span::styled(
            "Submitting...",
            Style::default().fg(colors::WARNING).bold(),
        ))
    } else if let Some(error) = error {
        Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(colors::ERROR).bold(),
        ))
    } else {
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)))
    };
    Paragraph::new(line)
        .alignment(Alignment::Center)
        .wrap(ratatui::widgets::Wrap { trim: true })
}

pub fn draw_login_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner_area = Popup::new("Login", popup::LOGIN)
        .theme_color(Color::Green)
        .render(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Username
            Constraint::Length(3), // Password
            Constraint::Length(1), // Spacer
            Constraint::Min(2),    // Error / hint
        ])
        .split(inner_area);

    let form = &app.login_form;
    InputField::new("Username", &form.username)
        .active(app.focus.is(0))
        .required()
        .render(frame, chunks[1]);
    InputField::new("Password", &form.password)
        .active(app.focus.is(1))
        .masked()
        .required()
        .render(frame, chunks[2]);

    frame.render_widget(
        form_footer(
            form.error.as_deref(),
            form.loading,
            "Press Enter to log in, Esc to cancel",
        ),
        chunks[4],
    );
}
