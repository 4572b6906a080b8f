use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::login::form_footer;
use super::widgets::{InputField, Popup};
use crate::forms::{MINIMUM_PASSWORD_LENGTH, MINIMUM_USERNAME_LENGTH};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;

pub fn draw_register_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner_area = Popup::new("Create Account", popup::REGISTER)
        .theme_color(Color::Green)
        .render(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Username
            Constraint::Length(3), // Password
            Constraint::Length(3), // Confirm
            Constraint::Length(3), // Rules
            Constraint::Min(2),    // Error / hint
        ])
        .split(inner_area);

    let form = &app.register_form;
    InputField::new("Username", &form.username)
        .active(app.focus.is(0))
        .required()
        .render(frame, chunks[0]);
    InputField::new("Password", &form.password)
        .active(app.focus.is(1))
        .masked()
        .required()
        .render(frame, chunks[1]);
    InputField::new("Confirm Password", &form.confirm_password)
        .active(app.focus.is(2))
        .masked()
        .required()
        .render(frame, chunks[2]);

    let rules = vec![
        Line::from(Span::styled(
            format!("• Username: at least {} characters", MINIMUM_USERNAME_LENGTH),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            format!(
                "• Password: at least {} characters, upper and lowercase letters and a number",
                MINIMUM_PASSWORD_LENGTH
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(rules), chunks[3]);

    frame.render_widget(
        form_footer(
            form.error.as_deref(),
            form.loading,
            "Press Enter to register, Esc to cancel",
        ),
        chunks[4],
    );
}
