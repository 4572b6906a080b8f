use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::login::form_footer;
use super::widgets::{InputField, Popup};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};

pub fn draw_shorten_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner_area = Popup::new("Shorten URL", popup::SHORTEN).render(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Session warning
            Constraint::Length(3), // URL
            Constraint::Length(1), // Permanent checkbox
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Last created
            Constraint::Min(2),    // Error / hint
        ])
        .split(inner_area);

    let form = &app.shorten_form;

    if !app.session_state.is_authenticated() {
        let warning = Paragraph::new(Span::styled(
            "Not logged in: press Esc, then [l] to log in",
            Style::default().fg(colors::WARNING).bold(),
        ));
        frame.render_widget(warning, chunks[0]);
    }

    InputField::new("URL", &form.url)
        .active(app.focus.is(0))
        .placeholder("https://...")
        .required()
        .render(frame, chunks[1]);

    let checkbox_style = if app.focus.is(1) {
        Style::default()
            .fg(colors::HIGHLIGHT_FG)
            .bg(colors::HIGHLIGHT_BG)
            .bold()
    } else {
        Style::default().fg(Color::White)
    };
    let checkbox = Line::from(vec![
        Span::styled(
            if form.permanent { "[x]" } else { "[ ]" },
            checkbox_style,
        ),
        Span::styled(" Permanent", checkbox_style),
        Span::styled(
            "  (Space to toggle; otherwise the link expires)",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(checkbox), chunks[2]);

    if let Some(created) = &form.last_created {
        let last = vec![
            Line::from(vec![
                Span::styled("Last created: ", Style::default().fg(Color::Yellow).bold()),
                Span::styled(created.short_url.clone(), Style::default().fg(Color::Cyan).bold()),
            ]),
            Line::from(Span::styled(
                created.original_url.clone(),
                Style::default().fg(Color::Blue),
            )),
        ];
        frame.render_widget(Paragraph::new(last), chunks[4]);
    }

    frame.render_widget(
        form_footer(
            form.error.as_deref(),
            form.loading,
            "Press Enter to shorten, Esc to cancel",
        ),
        chunks[5],
    );
}
