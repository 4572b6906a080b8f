use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::{Popup, StatusIndicator};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;

fn field(label: &'static str, value: String, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Yellow).bold()),
        Span::styled(value, style),
    ])
}

pub fn draw_view_details_screen(frame: &mut Frame, app: &App, area: Rect) {
    let Some(row) = app.selected_row() else {
        return;
    };
    let title = format!("URL Details: {}", row.short_code);
    let inner_area = Popup::new(&title, popup::VIEW_DETAILS).render(frame, area);

    let status = StatusIndicator::new(row.status);
    let mut details = vec![
        Line::from(""),
        field(
            "Short URL:   ",
            row.short_url.clone(),
            Style::default().fg(Color::Cyan).bold(),
        ),
        Line::from(""),
        Line::from(Span::styled(
            "Original URL:",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(row.original_url.clone(), Style::default().fg(Color::Blue)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Status:      ", Style::default().fg(Color::Yellow).bold()),
            status.span(),
        ]),
        field(
            "Clicks:      ",
            row.clicks.clone(),
            Style::default().fg(Color::Green).bold(),
        ),
    ];
    if let Some(last) = &row.last_accessed {
        details.push(field("             ", last.clone(), Style::default().fg(Color::Gray)));
    }
    details.push(Line::from(""));
    details.push(field(
        "             ",
        row.created.clone(),
        Style::default().fg(Color::Gray),
    ));
    if let Some(expires) = &row.expires {
        details.push(field(
            "             ",
            expires.clone(),
            status.style(),
        ));
    }
    if let Some(owner) = &row.owner {
        details.push(Line::from(""));
        details.push(field("User:        ", owner.clone(), Style::default().fg(Color::White)));
    }
    details.push(Line::from(""));
    details.push(Line::from(Span::styled(
        "[y] copy short URL  [Y] copy original URL  [Esc] close",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(details).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner_area);
}
