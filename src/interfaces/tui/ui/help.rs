use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::popup;

type Section = (&'static str, &'static [(&'static str, &'static str)]);

const SECTIONS: [Section; 6] = [
    (
        "NAVIGATION",
        &[
            ("Up/Down, j/k", "Navigate list"),
            ("Home, g", "Jump to top"),
            ("End, G", "Jump to bottom"),
            ("PageUp/PageDown", "Scroll 10 rows"),
        ],
    ),
    (
        "PAGINATION & SORTING",
        &[
            ("Left/Right, </>", "Previous / next page"),
            ("[ / ]", "First / last page"),
            ("s", "Cycle sort field"),
            ("o", "Toggle ascending / descending"),
            ("p", "Cycle page size"),
            ("Tab", "Switch All URLs / My URLs"),
            ("r, F5", "Reload current page"),
        ],
    ),
    (
        "ACTIONS",
        &[
            ("a", "Shorten a URL"),
            ("Enter, v", "View details"),
            ("Esc", "Clear messages"),
            ("q", "Quit application"),
        ],
    ),
    (
        "SESSION",
        &[
            ("l", "Log in"),
            ("u", "Register"),
            ("L", "Log out"),
        ],
    ),
    (
        "CLIPBOARD",
        &[("y", "Copy short URL"), ("Y", "Copy original URL")],
    ),
    (
        "FORM EDITING",
        &[
            ("Tab/Shift+Tab", "Switch field"),
            ("Space", "Toggle checkbox"),
            ("Enter", "Submit"),
            ("Esc", "Cancel"),
        ],
    ),
];

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    for (title, keys) in SECTIONS {
        lines.push(Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, desc) in keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<18}", key), Style::default().fg(Color::Cyan)),
                Span::styled(*desc, Style::default().fg(Color::White)),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP).render(frame, area);
    frame.render_widget(Paragraph::new(help_lines()), inner_area);
}
