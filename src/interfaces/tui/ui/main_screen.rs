use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::colors;
use crate::interfaces::tui::ui::widgets::StatusIndicator;
use crate::presentation::{
    EMPTY_DETAIL, EMPTY_TITLE, ORDER_OPTIONS, PER_PAGE_OPTIONS, PaginationView, SORT_FIELD_OPTIONS,
    SortControls, TABLE_HEADERS,
};

fn option_span(label: String, selected: bool) -> Span<'static> {
    if selected {
        Span::styled(
            format!("[{}]", label),
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!(" {} ", label), Style::default().fg(Color::Gray))
    }
}

fn label_span(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(colors::PRIMARY).bold())
}

/// Sort field, order and page size selectors
pub fn draw_sort_bar(frame: &mut Frame, app: &App, area: Rect) {
    let controls = SortControls::from_query(&app.snapshot.query);

    let mut spans = vec![label_span("Sort by [s]: ")];
    spans.extend(
        SORT_FIELD_OPTIONS
            .iter()
            .map(|f| option_span(f.label().to_string(), *f == controls.sort.sort_by)),
    );
    spans.push(label_span("  Order [o]: "));
    spans.extend(ORDER_OPTIONS.iter().map(|o| {
        option_span(
            format!("{} {}", o.arrow(), o.label()),
            *o == controls.sort.order,
        )
    }));
    spans.push(label_span("  Per page [p]: "));
    spans.extend(
        PER_PAGE_OPTIONS
            .iter()
            .map(|p| option_span(p.to_string(), *p == controls.per_page)),
    );

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors::MUTED)),
    );
    frame.render_widget(bar, area);
}

/// Prev/next, page window and "Showing a-b of n"
pub fn draw_pagination_bar(frame: &mut Frame, app: &App, area: Rect) {
    let Some(data) = &app.snapshot.data else {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors::MUTED));
        frame.render_widget(block, area);
        return;
    };
    let view = PaginationView::from_page_info(&data.pagination);

    let nav_style = |enabled: bool| {
        if enabled {
            Style::default().fg(colors::PRIMARY).bold()
        } else {
            Style::default().fg(colors::MUTED)
        }
    };

    let mut spans = vec![Span::styled("◀ Prev ", nav_style(view.has_prev))];
    for page in &view.pages {
        if view.is_current(*page) {
            spans.push(Span::styled(
                format!("[{}]", page),
                Style::default()
                    .fg(colors::HIGHLIGHT_FG)
                    .bg(colors::HIGHLIGHT_BG)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {} ", page),
                Style::default().fg(Color::White),
            ));
        }
    }
    spans.push(Span::styled(" Next ▶", nav_style(view.has_next)));
    spans.push(Span::styled("   ", Style::default()));
    spans.push(Span::styled(
        view.summary(),
        Style::default().fg(Color::DarkGray),
    ));

    let bar = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::MUTED)),
        );
    frame.render_widget(bar, area);
}

fn draw_placeholder(frame: &mut Frame, title: String, lines: Vec<Line<'static>>, area: Rect) {
    let placeholder = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(title)
                .title_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Center);
    frame.render_widget(placeholder, area);
}

fn hint_line(prefix: &'static str, key: &'static str, suffix: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(prefix, Style::default().fg(Color::DarkGray)),
        Span::styled(
            key,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(suffix, Style::default().fg(Color::DarkGray)),
    ])
}

/// URL table, or the loading/error/empty placeholder in its place
pub fn draw_url_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let snapshot = &app.snapshot;
    let scope_title = snapshot.scope.title();

    if snapshot.data.is_none() {
        let mut lines = vec![Line::from(""), Line::from("")];
        if let Some(err) = &snapshot.error {
            lines.push(Line::from(Span::styled(
                err.user_message(),
                Style::default().fg(colors::ERROR).bold(),
            )));
            lines.push(Line::from(""));
            if err.is_unauthorized() {
                lines.push(hint_line("Press ", "[l]", " to log in"));
            } else {
                lines.push(hint_line("Press ", "[r]", " to retry"));
            }
        } else if snapshot.loading {
            lines.push(Line::from(Span::styled(
                "Loading URLs...",
                Style::default().fg(colors::WARNING),
            )));
        } else if snapshot.scope.requires_auth() && !app.session_state.is_authenticated() {
            lines.push(Line::from(Span::styled(
                "Log in to see your URLs",
                Style::default().fg(Color::Gray).bold(),
            )));
            lines.push(Line::from(""));
            lines.push(hint_line("Press ", "[l]", " to log in"));
            lines.push(hint_line("or ", "[Tab]", " to browse all URLs"));
        }
        draw_placeholder(frame, scope_title.to_string(), lines, area);
        return;
    }

    if app.rows.is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                EMPTY_TITLE,
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                EMPTY_DETAIL,
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            hint_line("Press ", "[a]", " to shorten a URL"),
        ];
        draw_placeholder(frame, scope_title.to_string(), lines, area);
        return;
    }

    let header = Row::new(TABLE_HEADERS.iter().map(|h| {
        Span::styled(
            *h,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    }))
    .bottom_margin(1);

    let rows: Vec<Row> = app
        .rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Line::from(Span::styled(
                    row.display_url.clone(),
                    Style::default().fg(Color::Blue),
                )),
                Line::from(Span::styled(
                    row.short_code.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(StatusIndicator::new(row.status).span()),
                Line::from(Span::styled(
                    row.clicks_cell(),
                    Style::default().fg(Color::Green),
                )),
                Line::from(Span::styled(
                    row.dates_cell(),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(Span::styled(
                    row.owner.clone().unwrap_or_else(|| "-".to_string()),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let mut title = match &snapshot.data {
        Some(data) => format!("{} ({})", scope_title, data.pagination.total),
        None => scope_title.to_string(),
    };
    if snapshot.loading {
        title.push_str(" | Loading...");
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    // A failed reload keeps the previous page on screen
    if let Some(err) = &snapshot.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", err.user_message()),
            Style::default().fg(colors::ERROR).bold(),
        )));
    }

    let table = Table::new(
        rows,
        [
            Constraint::Min(24),    // Original URL
            Constraint::Length(12), // Short Code
            Constraint::Length(10), // Status
            Constraint::Length(26), // Clicks
            Constraint::Min(30),    // Dates
            Constraint::Length(12), // User
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
    .highlight_symbol("▶ ")
    .column_spacing(1);

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

pub fn draw_main_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Sort bar
            Constraint::Min(5),    // Table
            Constraint::Length(3), // Pagination
        ])
        .split(area);

    draw_sort_bar(frame, app, chunks[0]);
    draw_url_table(frame, app, chunks[1]);
    draw_pagination_bar(frame, app, chunks[2]);
}
