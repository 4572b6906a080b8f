//! Event handler for the main URL table

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

/// Handle main screen input
pub fn handle_main_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => app.move_selection_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),

        // Pagination
        KeyCode::Left | KeyCode::Char('<') => app.prev_page(),
        KeyCode::Right | KeyCode::Char('>') => app.next_page(),
        KeyCode::Char('[') => app.first_page(),
        KeyCode::Char(']') => app.last_page(),

        // Sorting and scope
        KeyCode::Char('s') | KeyCode::Char('S') => app.cycle_sort_field(),
        KeyCode::Char('o') | KeyCode::Char('O') => app.toggle_sort_order(),
        KeyCode::Char('p') | KeyCode::Char('P') => app.cycle_per_page(),
        KeyCode::Tab => app.toggle_scope(),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::F(5) => {
            app.clear_messages();
            app.refresh_list();
        }

        // Session
        KeyCode::Char('l') => app.open_login(),
        KeyCode::Char('u') | KeyCode::Char('U') => app.open_register(),
        KeyCode::Char('L') => app.logout(),

        KeyCode::Char('a') | KeyCode::Char('A') => app.open_shorten(),
        KeyCode::Enter | KeyCode::Char('v') | KeyCode::Char('V') => {
            if app.selected_row().is_some() {
                app.current_screen = CurrentScreen::ViewDetails;
            }
        }

        // Copy to clipboard
        KeyCode::Char('y') => {
            if let Some(short_url) = app.selected_row().map(|r| r.short_url.clone()) {
                app.copy_to_clipboard(&short_url);
            }
        }
        KeyCode::Char('Y') => {
            if let Some(url) = app.selected_row().map(|r| r.original_url.clone()) {
                app.copy_to_clipboard(&url);
            }
        }

        KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('H') => {
            app.current_screen = CurrentScreen::Help;
        }
        KeyCode::Esc => app.clear_messages(),
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.current_screen = CurrentScreen::Exiting;
        }
        _ => {}
    }
    false
}
