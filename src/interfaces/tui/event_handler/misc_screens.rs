//! Event handlers for the details, help and exit popups

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

/// Handle view details screen input
pub fn handle_view_details_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.current_screen = CurrentScreen::Main;
        }
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
        _ => {}
    }
    false
}

/// Any key closes the help popup
pub fn handle_help_screen(app: &mut App, _key_code: KeyCode) -> bool {
    app.current_screen = CurrentScreen::Main;
    false
}

pub fn handle_exiting_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => return true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc | KeyCode::Char('q') => {
            app.current_screen = CurrentScreen::Main;
        }
        _ => {}
    }
    false
}
