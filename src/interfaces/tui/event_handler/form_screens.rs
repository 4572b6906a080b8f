//! Event handler for the login, register and shorten popups

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::input_handler::{
    handle_back_tab_navigation, handle_backspace, handle_space_toggle, handle_tab_navigation,
    handle_text_input,
};

fn submit(app: &mut App) {
    match app.current_screen {
        CurrentScreen::Login => app.submit_login(),
        CurrentScreen::Register => app.submit_register(),
        CurrentScreen::Shorten => app.submit_shorten(),
        _ => {}
    }
}

/// Handle form screen input
pub fn handle_form_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Enter => submit(app),
        KeyCode::Esc => app.current_screen = CurrentScreen::Main,
        KeyCode::Tab | KeyCode::Down => handle_tab_navigation(app),
        KeyCode::BackTab | KeyCode::Up => handle_back_tab_navigation(app),
        KeyCode::Backspace => handle_backspace(app),
        KeyCode::Char(' ') => {
            if !handle_space_toggle(app) {
                handle_text_input(app, ' ');
            }
        }
        KeyCode::Char(c) => handle_text_input(app, c),
        _ => {}
    }
    false
}
