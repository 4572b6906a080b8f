//! Input handling utilities
//!
//! Provides unified input handling for text fields across the form screens

use super::app::{App, CurrentScreen};
use crate::forms::FormFields;

/// Text field under the cursor, if the focus is on one
fn focused_field(app: &mut App) -> Option<&mut String> {
    let index = app.focus.index;
    match app.current_screen {
        CurrentScreen::Login => app.login_form.field_mut(index),
        CurrentScreen::Register => app.register_form.field_mut(index),
        CurrentScreen::Shorten => app.shorten_form.field_mut(index),
        _ => None,
    }
}

/// Handle text character input
pub fn handle_text_input(app: &mut App, c: char) {
    if let Some(field) = focused_field(app) {
        field.push(c);
    }
}

/// Handle backspace input
pub fn handle_backspace(app: &mut App) {
    if let Some(field) = focused_field(app) {
        field.pop();
    }
}

/// Handle tab key for field navigation
pub fn handle_tab_navigation(app: &mut App) {
    app.focus.next();
}

pub fn handle_back_tab_navigation(app: &mut App) {
    app.focus.prev();
}

/// Handle space key for toggles (the shorten form's "permanent" checkbox)
///
/// Returns `false` when the focus is on a text field, so the caller can
/// treat the space as text.
pub fn handle_space_toggle(app: &mut App) -> bool {
    if app.current_screen == CurrentScreen::Shorten
        && app.focus.index >= app.shorten_form.field_count()
    {
        app.shorten_form.permanent = !app.shorten_form.permanent;
        return true;
    }
    false
}
