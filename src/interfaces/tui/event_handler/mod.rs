//! Event handling for TUI
//!
//! Handles keyboard events and delegates to appropriate handlers
//!
//! This module is organized by screen type:
//! - main_screen: Main (URL table)
//! - form_screens: Login, Register, Shorten
//! - misc_screens: ViewDetails, Help, Exiting

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

mod form_screens;
mod main_screen;
mod misc_screens;

use form_screens::*;
use main_screen::*;
use misc_screens::*;

/// Handle keyboard input based on current screen
///
/// Returns `true` when the application should exit.
pub fn handle_key_event(app: &mut App, key_code: KeyCode) -> bool {
    match app.current_screen {
        CurrentScreen::Main => handle_main_screen(app, key_code),
        CurrentScreen::Login | CurrentScreen::Register | CurrentScreen::Shorten => {
            handle_form_screen(app, key_code)
        }
        CurrentScreen::ViewDetails => handle_view_details_screen(app, key_code),
        CurrentScreen::Help => handle_help_screen(app, key_code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key_code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::AppContext;
    use crate::config::StaticConfig;
    use crate::testing::MockApi;
    use std::sync::Arc;

    async fn app_with(api: MockApi) -> (App, Arc<MockApi>) {
        let api = Arc::new(api);
        let ctx = AppContext::new(api.clone());
        let app = App::new(&ctx, &StaticConfig::default()).await.unwrap();
        (app, api)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key_event(app, KeyCode::Char(c));
        }
    }

    #[tokio::test]
    async fn test_quit_needs_confirmation() {
        let (mut app, _) = app_with(MockApi::default()).await;
        assert!(!handle_key_event(&mut app, KeyCode::Char('q')));
        assert_eq!(app.current_screen, CurrentScreen::Exiting);
        assert!(!handle_key_event(&mut app, KeyCode::Char('n')));
        assert_eq!(app.current_screen, CurrentScreen::Main);

        handle_key_event(&mut app, KeyCode::Char('q'));
        assert!(handle_key_event(&mut app, KeyCode::Char('y')));
    }

    #[tokio::test]
    async fn test_login_flow_updates_session_and_list() {
        let (mut app, api) = app_with(MockApi::default()).await;
        app.settle_one().await;
        assert!(app.rows.is_empty(), "anonymous users have no own URLs");

        handle_key_event(&mut app, KeyCode::Char('l'));
        assert_eq!(app.current_screen, CurrentScreen::Login);
        type_text(&mut app, "alice");
        handle_key_event(&mut app, KeyCode::Tab);
        type_text(&mut app, "Secret123");
        assert_eq!(app.login_form.username, "alice");
        assert_eq!(app.login_form.password, "Secret123");

        handle_key_event(&mut app, KeyCode::Enter);
        assert!(app.login_form.loading);
        app.settle_one().await;

        assert_eq!(app.current_screen, CurrentScreen::Main);
        assert_eq!(app.status_message, "Logged in as alice");
        assert!(app.session_state.is_authenticated());
        assert_eq!(api.calls("login"), 1);

        // the session change triggers a fetch of "My URLs"
        app.settle_one().await;
        assert_eq!(app.rows.len(), 20);
    }

    #[tokio::test]
    async fn test_empty_login_never_reaches_network() {
        let (mut app, api) = app_with(MockApi::default()).await;
        handle_key_event(&mut app, KeyCode::Char('l'));
        handle_key_event(&mut app, KeyCode::Enter);

        assert_eq!(app.current_screen, CurrentScreen::Login);
        assert!(!app.login_form.loading);
        assert_eq!(
            app.login_form.error.as_deref(),
            Some(crate::forms::login::MISSING_CREDENTIALS_MESSAGE)
        );
        assert_eq!(api.calls("login"), 0);
    }

    #[tokio::test]
    async fn test_shorten_checkbox_and_backspace() {
        let (mut app, _) = app_with(MockApi::default().authenticated_as("alice")).await;
        handle_key_event(&mut app, KeyCode::Char('a'));
        assert_eq!(app.current_screen, CurrentScreen::Shorten);

        type_text(&mut app, "https://example.com/x");
        handle_key_event(&mut app, KeyCode::Backspace);
        assert_eq!(app.shorten_form.url, "https://example.com/");

        // space on the URL field is text, on the checkbox it toggles
        handle_key_event(&mut app, KeyCode::Tab);
        handle_key_event(&mut app, KeyCode::Char(' '));
        assert!(app.shorten_form.permanent);
        assert_eq!(app.shorten_form.url, "https://example.com/");

        handle_key_event(&mut app, KeyCode::Esc);
        assert_eq!(app.current_screen, CurrentScreen::Main);
    }

    #[tokio::test]
    async fn test_navigation_and_details() {
        let (mut app, _) = app_with(MockApi::default().authenticated_as("alice")).await;
        app.settle_one().await;
        assert_eq!(app.rows.len(), 20);

        handle_key_event(&mut app, KeyCode::Char('j'));
        handle_key_event(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected_index, 2);
        handle_key_event(&mut app, KeyCode::Char('G'));
        assert_eq!(app.selected_index, 19);
        handle_key_event(&mut app, KeyCode::Char('g'));
        assert_eq!(app.selected_index, 0);

        handle_key_event(&mut app, KeyCode::Enter);
        assert_eq!(app.current_screen, CurrentScreen::ViewDetails);
        handle_key_event(&mut app, KeyCode::Esc);
        assert_eq!(app.current_screen, CurrentScreen::Main);
    }

    #[tokio::test]
    async fn test_next_page_and_sort_keys() {
        let (mut app, api) = app_with(MockApi::default().authenticated_as("alice")).await;
        app.settle_one().await;

        handle_key_event(&mut app, KeyCode::Right);
        app.settle_one().await;
        assert_eq!(app.snapshot.query.page, 2);

        handle_key_event(&mut app, KeyCode::Char('s'));
        app.settle_one().await;
        assert_eq!(app.snapshot.query.page, 1);
        assert_eq!(
            app.snapshot.query.sort.sort_by,
            crate::models::SortField::ExpiresAt
        );

        let (_, last) = api.list_requests().last().cloned().unwrap();
        assert_eq!(last.page, Some(1));
        assert_eq!(last.sort_by, Some(crate::models::SortField::ExpiresAt));
    }
}
