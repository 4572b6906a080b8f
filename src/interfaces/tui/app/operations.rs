//! Background operations started from the UI
//!
//! Network work runs in spawned tasks; results come back as [`AppEvent`]s
//! and are applied on the next tick, so a key press never waits on HTTP.

use std::future::Future;
use std::sync::Arc;

use tracing::debug;

use super::state::{App, AppEvent, CurrentScreen, FormFocus};
use crate::forms::{LoginForm, RegistrationForm, ShortenForm};
use crate::listing::{FetchOutcome, ListViewModel};
use crate::presentation::SortControls;
use crate::session::SessionState;

impl App {
    fn spawn_list<F, Fut>(&self, op: F)
    where
        F: FnOnce(Arc<ListViewModel>) -> Fut + Send + 'static,
        Fut: Future<Output = FetchOutcome> + Send + 'static,
    {
        let list = Arc::clone(&self.list);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = op(list).await;
            let _ = tx.send(AppEvent::ListFetched(outcome));
        });
    }

    pub fn refresh_list(&self) {
        self.spawn_list(|list| async move { list.refresh().await });
    }

    pub fn next_page(&mut self) {
        let has_next = self
            .snapshot
            .data
            .as_ref()
            .is_some_and(|d| d.pagination.has_next);
        if has_next {
            self.selected_index = 0;
            self.spawn_list(|list| async move { list.next_page().await });
        }
    }

    pub fn prev_page(&mut self) {
        let has_prev = self
            .snapshot
            .data
            .as_ref()
            .is_some_and(|d| d.pagination.has_prev);
        if has_prev {
            self.selected_index = 0;
            self.spawn_list(|list| async move { list.prev_page().await });
        }
    }

    pub fn first_page(&mut self) {
        if self.snapshot.query.page > 1 {
            self.selected_index = 0;
            self.spawn_list(|list| async move { list.set_page(1).await });
        }
    }

    pub fn last_page(&mut self) {
        let Some(pages) = self.snapshot.data.as_ref().map(|d| d.pagination.pages) else {
            return;
        };
        if pages > 0 && self.snapshot.query.page < pages {
            self.selected_index = 0;
            self.spawn_list(move |list| async move { list.set_page(pages).await });
        }
    }

    pub fn cycle_sort_field(&mut self) {
        let sort = SortControls::from_query(&self.snapshot.query).next_field();
        self.set_status(format!("Sort by: {}", sort.sort_by.label()));
        self.spawn_list(move |list| async move { list.set_sort(sort).await });
    }

    pub fn toggle_sort_order(&mut self) {
        let sort = SortControls::from_query(&self.snapshot.query).toggled_order();
        self.set_status(format!("Order: {}", sort.order.label()));
        self.spawn_list(move |list| async move { list.set_sort(sort).await });
    }

    pub fn cycle_per_page(&mut self) {
        let per_page = SortControls::from_query(&self.snapshot.query).next_per_page();
        self.set_status(format!("Per page: {}", per_page));
        self.spawn_list(move |list| async move { list.set_per_page(per_page).await });
    }

    pub fn toggle_scope(&mut self) {
        let scope = self.snapshot.scope.toggle();
        if scope.requires_auth() && !self.session_state.is_authenticated() {
            self.set_status(format!("{}: log in with [l] to see them", scope.title()));
        } else {
            self.set_status(format!("Showing {}", scope.title()));
        }
        self.selected_index = 0;
        self.spawn_list(move |list| async move { list.set_scope(scope).await });
    }

    pub fn open_login(&mut self) {
        self.login_form = LoginForm::new();
        self.focus = FormFocus::new(2);
        self.current_screen = CurrentScreen::Login;
    }

    pub fn open_register(&mut self) {
        self.register_form = RegistrationForm::new();
        self.focus = FormFocus::new(3);
        self.current_screen = CurrentScreen::Register;
    }

    pub fn open_shorten(&mut self) {
        self.shorten_form = ShortenForm::new();
        // URL input plus the "permanent" checkbox
        self.focus = FormFocus::new(2);
        self.current_screen = CurrentScreen::Shorten;
    }

    /// Validate locally, then log in in the background
    pub fn submit_login(&mut self) {
        if self.login_form.loading || !self.login_form.validate() {
            return;
        }
        self.login_form.loading = true;
        let mut form = self.login_form.clone();
        let session = Arc::clone(&self.session);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = form.submit(&session).await;
            let _ = tx.send(AppEvent::LoginFinished(form, result));
        });
    }

    pub fn submit_register(&mut self) {
        if self.register_form.loading || !self.register_form.validate() {
            return;
        }
        self.register_form.loading = true;
        let mut form = self.register_form.clone();
        let session = Arc::clone(&self.session);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = form.submit(&session).await;
            let _ = tx.send(AppEvent::RegisterFinished(form, result));
        });
    }

    pub fn submit_shorten(&mut self) {
        if self.shorten_form.loading {
            return;
        }
        self.shorten_form.loading = true;
        let mut form = self.shorten_form.clone();
        let session = Arc::clone(&self.session);
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = form.submit(&session, api.as_ref()).await;
            let _ = tx.send(AppEvent::ShortenFinished(form, result));
        });
    }

    pub fn logout(&mut self) {
        if !self.session_state.is_authenticated() {
            self.set_status("Not logged in");
            return;
        }
        let session = Arc::clone(&self.session);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            session.logout().await;
            let _ = tx.send(AppEvent::LoggedOut);
        });
    }

    /// Copy `text` to the system clipboard
    pub fn copy_to_clipboard(&mut self, text: &str) {
        match arboard::Clipboard::new().and_then(|mut c| c.set_text(text.to_string())) {
            Ok(()) => self.set_status(format!("Copied: {}", text)),
            Err(e) => self.set_error(format!("Clipboard unavailable: {}", e)),
        }
    }

    /// Apply one finished background task
    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoginFinished(form, result) => {
                self.login_form = form;
                if result.is_ok() {
                    let username = self.login_form.username.trim().to_string();
                    self.set_status(format!("Logged in as {}", username));
                    if self.current_screen == CurrentScreen::Login {
                        self.current_screen = CurrentScreen::Main;
                    }
                }
            }
            AppEvent::RegisterFinished(form, result) => {
                self.register_form = form;
                if result.is_ok() {
                    let username = self.register_form.username.trim().to_string();
                    self.set_status(format!("Registered and logged in as {}", username));
                    if self.current_screen == CurrentScreen::Register {
                        self.current_screen = CurrentScreen::Main;
                    }
                }
            }
            AppEvent::ShortenFinished(form, result) => {
                self.shorten_form = form;
                if let Ok(created) = result {
                    match created {
                        Some(created) => {
                            self.set_status(format!("Created {}", created.short_url))
                        }
                        None => self.set_status("URL shortened"),
                    }
                    if self.current_screen == CurrentScreen::Shorten {
                        self.current_screen = CurrentScreen::Main;
                    }
                    self.refresh_list();
                }
            }
            AppEvent::LoggedOut => self.set_status("Logged out"),
            AppEvent::ListFetched(outcome) => {
                debug!("List fetch finished: {:?}", outcome);
                self.sync_list();
            }
        }
    }

    /// React to a session transition published by [`crate::session::AuthSession`]
    pub fn apply_session_change(&mut self, state: SessionState) {
        self.shorten_form.on_session_change(state.is_authenticated());
        self.session_state = state.clone();
        self.spawn_list(move |list| async move { list.handle_session_change(&state).await });
    }

    /// One pass of background bookkeeping, run before every draw
    pub fn tick(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_app_event(event);
        }
        if self.session_rx.has_changed().unwrap_or(false) {
            let state = self.session_rx.borrow_and_update().clone();
            self.apply_session_change(state);
        }
        self.sync_list();
    }

    /// Wait for the next background result and apply it
    #[cfg(test)]
    pub(crate) async fn settle_one(&mut self) {
        if let Some(event) = self.events_rx.recv().await {
            self.handle_app_event(event);
        }
        self.tick();
    }
}
