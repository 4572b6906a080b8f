//! App state definition and basic state management
//!
//! 包含核心 App 结构和基础状态管理

mod form_state;

pub use form_state::FormFocus;

use std::sync::Arc;

use ratatui::widgets::TableState;
use tokio::sync::{mpsc, watch};

use crate::client::{AppContext, ShortenerApi};
use crate::config::StaticConfig;
use crate::errors::Result;
use crate::forms::{LoginForm, RegistrationForm, ShortenForm};
use crate::listing::{FetchOutcome, ListQuery, ListSnapshot, ListViewModel};
use crate::models::ShortenedUrl;
use crate::presentation::UrlRow;
use crate::session::{AuthSession, SessionState};

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Main,
    Login,
    Register,
    Shorten,
    ViewDetails,
    Help,
    Exiting,
}

/// Completion of a background task, drained by the event loop
#[derive(Debug)]
pub enum AppEvent {
    LoginFinished(LoginForm, Result<()>),
    RegisterFinished(RegistrationForm, Result<()>),
    ShortenFinished(ShortenForm, Result<Option<ShortenedUrl>>),
    LoggedOut,
    ListFetched(FetchOutcome),
}

pub struct App {
    pub api: Arc<dyn ShortenerApi>,
    pub session: Arc<AuthSession>,
    pub list: Arc<ListViewModel>,
    pub short_url_base: String,
    pub current_screen: CurrentScreen,

    // Session as last seen by the UI
    pub session_state: SessionState,

    // List state mirrored from the view-model each tick
    pub snapshot: ListSnapshot,
    pub rows: Vec<UrlRow>,

    // Forms
    pub login_form: LoginForm,
    pub register_form: RegistrationForm,
    pub shorten_form: ShortenForm,
    pub focus: FormFocus,

    // UI state
    pub selected_index: usize,
    pub table_state: TableState,
    pub status_message: String,
    pub error_message: String,

    pub(crate) events_tx: mpsc::UnboundedSender<AppEvent>,
    pub(crate) events_rx: mpsc::UnboundedReceiver<AppEvent>,
    pub(crate) session_rx: watch::Receiver<SessionState>,
}

impl App {
    /// Provision the session and start the first list fetch
    pub async fn new(ctx: &AppContext, config: &StaticConfig) -> Result<App> {
        let session = ctx.provision().await;
        let query = ListQuery::new(config.ui.per_page()?, config.ui.sort()?);
        let list = Arc::new(ListViewModel::new(
            ctx.api(),
            Arc::clone(&session),
            config.ui.scope()?,
            query,
        ));

        let mut session_rx = session.subscribe();
        let session_state = session_rx.borrow_and_update().clone();
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let mut table_state = TableState::default();
        table_state.select(Some(0));

        let mut app = App {
            api: ctx.api(),
            session,
            list,
            short_url_base: config.short_url_base().to_string(),
            current_screen: CurrentScreen::Main,
            session_state,
            snapshot: ListSnapshot::default(),
            rows: Vec::new(),
            login_form: LoginForm::new(),
            register_form: RegistrationForm::new(),
            shorten_form: ShortenForm::new(),
            focus: FormFocus::default(),
            selected_index: 0,
            table_state,
            status_message: String::new(),
            error_message: String::new(),
            events_tx,
            events_rx,
            session_rx,
        };
        app.sync_list();
        app.refresh_list();
        Ok(app)
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = message.into();
        self.status_message.clear();
    }

    pub fn clear_messages(&mut self) {
        self.status_message.clear();
        self.error_message.clear();
    }

    /// Copy the view-model state; rows are rebuilt only when it changed
    pub fn sync_list(&mut self) {
        let snapshot = self.list.snapshot();
        if snapshot == self.snapshot {
            return;
        }
        self.rows = snapshot
            .data
            .as_ref()
            .map(|data| {
                data.urls
                    .iter()
                    .map(|record| UrlRow::from_record(record, &self.short_url_base))
                    .collect()
            })
            .unwrap_or_default();
        self.snapshot = snapshot;
        self.clamp_selection();
    }

    pub fn is_loading(&self) -> bool {
        self.snapshot.loading
    }

    /// Whether any form submit is in flight
    pub fn is_submitting(&self) -> bool {
        self.login_form.loading || self.register_form.loading || self.shorten_form.loading
    }
}
