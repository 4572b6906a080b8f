//! Session state for the current user
//!
//! The backend keeps the session in a cookie; this module only tracks what
//! the console believes about it and notifies subscribers of transitions.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::client::ShortenerApi;
use crate::errors::Result;
use crate::models::Credentials;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Status not checked yet
    #[default]
    Unknown,
    Anonymous,
    /// The backend may confirm a session without naming its user
    Authenticated { username: Option<String> },
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Authenticated { username } => username.as_deref(),
            _ => None,
        }
    }

    /// Short text for status bars
    pub fn describe(&self) -> String {
        match self {
            Self::Unknown => "Checking session...".to_string(),
            Self::Anonymous => "Not logged in".to_string(),
            Self::Authenticated {
                username: Some(username),
            } => format!("Logged in as {}", username),
            Self::Authenticated { username: None } => "Logged in".to_string(),
        }
    }
}

pub struct AuthSession {
    api: Arc<dyn ShortenerApi>,
    state: watch::Sender<SessionState>,
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSession")
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

impl AuthSession {
    /// Session in [`SessionState::Unknown`]; nothing is sent yet
    pub fn new(api: Arc<dyn ShortenerApi>) -> Self {
        Self {
            api,
            state: watch::Sender::new(SessionState::Unknown),
        }
    }

    /// Create the session and resolve its initial state from `/auth-status`
    pub async fn start(api: Arc<dyn ShortenerApi>) -> Self {
        let session = Self::new(api);
        session.check_status().await;
        session
    }

    /// Ask the backend who we are. Always lands in a known state.
    pub async fn check_status(&self) -> SessionState {
        let status = self.api.auth_status().await;
        let next = if status.authenticated {
            SessionState::Authenticated {
                username: status.username,
            }
        } else {
            SessionState::Anonymous
        };
        debug!("Auth status resolved: {:?}", next);
        self.transition(next.clone());
        next
    }

    /// Log in; the state is left untouched on failure
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        self.api
            .login(&Credentials::new(username, password))
            .await?;
        self.transition(SessionState::Authenticated {
            username: Some(username.trim().to_string()),
        });
        Ok(())
    }

    /// Register a new account; the backend signs the new user in
    pub async fn register(&self, username: &str, password: &str) -> Result<()> {
        self.api
            .register(&Credentials::new(username, password))
            .await?;
        self.transition(SessionState::Authenticated {
            username: Some(username.trim().to_string()),
        });
        Ok(())
    }

    /// End the session. Local state is cleared even when the request fails.
    pub async fn logout(&self) {
        if let Err(e) = self.api.logout().await {
            warn!("Logout request failed, clearing local session anyway: {}", e);
        }
        self.transition(SessionState::Anonymous);
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn username(&self) -> Option<String> {
        self.state.borrow().username().map(str::to_string)
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    fn transition(&self, next: SessionState) {
        let changed = self.state.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next.clone();
            true
        });
        if changed {
            info!("Session: {}", next.describe());
        }
    }
}
