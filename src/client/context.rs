//! Application context shared by the CLI and TUI
//!
//! Owns the API client and, once provisioned, the auth session.

use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::config::StaticConfig;
use crate::errors::{ClientError, Result};
use crate::session::AuthSession;

use super::{HttpApiClient, ShortenerApi};

/// Injection root for the interfaces.
///
/// Created once per CLI invocation or TUI session. The session is only
/// started by [`AppContext::provision`], so commands that never touch auth
/// (health, stats) never hit `/auth-status`.
pub struct AppContext {
    api: Arc<dyn ShortenerApi>,
    session: OnceCell<Arc<AuthSession>>,
}

impl AppContext {
    pub fn new(api: Arc<dyn ShortenerApi>) -> Self {
        Self {
            api,
            session: OnceCell::new(),
        }
    }

    /// Context backed by the HTTP client described in `config`
    pub fn from_config(config: &StaticConfig) -> Result<Self> {
        let api = HttpApiClient::from_config(config)?;
        Ok(Self::new(Arc::new(api)))
    }

    pub fn api(&self) -> Arc<dyn ShortenerApi> {
        Arc::clone(&self.api)
    }

    /// Start the session (first call only) and return it
    pub async fn provision(&self) -> Arc<AuthSession> {
        let session = self
            .session
            .get_or_init(|| async { Arc::new(AuthSession::start(self.api()).await) })
            .await;
        Arc::clone(session)
    }

    /// The provisioned session.
    ///
    /// Fails with [`ClientError::ContextMissing`] before [`provision`](Self::provision).
    pub fn session(&self) -> Result<Arc<AuthSession>> {
        self.session
            .get()
            .cloned()
            .ok_or(ClientError::ContextMissing("AuthSession"))
    }

    pub fn is_provisioned(&self) -> bool {
        self.session.initialized()
    }
}
