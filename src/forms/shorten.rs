use tracing::info;

use super::FormFields;
use crate::client::ShortenerApi;
use crate::errors::{ClientError, Result};
use crate::models::{ShortenRequest, ShortenedUrl};
use crate::session::AuthSession;

#[derive(Debug, Clone, Default)]
pub struct ShortenForm {
    pub url: String,
    pub permanent: bool,
    pub error: Option<String>,
    pub loading: bool,
    /// Short URL of the last successful submit
    pub last_created: Option<ShortenedUrl>,
}

impl ShortenForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop a leftover "login required" error once a session exists
    pub fn on_session_change(&mut self, authenticated: bool) {
        if authenticated {
            self.error = None;
        }
    }

    /// Submit the URL. Requires an authenticated session.
    ///
    /// On success the input is cleared. A 401 from the server ends the
    /// session before the error is returned.
    pub async fn submit(
        &mut self,
        session: &AuthSession,
        api: &dyn ShortenerApi,
    ) -> Result<Option<ShortenedUrl>> {
        self.error = None;
        if !session.is_authenticated() {
            let err = ClientError::auth_required();
            self.error = Some(err.user_message());
            return Err(err);
        }

        self.loading = true;
        let request = ShortenRequest {
            url: self.url.clone(),
            permanent: self.permanent,
        };
        let result = api.shorten_url(&request).await;
        self.loading = false;

        match result {
            Ok(created) => {
                if let Some(created) = &created {
                    info!("Created {} -> {}", created.short_url, created.original_url);
                }
                self.url.clear();
                self.last_created = created.clone();
                Ok(created)
            }
            Err(e) => {
                if matches!(e, ClientError::AuthRequired(_)) {
                    session.logout().await;
                }
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }
}

impl FormFields for ShortenForm {
    fn field_count(&self) -> usize {
        1
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        (index == 0).then_some(&mut self.url)
    }
}
