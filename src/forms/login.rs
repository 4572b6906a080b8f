use tracing::debug;

use super::FormFields;
use crate::errors::{ClientError, Result};
use crate::session::AuthSession;

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Enter both username and password";

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub error: Option<String>,
    pub loading: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&mut self) -> bool {
        if self.username.trim().is_empty() || self.password.trim().is_empty() {
            self.error = Some(MISSING_CREDENTIALS_MESSAGE.to_string());
            return false;
        }
        self.error = None;
        true
    }

    /// Validate, then log in through `session`
    pub async fn submit(&mut self, session: &AuthSession) -> Result<()> {
        if !self.validate() {
            return Err(ClientError::validation(MISSING_CREDENTIALS_MESSAGE));
        }

        self.loading = true;
        let result = session.login(&self.username, &self.password).await;
        self.loading = false;

        match result {
            Ok(()) => {
                debug!("Login form submitted for {}", self.username.trim());
                self.password.clear();
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }
}

impl FormFields for LoginForm {
    fn field_count(&self) -> usize {
        2
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.username),
            1 => Some(&mut self.password),
            _ => None,
        }
    }
}
