//! Registration form and its local validation rules

use super::FormFields;
use crate::errors::{ClientError, Result};
use crate::session::AuthSession;

pub const MINIMUM_USERNAME_LENGTH: usize = 4;
pub const MINIMUM_PASSWORD_LENGTH: usize = 8;

const ALL_FIELDS_REQUIRED: &str = "All fields are required";
const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";
const WEAK_PASSWORD: &str = "Password must be at least 8 characters long and include lower and uppercase characters and numbers.";

/// At least 8 characters, one digit, one lowercase and one uppercase letter,
/// no line breaks
pub fn is_strong_password(password: &str) -> bool {
    const LINE_BREAKS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

    password.chars().count() >= MINIMUM_PASSWORD_LENGTH
        && !password.contains(LINE_BREAKS)
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub error: Option<String>,
    pub loading: bool,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first failing rule, if any
    fn first_violation(&self) -> Option<String> {
        let username = self.username.trim();
        if username.is_empty()
            || self.password.trim().is_empty()
            || self.confirm_password.trim().is_empty()
        {
            return Some(ALL_FIELDS_REQUIRED.to_string());
        }
        // Whitespace is significant in passwords
        if self.password != self.confirm_password {
            return Some(PASSWORDS_DO_NOT_MATCH.to_string());
        }
        if username.chars().count() < MINIMUM_USERNAME_LENGTH {
            return Some(format!(
                "Username must be at least {} characters long",
                MINIMUM_USERNAME_LENGTH
            ));
        }
        if !is_strong_password(&self.password) {
            return Some(WEAK_PASSWORD.to_string());
        }
        None
    }

    /// Check every rule; the first failure lands in `error`
    pub fn validate(&mut self) -> bool {
        self.error = self.first_violation();
        self.error.is_none()
    }

    /// Validate, then register through `session`
    pub async fn submit(&mut self, session: &AuthSession) -> Result<()> {
        if !self.validate() {
            let message = self.error.clone().unwrap_or_default();
            return Err(ClientError::validation(message));
        }

        self.loading = true;
        let result = session
            .register(self.username.trim(), &self.password)
            .await;
        self.loading = false;

        match result {
            Ok(()) => {
                self.password.clear();
                self.confirm_password.clear();
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }
}

impl FormFields for RegistrationForm {
    fn field_count(&self) -> usize {
        3
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.username),
            1 => Some(&mut self.password),
            2 => Some(&mut self.confirm_password),
            _ => None,
        }
    }
}
