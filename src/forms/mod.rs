//! Form state for the login, registration and shorten dialogs
//!
//! Each form validates locally first; a failed validation never reaches the
//! network. Errors end up in `error` as the inline text to show.

pub mod login;
pub mod registration;
pub mod shorten;

pub use login::LoginForm;
pub use registration::{
    MINIMUM_PASSWORD_LENGTH, MINIMUM_USERNAME_LENGTH, RegistrationForm, is_strong_password,
};
pub use shorten::ShortenForm;

/// Text inputs of a form, addressed by focus index
pub trait FormFields {
    /// Number of editable fields
    fn field_count(&self) -> usize;

    /// Mutable text of field `index`
    fn field_mut(&mut self, index: usize) -> Option<&mut String>;
}
