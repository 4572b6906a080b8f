//! TUI application state
//!
//! - state: App struct, screens, background events
//! - navigation: table cursor
//! - operations: list queries, form submits, session sync

mod navigation;
mod operations;
mod state;

pub use state::{App, CurrentScreen};
