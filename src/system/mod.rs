//! System-level modules
//!
//! Process-wide setup that is not specific to one interface.

pub mod logging;

pub use logging::{ConsoleFallback, init_logging};
