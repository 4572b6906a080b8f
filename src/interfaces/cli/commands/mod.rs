//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod auth;
mod config_gen;
mod list;
mod shorten;
mod system;

pub use auth::*;
pub use config_gen::*;
pub use list::*;
pub use shorten::*;
pub use system::*;
