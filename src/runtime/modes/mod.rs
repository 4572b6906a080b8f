//! Mode routing
//!
//! This module provides unified entry points for the execution modes:
//! - CLI mode (one command, then exit)
//! - TUI mode (interactive terminal UI)
//!
//! The mode selection is based on the parsed subcommand and feature flags.

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "cli")]
pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;

use crate::cli::Commands;
use crate::system::ConsoleFallback;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    #[cfg(feature = "cli")]
    Cli,
    #[cfg(feature = "tui")]
    Tui,
    /// Nothing to run; print usage
    Help,
}

impl Mode {
    /// Where logs go when no log file is configured
    pub fn log_fallback(&self) -> ConsoleFallback {
        match self {
            #[cfg(feature = "tui")]
            Mode::Tui => ConsoleFallback::Sink,
            _ => ConsoleFallback::Stderr,
        }
    }
}

/// Detect which mode to run from the parsed subcommand
///
/// # Mode Detection Logic
/// 1. `tui`, or no subcommand with the TUI feature enabled -> TUI mode
/// 2. Any other subcommand with the CLI feature enabled -> CLI mode
/// 3. Otherwise -> Help
pub fn detect_mode(command: Option<&Commands>) -> Mode {
    match command {
        #[cfg(feature = "tui")]
        None | Some(Commands::Tui) => Mode::Tui,
        #[cfg(not(feature = "tui"))]
        None => Mode::Help,
        #[cfg(feature = "cli")]
        Some(_) => Mode::Cli,
        #[cfg(not(feature = "cli"))]
        Some(_) => Mode::Help,
    }
}
