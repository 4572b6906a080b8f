//! CLI mode
//!
//! Runs a single subcommand and returns.

use std::sync::Arc;

use crate::cli::Commands;
use crate::config::StaticConfig;
use crate::interfaces::cli::CliError;

/// Run CLI mode
pub async fn run_cli(command: Commands, config: Arc<StaticConfig>) -> Result<(), CliError> {
    crate::interfaces::cli::run_cli_command(command, config).await
}
