//! CLI interface module
//!
//! One function per subcommand in [`commands`]; this module wires them to
//! the application context and owns the CLI error type.

pub mod commands;

use std::fmt;
use std::sync::Arc;

use crate::cli::{Commands, ConfigCommands};
use crate::client::AppContext;
use crate::config::StaticConfig;
use crate::errors::ClientError;
use commands::{
    config_generate, config_show, health_check, list_urls, login, logout, register, session_status,
    shorten_url, url_stats,
};

#[derive(Debug)]
pub enum CliError {
    /// Failure reported by the client layer
    Client(ClientError),
    /// Bad or missing user input
    InputError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::Client(err) => err.format_simple(),
            CliError::InputError(msg) => format!("Input error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::Client(err) => err.format_colored(),
            CliError::InputError(msg) => {
                format!("{} {}", "Input error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<ClientError> for CliError {
    fn from(err: ClientError) -> Self {
        CliError::Client(err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Client(ClientError::from(err))
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, config: Arc<StaticConfig>) -> Result<(), CliError> {
    // Config commands never talk to the backend, so the client is built lazily
    let ctx = || AppContext::from_config(&config);

    match cmd {
        Commands::Config { action } => match action {
            ConfigCommands::Generate { output_path, force } => {
                config_generate(output_path, force).await
            }
            ConfigCommands::Show => config_show(&config),
        },
        Commands::List(args) => list_urls(&ctx()?, &config, args).await,
        Commands::Shorten { url, permanent } => shorten_url(&ctx()?, url, permanent).await,
        Commands::Login(args) => login(&ctx()?, args).await,
        Commands::Register(args) => register(&ctx()?, args).await,
        Commands::Logout => logout(&ctx()?).await,
        Commands::Status => session_status(&ctx()?).await,
        Commands::Stats { short_code } => url_stats(&ctx()?, &short_code).await,
        Commands::Health => health_check(&ctx()?).await,

        #[cfg(feature = "tui")]
        Commands::Tui => Err(CliError::CommandError(
            "The TUI is not a CLI command; run `shortlink-console tui`".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_keeps_its_format() {
        let err = CliError::from(ClientError::api(404, "Short URL not found"));
        assert_eq!(err.format_simple(), "API Error: Short URL not found");
        assert_eq!(
            CliError::InputError("username is empty".into()).to_string(),
            "Input error: username is empty"
        );
    }
}
