//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for shortlink-console using clap's derive macros.

use clap::{Args, Parser, Subcommand};

use crate::client::UrlScope;
use crate::models::{PerPage, SortField, SortOrder};

/// shortlink-console - terminal client for the URL shortener service
#[derive(Parser, Debug)]
#[command(name = "shortlink-console")]
#[command(version)]
#[command(about = "Terminal client for the URL shortener service", long_about = None)]
pub struct Cli {
    /// Config file (default: shortlink-console.toml if present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Override api.base_url for this run
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start TUI mode
    #[cfg(feature = "tui")]
    Tui,

    /// List shortened URLs
    List(ListArgs),

    /// Shorten a URL (requires login)
    Shorten {
        /// URL to shorten
        url: String,

        /// Create a link that never expires
        #[arg(long)]
        permanent: bool,
    },

    /// Log in and keep the session for later commands
    Login(CredentialArgs),

    /// Create an account; the new user is logged in
    Register(CredentialArgs),

    /// End the current session
    Logout,

    /// Show who is logged in
    Status,

    /// Show public statistics of a short code
    Stats {
        /// Short code to look up
        short_code: String,
    },

    /// Check that the backend is reachable
    Health,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Only your own URLs (default)
    #[arg(long, conflicts_with = "all")]
    pub mine: bool,

    /// Every URL visible to the session
    #[arg(long)]
    pub all: bool,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Page size: 20, 50 or 100
    #[arg(long)]
    pub per_page: Option<PerPage>,

    /// created_at, expires_at, click_count or short_code
    #[arg(long)]
    pub sort_by: Option<SortField>,

    /// asc or desc
    #[arg(long)]
    pub order: Option<SortOrder>,

    /// Print the raw response as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// Explicit flag wins, otherwise the configured default
    pub fn scope(&self, default: UrlScope) -> UrlScope {
        if self.all {
            UrlScope::All
        } else if self.mine {
            UrlScope::Mine
        } else {
            default
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct CredentialArgs {
    /// Username (prompted when omitted)
    #[arg(long, short = 'u')]
    pub username: Option<String>,

    /// Password (prompted when omitted)
    #[arg(long, short = 'p')]
    pub password: Option<String>,
}

/// Configuration management commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: shortlink-console.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}
