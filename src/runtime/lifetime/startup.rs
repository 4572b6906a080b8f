//! Process startup shared by the CLI and TUI
//!
//! Loads `.env`, the configuration file and logging, in that order.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;

use crate::cli::Cli;
use crate::config::{StaticConfig, init_config, update_config};
use crate::system::{ConsoleFallback, init_logging};

pub struct StartupContext {
    pub config: Arc<StaticConfig>,
    /// 日志写入线程的守卫，进程结束前不能释放
    pub log_guard: WorkerGuard,
}

/// Load configuration and logging for one run.
///
/// `--api-url` is applied on top of the file and environment values.
pub fn prepare_startup(cli: &Cli, fallback: ConsoleFallback) -> Result<StartupContext> {
    dotenvy::dotenv().ok();

    let mut config = init_config(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(api_url) = cli.api_url.clone() {
        config = update_config(|c| c.api.base_url = api_url).context("Invalid --api-url")?;
    }

    let log_guard =
        init_logging(&config.logging, fallback).context("Failed to initialize logging")?;

    debug!(
        "Configuration loaded: api={}, scope={}, per_page={}",
        config.api.base_url, config.ui.default_scope, config.ui.default_per_page
    );

    Ok(StartupContext { config, log_guard })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_bad_api_url_fails_with_context() {
        let cli = Cli::parse_from(["shortlink-console", "--api-url", "ftp://example.com", "health"]);
        let err = match prepare_startup(&cli, ConsoleFallback::Sink) {
            Err(e) => e,
            Ok(_) => panic!("ftp base url must be rejected"),
        };
        let message = format!("{:#}", err);
        assert!(message.starts_with("Invalid --api-url"), "{}", message);
        assert!(message.contains("must use http or https"));
    }
}
