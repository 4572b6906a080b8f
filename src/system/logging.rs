//! Logging system initialization
//!
//! This module provides functions to initialize the tracing/logging system
//! based on application configuration.

use std::io::Write;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::LoggingConfig;
use crate::errors::{ClientError, Result};

/// Where log lines go when no log file is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleFallback {
    /// stderr, keeping stdout clean for command output
    Stderr,
    /// Discard; the TUI owns the terminal
    Sink,
}

fn build_writer(
    config: &LoggingConfig,
    fallback: ConsoleFallback,
) -> Result<Box<dyn Write + Send + Sync>> {
    let log_file = config.file.as_deref().filter(|f| !f.trim().is_empty());

    let Some(log_file) = log_file else {
        return Ok(match fallback {
            ConsoleFallback::Stderr => Box::new(std::io::stderr()),
            ConsoleFallback::Sink => Box::new(std::io::sink()),
        });
    };

    let path = Path::new(log_file);
    if config.enable_rotation {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let filename = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("shortlink-console.log");
        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(filename.trim_end_matches(".log"))
            .filename_suffix("log")
            .max_log_files(config.max_backups.max(1) as usize)
            .build(dir)
            .map_err(|e| ClientError::io(format!("Failed to create rolling log appender: {}", e)))?;
        Ok(Box::new(appender))
    } else {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| ClientError::io(format!("Failed to open log file {}: {}", log_file, e)))?;
        Ok(Box::new(file))
    }
}

/// Initialize logging system based on configuration
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
///
/// A second call (tests, embedding) leaves the first subscriber in place.
pub fn init_logging(config: &LoggingConfig, fallback: ConsoleFallback) -> Result<WorkerGuard> {
    let writer = build_writer(config, fallback)?;
    let to_console = config.file.as_deref().is_none_or(|f| f.trim().is_empty());

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| ClientError::config(format!("logging.level '{}': {}", config.level, e)))?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(to_console && fallback == ConsoleFallback::Stderr);

    let result = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    if let Err(e) = result {
        tracing::debug!("Logging already initialized: {}", e);
    }

    Ok(guard)
}
