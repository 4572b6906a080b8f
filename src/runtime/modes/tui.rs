//! TUI mode
//!
//! Builds the HTTP-backed context and hands the terminal to the TUI.

use std::sync::Arc;

use crate::client::AppContext;
use crate::config::StaticConfig;

/// Run TUI mode
pub async fn run_tui(config: Arc<StaticConfig>) -> color_eyre::Result<()> {
    let ctx = Arc::new(AppContext::from_config(&config)?);
    crate::interfaces::tui::run_tui(ctx, config).await
}
