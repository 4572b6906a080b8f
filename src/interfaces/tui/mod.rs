//! Terminal User Interface (TUI) module
//!
//! Interactive browser for short URLs: paginated table, sort controls,
//! login/registration dialogs and a shorten form.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::info;

mod app;
mod constants;
mod event_handler;
mod input_handler;
mod ui;

use app::App;
use ui::ui;

use crate::client::AppContext;
use crate::config::StaticConfig;

/// Run the TUI application
pub async fn run_tui(ctx: Arc<AppContext>, config: Arc<StaticConfig>) -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Build the app before touching the terminal so startup errors print normally
    let mut app = App::new(&ctx, &config).await?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(10));

    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, tick_rate).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("TUI closed");
    res
}

/// Main application loop
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    app: &mut App,
    tick_rate: Duration,
) -> color_eyre::Result<()> {
    loop {
        // Apply finished background work
        app.tick();

        terminal.draw(|f| ui(f, app))?;

        // 超时即进入下一轮 tick
        if !event::poll(tick_rate)? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && event_handler::handle_key_event(app, key.code)
        {
            return Ok(());
        }
    }
}
