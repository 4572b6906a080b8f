// UI submodules
mod common;
mod exiting;
mod help;
mod login;
mod main_screen;
mod register;
mod shorten;
mod view_details;
pub mod widgets;

pub use common::{draw_footer, draw_status_bar, draw_title_bar};

pub use exiting::draw_exiting_screen;
pub use help::draw_help_screen;
pub use login::draw_login_screen;
pub use main_screen::draw_main_screen;
pub use register::draw_register_screen;
pub use shorten::draw_shorten_screen;
pub use view_details::draw_view_details_screen;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);

    // 列表始终在底层，弹窗覆盖其上
    draw_main_screen(frame, app, main_chunks[1]);
    match app.current_screen {
        CurrentScreen::Main => {}
        CurrentScreen::Login => draw_login_screen(frame, app, main_chunks[1]),
        CurrentScreen::Register => draw_register_screen(frame, app, main_chunks[1]),
        CurrentScreen::Shorten => draw_shorten_screen(frame, app, main_chunks[1]),
        CurrentScreen::ViewDetails => draw_view_details_screen(frame, app, main_chunks[1]),
        CurrentScreen::Help => draw_help_screen(frame, main_chunks[1]),
        CurrentScreen::Exiting => draw_exiting_screen(frame, main_chunks[1]),
    }

    draw_status_bar(frame, app, main_chunks[2]);
    draw_footer(frame, app, main_chunks[3]);
}
