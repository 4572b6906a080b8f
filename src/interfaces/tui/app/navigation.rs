//! Navigation and selection logic

use super::state::App;
use crate::interfaces::tui::constants::PAGE_SCROLL_STEP;
use crate::presentation::UrlRow;

impl App {
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
        self.table_state.select(Some(self.selected_index));
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index < self.rows.len().saturating_sub(1) {
            self.selected_index += 1;
        }
        self.table_state.select(Some(self.selected_index));
    }

    pub fn jump_to_top(&mut self) {
        self.selected_index = 0;
        self.table_state.select(Some(self.selected_index));
    }

    pub fn jump_to_bottom(&mut self) {
        self.selected_index = self.rows.len().saturating_sub(1);
        self.table_state.select(Some(self.selected_index));
    }

    pub fn scroll_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(PAGE_SCROLL_STEP);
        self.table_state.select(Some(self.selected_index));
    }

    pub fn scroll_down(&mut self) {
        let max_index = self.rows.len().saturating_sub(1);
        self.selected_index = (self.selected_index + PAGE_SCROLL_STEP).min(max_index);
        self.table_state.select(Some(self.selected_index));
    }

    pub fn selected_row(&self) -> Option<&UrlRow> {
        self.rows.get(self.selected_index)
    }

    /// Keep the cursor inside the current page after a reload
    pub(crate) fn clamp_selection(&mut self) {
        let max_index = self.rows.len().saturating_sub(1);
        if self.selected_index > max_index {
            self.selected_index = max_index;
        }
        self.table_state.select(Some(self.selected_index));
    }
}
