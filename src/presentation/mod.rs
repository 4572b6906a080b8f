//! Render-ready view data derived from list state
//!
//! Nothing in here does I/O; the TUI and CLI draw whatever these produce.

pub mod pagination;
pub mod sort_controls;
pub mod table;

pub use pagination::{MAX_VISIBLE_PAGES, PaginationView, page_window};
pub use sort_controls::{ORDER_OPTIONS, PER_PAGE_OPTIONS, SORT_FIELD_OPTIONS, SortControls};
pub use table::{EMPTY_DETAIL, EMPTY_TITLE, TABLE_HEADERS, UrlRow, UrlStatus};
