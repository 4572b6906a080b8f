use crate::models::PageInfo;

pub const MAX_VISIBLE_PAGES: u32 = 5;

/// Page numbers to offer around `page`.
///
/// At most [`MAX_VISIBLE_PAGES`] consecutive numbers, centred on `page` where
/// possible and always inside `1..=pages`.
pub fn page_window(page: u32, pages: u32) -> Vec<u32> {
    if pages == 0 {
        return Vec::new();
    }
    let page = page.clamp(1, pages);
    let half = MAX_VISIBLE_PAGES / 2;

    let mut start = page.saturating_sub(half).max(1);
    let end = pages.min(start.saturating_add(MAX_VISIBLE_PAGES - 1));
    if end - start + 1 < MAX_VISIBLE_PAGES {
        start = end.saturating_sub(MAX_VISIBLE_PAGES - 1).max(1);
    }
    (start..=end).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub current: u32,
    pub pages: Vec<u32>,
    pub has_prev: bool,
    pub has_next: bool,
    pub first_item: u64,
    pub last_item: u64,
    pub total: u64,
}

impl PaginationView {
    pub fn from_page_info(info: &PageInfo) -> Self {
        let (first_item, last_item) = if info.total == 0 {
            (0, 0)
        } else {
            let per_page = info.per_page as u64;
            let first = (info.page.max(1) as u64 - 1) * per_page + 1;
            let last = (info.page.max(1) as u64 * per_page).min(info.total);
            (first.min(last), last)
        };
        Self {
            current: info.page,
            pages: page_window(info.page, info.pages),
            has_prev: info.has_prev,
            has_next: info.has_next,
            first_item,
            last_item,
            total: info.total,
        }
    }

    /// `Showing 21-40 of 45 URLs`
    pub fn summary(&self) -> String {
        format!(
            "Showing {}-{} of {} URLs",
            self.first_item, self.last_item, self.total
        )
    }

    pub fn is_current(&self, page: u32) -> bool {
        self.current == page
    }
}
