use crate::listing::ListQuery;
use crate::models::{PerPage, SortField, SortOrder, SortSpec};

/// Sort field choices in display order
pub const SORT_FIELD_OPTIONS: [SortField; 4] = [
    SortField::CreatedAt,
    SortField::ExpiresAt,
    SortField::ClickCount,
    SortField::ShortCode,
];

/// Order choices in display order
pub const ORDER_OPTIONS: [SortOrder; 2] = [SortOrder::Desc, SortOrder::Asc];

pub const PER_PAGE_OPTIONS: [PerPage; 3] = [PerPage::Twenty, PerPage::Fifty, PerPage::Hundred];

/// Current selection of the sort bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortControls {
    pub sort: SortSpec,
    pub per_page: PerPage,
}

impl SortControls {
    pub fn from_query(query: &ListQuery) -> Self {
        Self {
            sort: query.sort,
            per_page: query.per_page,
        }
    }

    pub fn next_field(&self) -> SortSpec {
        SortSpec::new(self.sort.sort_by.next(), self.sort.order)
    }

    pub fn toggled_order(&self) -> SortSpec {
        SortSpec::new(self.sort.sort_by, self.sort.order.toggle())
    }

    pub fn next_per_page(&self) -> PerPage {
        self.per_page.next()
    }

    /// `Sort by: Created Date | Order: Descending | Per page: 20`
    pub fn summary(&self) -> String {
        format!(
            "Sort by: {} | Order: {} | Per page: {}",
            self.sort.sort_by.label(),
            self.sort.order.label(),
            self.per_page
        )
    }
}
