//! One table row per short URL

use chrono::{DateTime, Utc};

use crate::models::UrlRecord;
use crate::utils::formatters::{
    URL_TRUNCATE_LENGTH, format_click_count, format_relative_date_at, is_expired_at, truncate_url,
};

pub const TABLE_HEADERS: [&str; 6] = [
    "Original URL",
    "Short Code",
    "Status",
    "Clicks",
    "Dates",
    "User",
];

pub const EMPTY_TITLE: &str = "No URLs found";
pub const EMPTY_DETAIL: &str = "There are no shortened URLs to display.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlStatus {
    Expired,
    Permanent,
    Active,
}

impl UrlStatus {
    /// Expired wins over permanent, which wins over active
    pub fn of(record: &UrlRecord, now: DateTime<Utc>) -> Self {
        if is_expired_at(record.expires_at.as_deref(), record.is_permanent, now) {
            Self::Expired
        } else if record.is_permanent {
            Self::Permanent
        } else {
            Self::Active
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Expired => "Expired",
            Self::Permanent => "Permanent",
            Self::Active => "Active",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRow {
    pub original_url: String,
    pub display_url: String,
    pub short_code: String,
    pub short_url: String,
    pub status: UrlStatus,
    pub clicks: String,
    pub last_accessed: Option<String>,
    pub created: String,
    pub expires: Option<String>,
    pub owner: Option<String>,
}

impl UrlRow {
    pub fn from_record(record: &UrlRecord, short_url_base: &str) -> Self {
        Self::from_record_at(record, short_url_base, Utc::now())
    }

    pub fn from_record_at(record: &UrlRecord, short_url_base: &str, now: DateTime<Utc>) -> Self {
        let relative = |value: &str| format_relative_date_at(Some(value), now);

        let expires = match (&record.expires_at, record.is_permanent) {
            (Some(at), false) => Some(format!("Expires: {}", relative(at))),
            _ => None,
        };

        Self {
            original_url: record.original_url.clone(),
            display_url: truncate_url(&record.original_url, URL_TRUNCATE_LENGTH),
            short_code: record.short_code.clone(),
            short_url: format!(
                "{}/{}",
                short_url_base.trim_end_matches('/'),
                record.short_code
            ),
            status: UrlStatus::of(record, now),
            clicks: format_click_count(record.click_count),
            last_accessed: record
                .last_accessed
                .as_deref()
                .map(|at| format!("Last: {}", relative(at))),
            created: format!("Created: {}", relative(&record.created_at)),
            expires,
            owner: record.owner.as_ref().map(|o| o.username.clone()),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.status == UrlStatus::Expired
    }

    /// Clicks plus the last-access line, as shown in the "Clicks" column
    pub fn clicks_cell(&self) -> String {
        match &self.last_accessed {
            Some(last) => format!("{} ({})", self.clicks, last),
            None => self.clicks.clone(),
        }
    }

    /// Created plus the optional expiry line, as shown in the "Dates" column
    pub fn dates_cell(&self) -> String {
        match &self.expires {
            Some(expires) => format!("{} | {}", self.created, expires),
            None => self.created.clone(),
        }
    }
}
