//! Wire types exchanged with the URL shortener backend
//!
//! Records are server-owned: the client never edits a `UrlRecord` in place,
//! it re-fetches the page instead.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// Owner of a short URL (present on admin-style listings)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlOwner {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    pub original_url: String,
    pub short_code: String,
    pub created_at: String,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub is_permanent: bool,
    #[serde(default)]
    pub click_count: u64,
    #[serde(default)]
    pub last_accessed: Option<String>,
    #[serde(default, rename = "user")]
    pub owner: Option<UrlOwner>,
}

/// Pagination block of a list response, taken verbatim from the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageInfo {
    /// Expected page count for `total` items at `per_page` items per page
    pub fn expected_pages(total: u64, per_page: u32) -> u32 {
        if per_page == 0 {
            return 0;
        }
        total.div_ceil(per_page as u64) as u32
    }

    /// Whether the server-reported fields agree with each other
    pub fn is_consistent(&self) -> bool {
        self.page >= 1
            && self.pages == Self::expected_pages(self.total, self.per_page)
            && self.has_next == (self.page < self.pages)
            && self.has_prev == (self.page > 1)
    }
}

/// 排序字段
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SortField {
    #[default]
    CreatedAt,
    ExpiresAt,
    ClickCount,
    ShortCode,
}

impl SortField {
    /// Label used by the sort controls
    pub fn label(self) -> &'static str {
        match self {
            Self::CreatedAt => "Created Date",
            Self::ExpiresAt => "Expiration Date",
            Self::ClickCount => "Click Count",
            Self::ShortCode => "Short Code",
        }
    }

    /// 循环切换到下一个排序字段
    pub fn next(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl std::str::FromStr for SortField {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|field| field.as_ref() == s.trim().to_lowercase())
            .ok_or_else(|| {
                format!(
                    "Invalid sort field: '{}'. Valid: created_at, expires_at, click_count, short_code",
                    s
                )
            })
    }
}

/// 排序方向
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn label(self) -> &'static str {
        match self {
            Self::Asc => "Ascending",
            Self::Desc => "Descending",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(format!("Invalid order: '{}'. Valid: asc, desc", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub sort_by: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(sort_by: SortField, order: SortOrder) -> Self {
        Self { sort_by, order }
    }
}

/// Allowed page sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter)]
pub enum PerPage {
    #[default]
    Twenty,
    Fifty,
    Hundred,
}

impl PerPage {
    pub fn get(self) -> u32 {
        match self {
            Self::Twenty => 20,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Twenty => Self::Fifty,
            Self::Fifty => Self::Hundred,
            Self::Hundred => Self::Twenty,
        }
    }
}

impl TryFrom<u32> for PerPage {
    type Error = String;
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::iter()
            .find(|p| p.get() == value)
            .ok_or_else(|| format!("Invalid page size: {}. Valid: 20, 50, 100", value))
    }
}

impl std::str::FromStr for PerPage {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid page size: '{}'. Valid: 20, 50, 100", s))?;
        Self::try_from(value)
    }
}

impl std::fmt::Display for PerPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl Serialize for PerPage {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.get())
    }
}

impl<'de> Deserialize<'de> for PerPage {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u32::deserialize(deserializer)?;
        Self::try_from(value).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlListResponse {
    pub urls: Vec<UrlRecord>,
    pub pagination: PageInfo,
    pub sort: SortSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// `/login` response; the session itself travels in the cookie
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenRequest {
    pub url: String,
    #[serde(default)]
    pub permanent: bool,
}

impl ShortenRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            permanent: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenedUrl {
    pub short_url: String,
    pub short_code: String,
    pub original_url: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub is_permanent: bool,
    #[serde(default)]
    pub expires_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    #[serde(default)]
    pub username: Option<String>,
}

impl AuthStatus {
    pub fn anonymous() -> Self {
        Self::default()
    }
}

/// Public statistics of a single short code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlStats {
    pub short_code: String,
    pub original_url: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub is_permanent: bool,
    #[serde(default)]
    pub click_count: u64,
    #[serde(default)]
    pub last_accessed: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}
