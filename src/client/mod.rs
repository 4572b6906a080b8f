//! Client layer for the CLI/TUI interfaces
//!
//! One operation per backend capability, behind the [`ShortenerApi`] trait.
//!
//! # Architecture
//!
//! ```text
//! CLI/TUI → AppContext ──→ AuthSession ──┐
//!                      └─→ ListViewModel ┴→ ShortenerApi (HttpApiClient)
//! ```
//!
//! # Error policy
//!
//! - non-2xx → `ClientError::Api { status, message }` with the server's `{error}` text
//! - 401 on `/shorten` → `ClientError::AuthRequired` (fixed message)
//! - transport / decode failure → `ClientError::Unexpected`
//! - `/auth-status` never fails; every failure becomes `{authenticated: false}`

mod context;
mod cookies;
mod http;

pub use context::AppContext;
pub use cookies::CookieStore;
pub use http::HttpApiClient;

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::{
    AuthStatus, Credentials, HealthStatus, LoginResponse, PerPage, ShortenRequest, ShortenedUrl,
    SortField, SortOrder, UrlListResponse, UrlStats,
};

/// Which listing endpoint a view reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrlScope {
    /// `/urls`
    All,
    /// `/my-urls`, needs an authenticated session
    #[default]
    Mine,
}

impl UrlScope {
    pub fn path(self) -> &'static str {
        match self {
            Self::All => "/urls",
            Self::Mine => "/my-urls",
        }
    }

    pub fn requires_auth(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::All => "All URLs",
            Self::Mine => "My URLs",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::All => Self::Mine,
            Self::Mine => Self::All,
        }
    }
}

impl std::str::FromStr for UrlScope {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "mine" | "my" => Ok(Self::Mine),
            _ => Err(format!("Invalid scope: '{}'. Valid: all, mine", s)),
        }
    }
}

/// Query parameters of a list request; `None` fields are not sent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListUrlsParams {
    pub page: Option<u32>,
    pub per_page: Option<PerPage>,
    pub sort_by: Option<SortField>,
    pub order: Option<SortOrder>,
}

impl ListUrlsParams {
    /// Serialized `(key, value)` pairs, in a stable order
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        if let Some(sort_by) = self.sort_by {
            pairs.push(("sort_by", sort_by.to_string()));
        }
        if let Some(order) = self.order {
            pairs.push(("order", order.to_string()));
        }
        pairs
    }
}

/// Backend capabilities used by the console
#[async_trait]
pub trait ShortenerApi: Send + Sync {
    async fn list_urls(&self, scope: UrlScope, params: &ListUrlsParams)
    -> Result<UrlListResponse>;

    /// `Ok(None)` when the server answers 2xx with an empty body
    async fn shorten_url(&self, request: &ShortenRequest) -> Result<Option<ShortenedUrl>>;

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse>;

    async fn register(&self, credentials: &Credentials) -> Result<serde_json::Value>;

    async fn logout(&self) -> Result<()>;

    /// Never fails; any problem reads as "not authenticated"
    async fn auth_status(&self) -> AuthStatus;

    async fn url_stats(&self, short_code: &str) -> Result<UrlStats>;

    async fn health(&self) -> Result<HealthStatus>;
}
