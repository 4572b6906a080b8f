//! Mock backend for unit tests

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::client::{ListUrlsParams, ShortenerApi, UrlScope};
use crate::errors::{ClientError, Result};
use crate::models::{
    AuthStatus, Credentials, HealthStatus, LoginResponse, PageInfo, ShortenRequest, ShortenedUrl,
    SortSpec, UrlListResponse, UrlRecord, UrlStats,
};

/// A consistent list response for `page` out of `total` records
pub(crate) fn list_page(page: u32, per_page: u32, total: u64) -> UrlListResponse {
    let pages = PageInfo::expected_pages(total, per_page);
    let start = (page.saturating_sub(1) as u64) * per_page as u64;
    let count = total.saturating_sub(start).min(per_page as u64);
    let urls = (0..count)
        .map(|i| UrlRecord {
            original_url: format!("https://example.com/{}", start + i),
            short_code: format!("code{}", start + i),
            created_at: "2025-01-01T10:00:00".to_string(),
            expires_at: None,
            is_permanent: true,
            click_count: i,
            last_accessed: None,
            owner: None,
        })
        .collect();
    UrlListResponse {
        urls,
        pagination: PageInfo {
            page,
            per_page,
            total,
            pages,
            has_next: page < pages,
            has_prev: page > 1,
        },
        sort: SortSpec::default(),
    }
}

#[derive(Default)]
pub(crate) struct MockApi {
    auth: Mutex<AuthStatus>,
    lists: Mutex<VecDeque<(Duration, Result<UrlListResponse>)>>,
    login_error: Mutex<Option<ClientError>>,
    register_error: Mutex<Option<ClientError>>,
    logout_error: Mutex<Option<ClientError>>,
    shorten: Mutex<Option<Result<Option<ShortenedUrl>>>>,
    calls: Mutex<HashMap<&'static str, usize>>,
    list_requests: Mutex<Vec<(UrlScope, ListUrlsParams)>>,
}

impl MockApi {
    pub fn authenticated_as(self, username: &str) -> Self {
        *self.auth.lock() = AuthStatus {
            authenticated: true,
            username: Some(username.to_string()),
        };
        self
    }

    pub fn auth_status_returns(self, status: AuthStatus) -> Self {
        *self.auth.lock() = status;
        self
    }

    pub fn fail_login(self, err: ClientError) -> Self {
        *self.login_error.lock() = Some(err);
        self
    }

    pub fn fail_register(self, err: ClientError) -> Self {
        *self.register_error.lock() = Some(err);
        self
    }

    pub fn fail_logout(self, err: ClientError) -> Self {
        *self.logout_error.lock() = Some(err);
        self
    }

    pub fn shorten_returns(self, result: Result<Option<ShortenedUrl>>) -> Self {
        *self.shorten.lock() = Some(result);
        self
    }

    /// Queue the next `list_urls` answer, delivered after `delay`
    pub fn push_list(&self, delay: Duration, result: Result<UrlListResponse>) {
        self.lists.lock().push_back((delay, result));
    }

    pub fn calls(&self, name: &str) -> usize {
        self.calls.lock().get(name).copied().unwrap_or(0)
    }

    pub fn list_requests(&self) -> Vec<(UrlScope, ListUrlsParams)> {
        self.list_requests.lock().clone()
    }

    fn record(&self, name: &'static str) {
        *self.calls.lock().entry(name).or_default() += 1;
    }
}

#[async_trait]
impl ShortenerApi for MockApi {
    async fn list_urls(&self, scope: UrlScope, params: &ListUrlsParams) -> Result<UrlListResponse> {
        self.record("list_urls");
        self.list_requests.lock().push((scope, *params));
        let next = self.lists.lock().pop_front();
        match next {
            Some((delay, result)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                result
            }
            None => {
                let page = params.page.unwrap_or(1);
                let per_page = params.per_page.map(|p| p.get()).unwrap_or(20);
                Ok(list_page(page, per_page, 45))
            }
        }
    }

    async fn shorten_url(&self, request: &ShortenRequest) -> Result<Option<ShortenedUrl>> {
        self.record("shorten_url");
        match self.shorten.lock().clone() {
            Some(result) => result,
            None => Ok(Some(ShortenedUrl {
                short_url: "http://localhost:5000/abc123".to_string(),
                short_code: "abc123".to_string(),
                original_url: request.url.clone(),
                created_at: None,
                is_permanent: request.permanent,
                expires_at: None,
            })),
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        self.record("login");
        if let Some(err) = self.login_error.lock().clone() {
            return Err(err);
        }
        *self.auth.lock() = AuthStatus {
            authenticated: true,
            username: Some(credentials.username.clone()),
        };
        Ok(LoginResponse::default())
    }

    async fn register(&self, credentials: &Credentials) -> Result<serde_json::Value> {
        self.record("register");
        if let Some(err) = self.register_error.lock().clone() {
            return Err(err);
        }
        *self.auth.lock() = AuthStatus {
            authenticated: true,
            username: Some(credentials.username.clone()),
        };
        Ok(serde_json::json!({"message": "User registered successfully"}))
    }

    async fn logout(&self) -> Result<()> {
        self.record("logout");
        *self.auth.lock() = AuthStatus::anonymous();
        match self.logout_error.lock().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn auth_status(&self) -> AuthStatus {
        self.record("auth_status");
        self.auth.lock().clone()
    }

    async fn url_stats(&self, short_code: &str) -> Result<UrlStats> {
        self.record("url_stats");
        Err(ClientError::api(
            404,
            format!("Short URL not found: {}", short_code),
        ))
    }

    async fn health(&self) -> Result<HealthStatus> {
        self.record("health");
        Ok(HealthStatus {
            status: "healthy".to_string(),
            service: Some("url-shortener".to_string()),
        })
    }
}
