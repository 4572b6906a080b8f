//! In-memory backend shared by the integration tests
//!
//! Keeps real users and URLs so sorting, paging and ownership behave like
//! the server does.

#![allow(dead_code)]

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use shortlink_console::client::{ListUrlsParams, ShortenerApi, UrlScope};
use shortlink_console::errors::{ClientError, Result};
use shortlink_console::models::{
    AuthStatus, Credentials, HealthStatus, LoginResponse, PageInfo, ShortenRequest, ShortenedUrl,
    SortField, SortOrder, SortSpec, UrlListResponse, UrlOwner, UrlRecord, UrlStats,
};

#[derive(Default)]
struct Backend {
    users: HashMap<String, String>,
    current: Option<String>,
    urls: Vec<UrlRecord>,
    requests: Vec<(UrlScope, ListUrlsParams)>,
}

#[derive(Default)]
pub struct FakeBackend {
    inner: Mutex<Backend>,
}

impl FakeBackend {
    pub fn with_user(self, username: &str, password: &str) -> Self {
        self.inner
            .lock()
            .users
            .insert(username.to_string(), password.to_string());
        self
    }

    /// Seed `count` URLs owned by `owner`; click counts ascend with the index
    pub fn with_urls(self, owner: &str, count: usize) -> Self {
        {
            let mut inner = self.inner.lock();
            let start = inner.urls.len();
            for i in start..start + count {
                inner.urls.push(UrlRecord {
                    original_url: format!("https://example.com/{}/{}", owner, i),
                    short_code: format!("c{:03}", i),
                    created_at: format!("2025-01-{:02}T10:00:00Z", (i % 28) + 1),
                    expires_at: None,
                    is_permanent: true,
                    click_count: i as u64,
                    last_accessed: None,
                    owner: Some(UrlOwner {
                        username: owner.to_string(),
                    }),
                });
            }
        }
        self
    }

    pub fn requests(&self) -> Vec<(UrlScope, ListUrlsParams)> {
        self.inner.lock().requests.clone()
    }

    pub fn url_count(&self) -> usize {
        self.inner.lock().urls.len()
    }
}

fn sort_records(records: &mut [UrlRecord], sort: SortSpec) {
    records.sort_by(|a, b| {
        let ordering = match sort.sort_by {
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::ExpiresAt => a.expires_at.cmp(&b.expires_at),
            SortField::ClickCount => a.click_count.cmp(&b.click_count),
            SortField::ShortCode => a.short_code.cmp(&b.short_code),
        };
        match sort.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

#[async_trait]
impl ShortenerApi for FakeBackend {
    async fn list_urls(&self, scope: UrlScope, params: &ListUrlsParams) -> Result<UrlListResponse> {
        let mut inner = self.inner.lock();
        inner.requests.push((scope, *params));

        let mut records: Vec<UrlRecord> = match scope {
            UrlScope::All => inner.urls.clone(),
            UrlScope::Mine => {
                let Some(user) = inner.current.clone() else {
                    return Err(ClientError::api(401, "Authentication required"));
                };
                inner
                    .urls
                    .iter()
                    .filter(|u| u.owner.as_ref().is_some_and(|o| o.username == user))
                    .cloned()
                    .collect()
            }
        };

        let sort = SortSpec::new(
            params.sort_by.unwrap_or_default(),
            params.order.unwrap_or_default(),
        );
        sort_records(&mut records, sort);

        let page = params.page.unwrap_or(1).max(1);
        let per_page = params.per_page.map(|p| p.get()).unwrap_or(20);
        let total = records.len() as u64;
        let pages = PageInfo::expected_pages(total, per_page);
        let urls = records
            .into_iter()
            .skip(((page - 1) * per_page) as usize)
            .take(per_page as usize)
            .collect();

        Ok(UrlListResponse {
            urls,
            pagination: PageInfo {
                page,
                per_page,
                total,
                pages,
                has_next: page < pages,
                has_prev: page > 1,
            },
            sort,
        })
    }

    async fn shorten_url(&self, request: &ShortenRequest) -> Result<Option<ShortenedUrl>> {
        let mut inner = self.inner.lock();
        let Some(user) = inner.current.clone() else {
            return Err(ClientError::auth_required());
        };
        if !request.url.starts_with("http://") && !request.url.starts_with("https://") {
            return Err(ClientError::api(400, "Invalid URL format"));
        }
        let short_code = format!("n{:03}", inner.urls.len());
        let expires_at = (!request.permanent).then(|| "2099-01-01T00:00:00Z".to_string());
        inner.urls.push(UrlRecord {
            original_url: request.url.clone(),
            short_code: short_code.clone(),
            created_at: "2025-06-01T00:00:00Z".to_string(),
            expires_at: expires_at.clone(),
            is_permanent: request.permanent,
            click_count: 0,
            last_accessed: None,
            owner: Some(UrlOwner { username: user }),
        });
        Ok(Some(ShortenedUrl {
            short_url: format!("http://sho.rt/{}", short_code),
            short_code,
            original_url: request.url.clone(),
            created_at: None,
            is_permanent: request.permanent,
            expires_at,
        }))
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let mut inner = self.inner.lock();
        match inner.users.get(&credentials.username) {
            Some(password) if *password == credentials.password => {
                inner.current = Some(credentials.username.clone());
                Ok(LoginResponse::default())
            }
            _ => Err(ClientError::api(401, "Invalid username or password")),
        }
    }

    async fn register(&self, credentials: &Credentials) -> Result<serde_json::Value> {
        let mut inner = self.inner.lock();
        if inner.users.contains_key(&credentials.username) {
            return Err(ClientError::api(400, "Username already exists"));
        }
        inner
            .users
            .insert(credentials.username.clone(), credentials.password.clone());
        inner.current = Some(credentials.username.clone());
        Ok(serde_json::json!({"message": "User created successfully"}))
    }

    async fn logout(&self) -> Result<()> {
        self.inner.lock().current = None;
        Ok(())
    }

    async fn auth_status(&self) -> AuthStatus {
        match &self.inner.lock().current {
            Some(user) => AuthStatus {
                authenticated: true,
                username: Some(user.clone()),
            },
            None => AuthStatus::anonymous(),
        }
    }

    async fn url_stats(&self, short_code: &str) -> Result<UrlStats> {
        let inner = self.inner.lock();
        let record = inner
            .urls
            .iter()
            .find(|u| u.short_code == short_code)
            .ok_or_else(|| ClientError::api(404, "Short URL not found"))?;
        Ok(UrlStats {
            short_code: record.short_code.clone(),
            original_url: record.original_url.clone(),
            created_at: Some(record.created_at.clone()),
            expires_at: record.expires_at.clone(),
            is_permanent: record.is_permanent,
            click_count: record.click_count,
            last_accessed: record.last_accessed.clone(),
        })
    }

    async fn health(&self) -> Result<HealthStatus> {
        Ok(HealthStatus {
            status: "healthy".to_string(),
            service: None,
        })
    }
}
