//! HTTP implementation of [`ShortenerApi`] on top of `ureq`
//!
//! `ureq` is blocking; every request runs on tokio's blocking pool so the
//! interface loop never waits on a socket.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};
use ureq::Agent;
use url::Url;

use super::{CookieStore, ListUrlsParams, ShortenerApi, UrlScope};
use crate::config::StaticConfig;
use crate::errors::{ClientError, Result};
use crate::models::{
    ApiErrorBody, AuthStatus, Credentials, HealthStatus, LoginResponse, ShortenRequest,
    ShortenedUrl, UrlListResponse, UrlStats,
};

const USER_AGENT: &str = concat!("shortlink-console/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A request ready to hand to the blocking pool
#[derive(Debug)]
struct PreparedRequest {
    method: Method,
    url: String,
    query: Vec<(&'static str, String)>,
    json: Option<serde_json::Value>,
    /// Send the stored session cookie
    credentialed: bool,
}

impl PreparedRequest {
    fn get(url: String) -> Self {
        Self {
            method: Method::Get,
            url,
            query: Vec::new(),
            json: None,
            credentialed: true,
        }
    }

    fn post(url: String) -> Self {
        Self {
            method: Method::Post,
            ..Self::get(url)
        }
    }

    fn query(mut self, pairs: Vec<(&'static str, String)>) -> Self {
        self.query = pairs;
        self
    }

    fn json(mut self, body: serde_json::Value) -> Self {
        self.json = Some(body);
        self
    }

    fn anonymous(mut self) -> Self {
        self.credentialed = false;
        self
    }
}

#[derive(Debug)]
struct RawResponse {
    status: u16,
    body: String,
}

impl RawResponse {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The server's `{error}` text, or a status line when the body has none
    fn error_message(&self) -> String {
        serde_json::from_str::<ApiErrorBody>(&self.body)
            .ok()
            .map(|b| b.error)
            .filter(|msg| !msg.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP error! status: {}", self.status))
    }

    fn into_api_error(self) -> ClientError {
        ClientError::api(self.status, self.error_message())
    }

    fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body)
            .map_err(|e| ClientError::unexpected(format!("Invalid response body: {}", e)))
    }

    fn has_body(&self) -> bool {
        !self.body.trim().is_empty()
    }
}

pub struct HttpApiClient {
    agent: Agent,
    base_url: String,
    cookies: Arc<CookieStore>,
}

impl HttpApiClient {
    /// Create a client for `base_url` (http or https)
    pub fn new(base_url: &str, timeout: Duration, cookies: CookieStore) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ClientError::config(format!("Invalid API base URL '{}': {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::config(format!(
                "Invalid API base URL '{}': only http:// and https:// are supported",
                base_url
            )));
        }

        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Ok(Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            cookies: Arc::new(cookies),
        })
    }

    /// Build from the `[api]` section; the session file is honoured when set
    pub fn from_config(config: &StaticConfig) -> Result<Self> {
        let cookies = match config.api.session_path() {
            Some(path) => CookieStore::with_file(path),
            None => CookieStore::new(),
        };
        Self::new(
            &config.api.base_url,
            Duration::from_secs(config.api.timeout_secs),
            cookies,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cookies(&self) -> &CookieStore {
        &self.cookies
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn stats_endpoint(&self, short_code: &str) -> Result<String> {
        let mut url = Url::parse(&self.endpoint("/stats/"))
            .map_err(|e| ClientError::config(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::config("API base URL cannot carry a path"))?
            .pop_if_empty()
            .push(short_code);
        Ok(url.to_string())
    }

    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse> {
        let agent = self.agent.clone();
        let cookies = Arc::clone(&self.cookies);

        tokio::task::spawn_blocking(move || execute_blocking(&agent, &cookies, request))
            .await
            .map_err(|e| ClientError::unexpected(format!("Request task failed: {}", e)))?
    }
}

fn execute_blocking(
    agent: &Agent,
    cookies: &CookieStore,
    request: PreparedRequest,
) -> Result<RawResponse> {
    let cookie_header = if request.credentialed {
        cookies.header_value()
    } else {
        None
    };

    let result = match request.method {
        Method::Get => {
            let mut builder = agent.get(&request.url).header("User-Agent", USER_AGENT);
            for (key, value) in &request.query {
                builder = builder.query(*key, value);
            }
            if let Some(cookie) = &cookie_header {
                builder = builder.header("Cookie", cookie);
            }
            builder.call()
        }
        Method::Post => {
            let mut builder = agent.post(&request.url).header("User-Agent", USER_AGENT);
            if let Some(cookie) = &cookie_header {
                builder = builder.header("Cookie", cookie);
            }
            match &request.json {
                Some(body) => builder.send_json(body),
                None => builder.send_empty(),
            }
        }
    };

    let mut response = result.map_err(|e| {
        warn!(
            "{} {} failed: {}",
            request.method.as_str(),
            request.url,
            e
        );
        ClientError::from(e)
    })?;

    let status = response.status().as_u16();
    debug!("{} {} -> {}", request.method.as_str(), request.url, status);

    let mut changed = false;
    for value in response.headers().get_all("set-cookie") {
        if let Ok(header) = value.to_str() {
            changed |= cookies.apply_set_cookie(header);
        }
    }
    if changed && let Err(e) = cookies.persist() {
        warn!("Failed to persist session cookies: {}", e);
    }

    let body = response.body_mut().read_to_string()?;
    trace!("Response body: {}", body);

    Ok(RawResponse { status, body })
}

#[async_trait]
impl ShortenerApi for HttpApiClient {
    async fn list_urls(
        &self,
        scope: UrlScope,
        params: &ListUrlsParams,
    ) -> Result<UrlListResponse> {
        let request =
            PreparedRequest::get(self.endpoint(scope.path())).query(params.to_query_pairs());
        let raw = self.execute(request).await?;
        if !raw.is_success() {
            return Err(raw.into_api_error());
        }
        let data: UrlListResponse = raw.parse()?;
        if !data.pagination.is_consistent() {
            warn!("Server pagination fields disagree: {:?}", data.pagination);
        }
        Ok(data)
    }

    async fn shorten_url(&self, request: &ShortenRequest) -> Result<Option<ShortenedUrl>> {
        let body = serde_json::to_value(request)?;
        let raw = self
            .execute(PreparedRequest::post(self.endpoint("/shorten")).json(body))
            .await?;

        if raw.status == 401 {
            return Err(ClientError::auth_required());
        }
        if !raw.is_success() {
            return Err(raw.into_api_error());
        }
        if !raw.has_body() {
            return Ok(None);
        }
        match raw.parse::<ShortenedUrl>() {
            Ok(created) => Ok(Some(created)),
            Err(e) => {
                debug!("Shorten response not understood, ignoring body: {}", e);
                Ok(None)
            }
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let body = serde_json::to_value(credentials)?;
        let raw = self
            .execute(
                PreparedRequest::post(self.endpoint("/login"))
                    .json(body)
                    .anonymous(),
            )
            .await?;
        if !raw.is_success() {
            return Err(raw.into_api_error());
        }
        if !raw.has_body() {
            return Ok(LoginResponse::default());
        }
        raw.parse()
    }

    async fn register(&self, credentials: &Credentials) -> Result<serde_json::Value> {
        let body = serde_json::to_value(credentials)?;
        let raw = self
            .execute(
                PreparedRequest::post(self.endpoint("/register"))
                    .json(body)
                    .anonymous(),
            )
            .await?;
        if !raw.is_success() {
            return Err(raw.into_api_error());
        }
        if !raw.has_body() {
            return Ok(serde_json::Value::Null);
        }
        raw.parse()
    }

    async fn logout(&self) -> Result<()> {
        let result = self
            .execute(PreparedRequest::post(self.endpoint("/logout")))
            .await;

        // The local session ends whatever the server said
        self.cookies.clear();
        if let Err(e) = self.cookies.persist() {
            warn!("Failed to clear persisted session: {}", e);
        }

        let raw = result?;
        if !raw.is_success() {
            return Err(raw.into_api_error());
        }
        Ok(())
    }

    async fn auth_status(&self) -> AuthStatus {
        let raw = match self
            .execute(PreparedRequest::get(self.endpoint("/auth-status")))
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                debug!("Auth status check failed: {}", e);
                return AuthStatus::anonymous();
            }
        };
        if !raw.is_success() {
            debug!("Auth status check returned {}", raw.status);
            return AuthStatus::anonymous();
        }
        raw.parse().unwrap_or_else(|e| {
            debug!("Auth status body not understood: {}", e);
            AuthStatus::anonymous()
        })
    }

    async fn url_stats(&self, short_code: &str) -> Result<UrlStats> {
        let url = self.stats_endpoint(short_code)?;
        let raw = self.execute(PreparedRequest::get(url).anonymous()).await?;
        if !raw.is_success() {
            return Err(raw.into_api_error());
        }
        raw.parse()
    }

    async fn health(&self) -> Result<HealthStatus> {
        let raw = self
            .execute(PreparedRequest::get(self.endpoint("/health")).anonymous())
            .await?;
        if !raw.is_success() {
            return Err(raw.into_api_error());
        }
        raw.parse()
    }
}
