//! HttpApiClient against an in-process backend
//!
//! A small actix-web server plays the shortener API: cookie sessions,
//! paginated listings, `{error}` bodies and the 401 on `/shorten`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::json;

use shortlink_console::client::{CookieStore, HttpApiClient, ListUrlsParams, ShortenerApi, UrlScope};
use shortlink_console::errors::{ClientError, LOGIN_REQUIRED_MESSAGE};
use shortlink_console::models::{
    Credentials, PerPage, ShortenRequest, SortField, SortOrder,
};

const SESSION_VALUE: &str = "abc123session";

type Seen = Mutex<Vec<String>>;

fn authed(req: &HttpRequest) -> bool {
    req.cookie("session")
        .is_some_and(|c| c.value() == SESSION_VALUE)
}

fn record(seen: &Seen, req: &HttpRequest) {
    let line = match req.query_string() {
        "" => req.path().to_string(),
        q => format!("{}?{}", req.path(), q),
    };
    seen.lock().unwrap().push(line);
}

async fn list_urls(req: HttpRequest, seen: web::Data<Seen>) -> HttpResponse {
    record(&seen, &req);
    if req.path() == "/my-urls" && !authed(&req) {
        return HttpResponse::Unauthorized().json(json!({"error": "Authentication required"}));
    }

    let query = web::Query::<HashMap<String, String>>::from_query(req.query_string())
        .map(|q| q.into_inner())
        .unwrap_or_default();
    let page: u32 = query.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    if page == 99 {
        return HttpResponse::InternalServerError().body("boom");
    }
    let per_page: u32 = query
        .get("per_page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(20);
    let total: u64 = 45;
    let pages = total.div_ceil(per_page as u64) as u32;

    HttpResponse::Ok().json(json!({
        "urls": [{
            "original_url": "https://example.com/a",
            "short_code": "aaa111",
            "created_at": "2025-01-01T10:00:00",
            "expires_at": "2025-02-01T10:00:00",
            "is_permanent": false,
            "click_count": 3,
            "last_accessed": null,
            "user": {"username": "alice"}
        }],
        "pagination": {
            "page": page,
            "per_page": per_page,
            "total": total,
            "pages": pages,
            "has_next": page < pages,
            "has_prev": page > 1
        },
        "sort": {
            "sort_by": query.get("sort_by").cloned().unwrap_or_else(|| "created_at".into()),
            "order": query.get("order").cloned().unwrap_or_else(|| "desc".into())
        }
    }))
}

async fn login(body: web::Json<Credentials>) -> HttpResponse {
    if body.password != "Secret123" {
        return HttpResponse::Unauthorized().json(json!({"error": "Invalid username or password"}));
    }
    HttpResponse::Ok()
        .insert_header((
            "Set-Cookie",
            format!("session={}; Path=/; HttpOnly", SESSION_VALUE),
        ))
        .json(json!({"message": "Logged in successfully"}))
}

async fn register(body: web::Json<Credentials>) -> HttpResponse {
    if body.username == "taken" {
        return HttpResponse::BadRequest().json(json!({"error": "Username already exists"}));
    }
    HttpResponse::Created().json(json!({"message": "User created successfully"}))
}

async fn logout() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(("Set-Cookie", "session=; Path=/; Max-Age=0"))
        .json(json!({"message": "Logged out"}))
}

async fn auth_status(req: HttpRequest) -> HttpResponse {
    if authed(&req) {
        HttpResponse::Ok().json(json!({"authenticated": true, "username": "alice"}))
    } else {
        HttpResponse::Ok().json(json!({"authenticated": false}))
    }
}

async fn shorten(req: HttpRequest, body: web::Json<ShortenRequest>) -> HttpResponse {
    if !authed(&req) {
        return HttpResponse::Unauthorized().json(json!({"error": "Unauthorized"}));
    }
    if !body.url.starts_with("http") {
        return HttpResponse::BadRequest().json(json!({"error": "Invalid URL format"}));
    }
    if body.url.ends_with("/empty") {
        return HttpResponse::Created().finish();
    }
    HttpResponse::Created().json(json!({
        "short_url": "http://sho.rt/xyz789",
        "short_code": "xyz789",
        "original_url": body.url,
        "is_permanent": body.permanent,
        "expires_at": if body.permanent { None } else { Some("2025-02-01T10:00:00") }
    }))
}

async fn stats(req: HttpRequest, path: web::Path<String>, seen: web::Data<Seen>) -> HttpResponse {
    record(&seen, &req);
    let code = path.into_inner();
    if code == "missing" {
        return HttpResponse::NotFound().json(json!({"error": "Short URL not found"}));
    }
    HttpResponse::Ok().json(json!({
        "short_code": code,
        "original_url": "https://example.com/a",
        "click_count": 7,
        "is_permanent": true
    }))
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({"status": "healthy", "service": "url-shortener"}))
}

/// Start the fake backend on an ephemeral port; returns its base URL
fn start_backend() -> (String, Arc<Seen>) {
    let seen: Arc<Seen> = Arc::new(Mutex::new(Vec::new()));
    let seen_server = Arc::clone(&seen);
    let (tx, rx) = std::sync::mpsc::channel();

    std::thread::spawn(move || {
        actix_rt::System::new().block_on(async move {
            let server = HttpServer::new(move || {
                App::new()
                    .app_data(web::Data::from(Arc::clone(&seen_server)))
                    .route("/urls", web::get().to(list_urls))
                    .route("/my-urls", web::get().to(list_urls))
                    .route("/login", web::post().to(login))
                    .route("/register", web::post().to(register))
                    .route("/logout", web::post().to(logout))
                    .route("/auth-status", web::get().to(auth_status))
                    .route("/shorten", web::post().to(shorten))
                    .route("/stats/{code}", web::get().to(stats))
                    .route("/health", web::get().to(health))
            })
            .workers(1)
            .bind(("127.0.0.1", 0))
            .unwrap();
            tx.send(server.addrs()[0]).unwrap();
            server.run().await.unwrap();
        });
    });

    let addr = rx.recv().unwrap();
    (format!("http://{}", addr), seen)
}

fn client(base: &str) -> HttpApiClient {
    HttpApiClient::new(base, Duration::from_secs(5), CookieStore::new()).unwrap()
}

#[tokio::test]
async fn test_list_sends_only_set_params() {
    let (base, seen) = start_backend();
    let api = client(&base);

    let response = api
        .list_urls(UrlScope::All, &ListUrlsParams::default())
        .await
        .unwrap();
    assert_eq!(response.pagination.total, 45);
    assert_eq!(response.urls[0].owner.as_ref().unwrap().username, "alice");

    let params = ListUrlsParams {
        page: Some(2),
        per_page: Some(PerPage::Fifty),
        sort_by: Some(SortField::ClickCount),
        order: Some(SortOrder::Asc),
    };
    let response = api.list_urls(UrlScope::All, &params).await.unwrap();
    assert_eq!(response.pagination.page, 2);
    assert_eq!(response.pagination.per_page, 50);
    assert!(!response.pagination.has_next);
    assert_eq!(response.sort.sort_by, SortField::ClickCount);

    let seen = seen.lock().unwrap().clone();
    assert_eq!(seen[0], "/urls");
    assert_eq!(
        seen[1],
        "/urls?page=2&per_page=50&sort_by=click_count&order=asc"
    );
}

#[tokio::test]
async fn test_session_cookie_round_trip() {
    let (base, _) = start_backend();
    let api = client(&base);

    assert!(!api.auth_status().await.authenticated);
    let err = api
        .list_urls(UrlScope::Mine, &ListUrlsParams::default())
        .await
        .unwrap_err();
    assert_eq!(err, ClientError::api(401, "Authentication required"));

    api.login(&Credentials::new("alice", "Secret123")).await.unwrap();
    assert_eq!(api.cookies().get("session").as_deref(), Some(SESSION_VALUE));

    let status = api.auth_status().await;
    assert!(status.authenticated);
    assert_eq!(status.username.as_deref(), Some("alice"));
    assert!(
        api.list_urls(UrlScope::Mine, &ListUrlsParams::default())
            .await
            .is_ok()
    );

    api.logout().await.unwrap();
    assert!(api.cookies().is_empty());
    assert!(!api.auth_status().await.authenticated);
}

#[tokio::test]
async fn test_server_error_text_is_surfaced() {
    let (base, _) = start_backend();
    let api = client(&base);

    let err = api
        .login(&Credentials::new("alice", "wrong"))
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Invalid username or password");
    assert!(api.cookies().is_empty());

    let err = api
        .register(&Credentials::new("taken", "Secret123"))
        .await
        .unwrap_err();
    assert_eq!(err, ClientError::api(400, "Username already exists"));

    // no `{error}` body: status line instead
    let params = ListUrlsParams {
        page: Some(99),
        ..Default::default()
    };
    let err = api.list_urls(UrlScope::All, &params).await.unwrap_err();
    assert_eq!(err, ClientError::api(500, "HTTP error! status: 500"));
}

#[tokio::test]
async fn test_shorten_maps_401_to_login_required() {
    let (base, _) = start_backend();
    let api = client(&base);

    let err = api
        .shorten_url(&ShortenRequest::new("https://example.com/long"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::AuthRequired(_)));
    assert_eq!(err.user_message(), LOGIN_REQUIRED_MESSAGE);

    api.login(&Credentials::new("alice", "Secret123")).await.unwrap();

    let created = api
        .shorten_url(&ShortenRequest {
            url: "https://example.com/long".to_string(),
            permanent: true,
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(created.short_url, "http://sho.rt/xyz789");
    assert!(created.is_permanent);
    assert!(created.expires_at.is_none());

    let err = api
        .shorten_url(&ShortenRequest::new("ftp-ish"))
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Invalid URL format");

    // 2xx without a body is still a success
    let created = api
        .shorten_url(&ShortenRequest::new("https://example.com/empty"))
        .await
        .unwrap();
    assert!(created.is_none());
}

#[tokio::test]
async fn test_stats_and_health() {
    let (base, seen) = start_backend();
    let api = client(&base);

    let stats = api.url_stats("abc").await.unwrap();
    assert_eq!(stats.click_count, 7);

    let err = api.url_stats("missing").await.unwrap_err();
    assert_eq!(err, ClientError::api(404, "Short URL not found"));

    api.url_stats("a b").await.unwrap();
    assert_eq!(seen.lock().unwrap().last().unwrap(), "/stats/a%20b");

    let health = api.health().await.unwrap();
    assert_eq!(health.status, "healthy");
}

#[tokio::test]
async fn test_unreachable_backend_is_unexpected() {
    // Nothing listens on port 9 locally
    let api = client("http://127.0.0.1:9");
    let err = api.health().await.unwrap_err();
    assert!(matches!(err, ClientError::Unexpected(_)));
    assert!(!api.auth_status().await.authenticated);
}
