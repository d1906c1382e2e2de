//! In-process HTTP tests for the full router.
//!
//! Each test builds the application from a configuration and drives it with
//! `tower::ServiceExt::oneshot`, so no socket is bound.
//!
//! Run with: cargo test --test http_tests
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

use landing::config::{AppConfig, CACHE_CONTROL_ERROR, CACHE_CONTROL_HOME, CACHE_CONTROL_STATIC};
use landing::middleware::X_REQUEST_ID;

fn app() -> Router {
    landing::build_app(AppConfig::default()).expect("default theme loads")
}

async fn send(app: Router, method: Method, path: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn get(path: &str) -> Response {
    send(app(), Method::GET, path).await
}

async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn header_str<'a>(response: &'a Response, name: &header::HeaderName) -> Option<&'a str> {
    response.headers().get(name).map(|v| v.to_str().unwrap())
}

#[tokio::test]
async fn home_page_returns_html_document() {
    let response = get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(header_str(&response, &header::CONTENT_TYPE)
        .unwrap()
        .starts_with("text/html"));

    let body = body_string(response).await;
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.starts_with("<!DOCTYPE html>"));
}

#[tokio::test]
async fn home_page_shows_configured_site() {
    let mut config = AppConfig::default();
    config.ui.site_name = "Example Site".to_string();
    config.ui.tagline = Some("Nothing to see here".to_string());
    let app = landing::build_app(config).unwrap();

    let body = body_string(send(app, Method::GET, "/").await).await;
    assert!(body.contains("<h1>Example Site</h1>"));
    assert!(body.contains("Nothing to see here"));
    assert!(body.contains(env!("CARGO_PKG_VERSION")));
    assert!(body.contains("href=\"/health\""));
}

#[tokio::test]
async fn home_page_is_cacheable() {
    let response = get("/").await;
    assert_eq!(
        header_str(&response, &header::CACHE_CONTROL),
        Some(CACHE_CONTROL_HOME)
    );
}

#[tokio::test]
async fn health_check_returns_healthy() {
    let response = get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(header_str(&response, &header::CONTENT_TYPE)
        .unwrap()
        .starts_with("application/json"));

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body, serde_json::json!({ "status": "healthy" }));
}

#[tokio::test]
async fn health_check_is_not_cached() {
    let response = get("/health").await;
    assert!(response.headers().get(header::CACHE_CONTROL).is_none());
}

#[tokio::test]
async fn endpoints_are_idempotent() {
    let app = app();
    for path in ["/", "/health"] {
        let first = send(app.clone(), Method::GET, path).await;
        let second = send(app.clone(), Method::GET, path).await;
        assert_eq!(first.status(), second.status(), "status differs for {}", path);
        assert_eq!(
            body_string(first).await,
            body_string(second).await,
            "body differs for {}",
            path
        );
    }
}

#[tokio::test]
async fn unknown_route_is_html_not_found() {
    let response = get("/no/such/page").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_string(response).await;
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Error 404"));
}

#[tokio::test]
async fn not_found_page_escapes_path() {
    let response = get("/%3Cscript%3E").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_string(response).await;
    assert!(!body.contains("<script>"));
}

#[tokio::test]
async fn wrong_method_is_rejected() {
    let response = send(app(), Method::POST, "/health").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = send(app(), Method::DELETE, "/").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn head_requests_are_served() {
    let response = send(app(), Method::HEAD, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn every_response_has_request_id() {
    let mut seen = Vec::new();
    for path in ["/", "/health", "/missing"] {
        let response = get(path).await;
        let id = header_str(&response, &X_REQUEST_ID).unwrap().to_string();
        assert!(uuid::Uuid::parse_str(&id).is_ok(), "not a uuid: {}", id);
        seen.push(id);
    }
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 3);
}

#[tokio::test]
async fn static_assets_are_served_from_default_theme() {
    // Integration tests run from the package root, where themes/ lives
    let response = get("/static/css/style.css").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header_str(&response, &header::CACHE_CONTROL),
        Some(CACHE_CONTROL_STATIC)
    );
    assert!(header_str(&response, &header::CONTENT_TYPE)
        .unwrap()
        .starts_with("text/css"));
}

#[tokio::test]
async fn missing_static_asset_uses_error_page_and_policy() {
    let response = get("/static/css/nope.css").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        header_str(&response, &header::CACHE_CONTROL),
        Some(CACHE_CONTROL_ERROR)
    );
    assert!(header_str(&response, &header::CONTENT_TYPE)
        .unwrap()
        .starts_with("text/html"));
    assert!(header_str(&response, &X_REQUEST_ID).is_some());

    let body = body_string(response).await;
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Error 404"));
    assert!(body.contains("nope.css"));
}
