//! Static file serving for themes.
//!
//! Assets are looked up in the active theme first and then in the default
//! theme. Hits get the long static cache policy; misses are answered with the
//! regular HTML 404 page.

use axum::{
    extract::{OriginalUri, Request},
    http::{header::CACHE_CONTROL, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::services::ServeDir;

use crate::config::{ThemeConfig, CACHE_CONTROL_STATIC, DEFAULT_THEME};
use crate::error::AppError;

/// Create a static file service for `theme`, falling back to the default theme.
///
/// For the default theme both lookups hit the same directory.
pub fn create_static_service(theme: &ThemeConfig) -> ServeDir<ServeDir> {
    let default_dir = ServeDir::new(theme.static_path(DEFAULT_THEME));
    ServeDir::new(theme.static_path(&theme.name)).fallback(default_dir)
}

/// Middleware applying the static cache policy to served files.
///
/// Only successful and 304 responses are marked cacheable. A 404 from the file
/// service is replaced by `AppError::NotFound`, which carries the error policy.
pub async fn static_response_layer(request: Request, next: Next) -> Response {
    let path = request
        .extensions()
        .get::<OriginalUri>()
        .map(|OriginalUri(uri)| uri.path().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let mut response = next.run(request).await;
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        tracing::debug!(path = %path, "Static file not found");
        return AppError::NotFound(path).into_response();
    }

    if status.is_success() || status == StatusCode::NOT_MODIFIED {
        response
            .headers_mut()
            .entry(CACHE_CONTROL)
            .or_insert(HeaderValue::from_static(CACHE_CONTROL_STATIC));
    }

    response
}
