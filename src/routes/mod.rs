//! HTTP route handlers.
//!
//! Routes are grouped by caching policy, with per-group Cache-Control headers.
//! The home page and static assets are cacheable; the health check and error
//! responses are not cached beyond a few seconds.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;

use axum::{http::Uri, middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_HOME;
use crate::error::AppError;
use crate::http::static_files::{create_static_service, static_response_layer};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Fallback for paths no route matches.
async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "No route matched");
    AppError::NotFound(uri.path().to_string())
}

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Home - moderate cache, changes only on redeploy
    let home_routes = Router::new()
        .route("/", get(home::index))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HOME),
        ));

    // Static files - long cache with immutable hint on hits, HTML 404 on misses
    let static_routes = Router::new()
        .nest_service("/static", create_static_service(&state.config.theme))
        .layer(middleware::from_fn(static_response_layer));

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    Router::new()
        .merge(home_routes)
        .merge(health_routes)
        .merge(static_routes)
        .fallback(not_found)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
