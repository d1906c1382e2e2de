//! Landing: a themeable home page and a liveness endpoint.
//!
//! The binary in `main.rs` wires these modules together; the library exists so
//! the router can be driven in-process by integration tests.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod templates;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;

/// Build the application router from a configuration.
///
/// Loads the configured theme's templates; fails if the theme cannot be loaded.
pub fn build_app(config: AppConfig) -> Result<axum::Router, AppError> {
    let tera = templates::init_templates(&config.theme)?;
    Ok(create_router(AppState::new(config, tera)))
}
