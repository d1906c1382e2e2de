//! Home page handler.

use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;
use crate::templates::HOME_TEMPLATE;

/// Home page handler.
///
/// Renders the active theme's home template with the UI settings.
#[instrument(name = "home::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut context = tera::Context::new();
    context.insert("config", &state.config.ui);

    let html = state.tera.render(HOME_TEMPLATE, &context)?;
    Ok(Html(html))
}
