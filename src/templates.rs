//! Tera template loading with theme fallback.
//!
//! The default theme is compiled into the binary. A non-default theme is read
//! from disk and any template it does not provide falls back to the built-in one.

use tera::Tera;

use crate::config::ThemeConfig;
use crate::error::AppError;

/// Built-in templates, as (name, source) pairs
const DEFAULT_TEMPLATES: [(&str, &str); 2] = [
    (
        "base.html",
        include_str!("../themes/default/templates/base.html"),
    ),
    (
        "home.html",
        include_str!("../themes/default/templates/home.html"),
    ),
];

/// Template rendered for `/`
pub const HOME_TEMPLATE: &str = "home.html";

fn default_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(DEFAULT_TEMPLATES)?;
    Ok(tera)
}

/// Initialize the Tera template engine for the configured theme
pub fn init_templates(theme: &ThemeConfig) -> Result<Tera, AppError> {
    let defaults = default_templates()?;

    if theme.is_default() {
        return Ok(defaults);
    }

    let dir = theme.templates_path(&theme.name);
    if !dir.is_dir() {
        return Err(AppError::Internal(format!(
            "Theme '{}' has no template directory at {}",
            theme.name,
            dir.display()
        )));
    }

    let glob = format!("{}/**/*", dir.display());
    // Parse without resolving `extends`: a theme template may inherit from a built-in one
    let mut tera = Tera::parse(&glob)?;
    tracing::debug!(
        theme = %theme.name,
        templates = tera.get_template_names().count(),
        "Loaded theme templates"
    );

    // Templates already present in the theme take precedence
    tera.extend(&defaults)?;
    tera.build_inheritance_chains()?;
    Ok(tera)
}
