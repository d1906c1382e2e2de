//! Landing: a themeable home page and a liveness endpoint.
//!
//! This is the application entry point. It loads configuration from a TOML
//! file, initializes tracing, loads templates, sets up the Axum router, and
//! starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use landing::config::{AppConfig, LogFormat, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use landing::http::start_server;
use landing::templates::init_templates;
use landing::{create_router, AppState};

/// Landing: a home page and a health check
#[derive(Parser, Debug)]
#[command(name = "landing", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "landing=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // An explicit path must exist; the default path may be absent
    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_or_default(DEFAULT_CONFIG_PATH)?,
    };

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match config.logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!(
        config = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH),
        site_name = %config.ui.site_name,
        theme = %config.theme.name,
        "Loaded configuration"
    );

    let tera = init_templates(&config.theme)?;
    tracing::info!(
        templates = tera.get_template_names().count(),
        "Initialized templates"
    );

    let state = AppState::new(config.clone(), tera);
    let app = create_router(state);

    start_server(app, &config).await?;

    Ok(())
}
