//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files and defines constants for
//! HTTP cache TTLs, logging defaults, and default paths. `AppConfig` is the root
//! configuration struct containing all settings. Every section is optional, so
//! an empty file (or no file at all) yields a working configuration.

use const_format::formatcp;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// Values in seconds. stale-if-error (RFC 5861) lets a proxy keep serving the
// home page while the service is down.

/// Home page - content only changes on redeploy
pub const HTTP_CACHE_HOME_MAX_AGE: u32 = 60;
pub const HTTP_CACHE_HOME_SWR: u32 = 30;

/// Static assets (CSS, JS) - long cache with immutable hint
pub const HTTP_CACHE_STATIC_MAX_AGE: u32 = 86400;

/// Error responses - short TTL so a fixed page is picked up quickly
pub const HTTP_CACHE_ERROR_MAX_AGE: u32 = 5;

/// Stale-if-error duration (5 minutes)
pub const HTTP_CACHE_STALE_IF_ERROR: u32 = 300;

pub const CACHE_CONTROL_HOME: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}, stale-if-error={}",
    HTTP_CACHE_HOME_MAX_AGE,
    HTTP_CACHE_HOME_SWR,
    HTTP_CACHE_STALE_IF_ERROR
);

pub const CACHE_CONTROL_STATIC: &str =
    formatcp!("public, max-age={}, immutable", HTTP_CACHE_STATIC_MAX_AGE);

pub const CACHE_CONTROL_ERROR: &str = formatcp!("public, max-age={}", HTTP_CACHE_ERROR_MAX_AGE);

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "landing=debug,tower_http=debug";

/// Name of the built-in theme compiled into the binary
pub const DEFAULT_THEME: &str = "default";

/// Default directory holding on-disk themes
pub const DEFAULT_THEMES_DIR: &str = "themes";

/// Subdirectory of a theme containing templates
pub const TEMPLATES_SUBDIR: &str = "templates";

/// Subdirectory of a theme containing static files
pub const STATIC_SUBDIR: &str = "static";

/// Default site title
pub const DEFAULT_SITE_NAME: &str = "Landing";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        "127.0.0.1".to_string()
    }

    fn default_port() -> u16 {
        5000
    }
}

/// Values exposed to templates
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// Site title shown in the header and page title
    #[serde(default = "UiConfig::default_site_name")]
    pub site_name: String,
    /// Optional line shown under the title
    pub tagline: Option<String>,
    /// Version string, populated at runtime
    #[serde(skip_deserializing, default = "UiConfig::default_version")]
    pub version: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            site_name: Self::default_site_name(),
            tagline: None,
            version: Self::default_version(),
        }
    }
}

impl UiConfig {
    fn default_site_name() -> String {
        DEFAULT_SITE_NAME.to_string()
    }

    fn default_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

/// Theme selection
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    /// Active theme name; "default" uses the built-in templates
    #[serde(default = "ThemeConfig::default_name")]
    pub name: String,
    /// Directory containing one subdirectory per theme
    #[serde(default = "ThemeConfig::default_themes_dir")]
    pub themes_dir: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            themes_dir: Self::default_themes_dir(),
        }
    }
}

impl ThemeConfig {
    fn default_name() -> String {
        DEFAULT_THEME.to_string()
    }

    fn default_themes_dir() -> String {
        DEFAULT_THEMES_DIR.to_string()
    }

    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_THEME
    }

    /// Path to a theme's template directory
    pub fn templates_path(&self, theme: &str) -> PathBuf {
        Path::new(&self.themes_dir).join(theme).join(TEMPLATES_SUBDIR)
    }

    /// Path to a theme's static file directory
    pub fn static_path(&self, theme: &str) -> PathBuf {
        Path::new(&self.themes_dir).join(theme).join(STATIC_SUBDIR)
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load from `path`, or fall back to defaults when the file does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.http.host.trim().is_empty() {
            return Err(ConfigError::Validation("http.host must not be empty".to_string()));
        }

        let name = &self.theme.name;
        if name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err(ConfigError::Validation(format!(
                "theme.name must be a plain directory name, got '{}'",
                name
            )));
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
