//! Configuration management for the entscheidsuche adapter.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{EntscheidsucheError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application directory name under the XDG config home
const APP_DIR: &str = "entscheidsuche-mcp";

/// Legacy config file looked up in the working directory
const LOCAL_CONFIG_FILE: &str = "entscheidsuche.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Which request/response shape the search endpoint speaks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDialect {
    /// Elasticsearch query DSL bodies
    #[default]
    Elasticsearch,
    /// Plain `{query: "..."}` full-text bodies
    Fulltext,
}

impl SearchDialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchDialect::Elasticsearch => "elasticsearch",
            SearchDialect::Fulltext => "fulltext",
        }
    }
}

impl std::str::FromStr for SearchDialect {
    type Err = EntscheidsucheError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "elasticsearch" | "es" => Ok(SearchDialect::Elasticsearch),
            "fulltext" | "full-text" => Ok(SearchDialect::Fulltext),
            other => Err(EntscheidsucheError::ConfigError(format!(
                "Unknown search dialect '{other}' (expected 'elasticsearch' or 'fulltext')"
            ))),
        }
    }
}

/// Upstream service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Service root, e.g. https://entscheidsuche.ch
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the search endpoint relative to base_url
    #[serde(default = "default_search_path")]
    pub search_path: String,

    /// Path of the HTML status page listing courts per canton
    #[serde(default = "default_status_path")]
    pub status_path: String,

    #[serde(default)]
    pub dialect: SearchDialect,

    /// Transport timeout per request in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Outbound pacing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Minimum spacing between two upstream requests (milliseconds)
    #[serde(default = "default_min_interval_ms")]
    pub min_interval_ms: u64,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Page size when the caller does not ask for one
    #[serde(default = "default_size")]
    pub default_size: usize,

    /// Upper bound for the page size
    #[serde(default = "default_max_size")]
    pub max_size: usize,
}

/// Output shaping configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Maximum characters of HTML/text returned for one document
    #[serde(default = "default_max_document_chars")]
    pub max_document_chars: usize,
}

// Default value functions
fn default_base_url() -> String {
    "https://entscheidsuche.ch".to_string()
}

fn default_search_path() -> String {
    "/_searchV2.php".to_string()
}

fn default_status_path() -> String {
    "/status".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_user_agent() -> String {
    concat!("entscheidsuche-mcp/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_min_interval_ms() -> u64 {
    500
}

fn default_size() -> usize {
    10
}

fn default_max_size() -> usize {
    50
}

fn default_max_document_chars() -> usize {
    20_000
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            search_path: default_search_path(),
            status_path: default_status_path(),
            dialect: SearchDialect::default(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            min_interval_ms: default_min_interval_ms(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_size: default_size(),
            max_size: default_max_size(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            max_document_chars: default_max_document_chars(),
        }
    }
}

impl UpstreamConfig {
    /// Service root without trailing slash
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn search_url(&self) -> String {
        join_url(self.base(), &self.search_path)
    }

    pub fn status_url(&self) -> String {
        join_url(self.base(), &self.status_path)
    }

    /// Root of the static document store
    pub fn docs_url(&self) -> String {
        format!("{}/docs", self.base())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl RateLimitConfig {
    pub fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms)
    }
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}/{}", base, path.trim_start_matches('/'))
}

/// Resolve the XDG config file location
///
/// Priority order:
/// 1. XDG_CONFIG_HOME/entscheidsuche-mcp/config.toml
/// 2. ~/.config/entscheidsuche-mcp/config.toml
pub fn xdg_config_file() -> PathBuf {
    let config_home = match env::var("XDG_CONFIG_HOME") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config"),
    };
    config_home.join(APP_DIR).join("config.toml")
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            EntscheidsucheError::ConfigError(format!("Failed to read config file: {e}"))
        })?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File lookup order:
    /// 1. ENTSCHEIDSUCHE_CONFIG env var
    /// 2. XDG config file (~/.config/entscheidsuche-mcp/config.toml)
    /// 3. ./entscheidsuche.toml
    /// 4. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("ENTSCHEIDSUCHE_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg_config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new(LOCAL_CONFIG_FILE).exists() {
                Self::from_file(LOCAL_CONFIG_FILE)?
            } else {
                Self::default()
            }
        };

        config.merge_env()?;
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) -> Result<()> {
        // Upstream configuration
        if let Ok(base_url) = env::var("ENTSCHEIDSUCHE_BASE_URL") {
            self.upstream.base_url = base_url;
        }
        if let Ok(path) = env::var("ENTSCHEIDSUCHE_SEARCH_PATH") {
            self.upstream.search_path = path;
        }
        if let Ok(path) = env::var("ENTSCHEIDSUCHE_STATUS_PATH") {
            self.upstream.status_path = path;
        }
        if let Ok(dialect) = env::var("ENTSCHEIDSUCHE_DIALECT") {
            self.upstream.dialect = dialect.parse()?;
        }
        if let Ok(timeout) = env::var("ENTSCHEIDSUCHE_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse() {
                self.upstream.timeout_secs = t;
            }
        }

        // Rate limit configuration
        if let Ok(interval) = env::var("ENTSCHEIDSUCHE_MIN_INTERVAL_MS") {
            if let Ok(ms) = interval.parse() {
                self.rate_limit.min_interval_ms = ms;
            }
        }

        // Search configuration
        if let Ok(size) = env::var("ENTSCHEIDSUCHE_DEFAULT_SIZE") {
            if let Ok(s) = size.parse() {
                self.search.default_size = s;
            }
        }
        if let Ok(size) = env::var("ENTSCHEIDSUCHE_MAX_SIZE") {
            if let Ok(s) = size.parse() {
                self.search.max_size = s;
            }
        }

        // Output configuration
        if let Ok(chars) = env::var("ENTSCHEIDSUCHE_MAX_DOCUMENT_CHARS") {
            if let Ok(c) = chars.parse() {
                self.output.max_document_chars = c;
            }
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let base = self.upstream.base_url.trim();
        if base.is_empty() {
            return Err(EntscheidsucheError::ConfigError(
                "Base URL must not be empty".to_string(),
            ));
        }

        if url::Url::parse(base).map_or(true, |u| !matches!(u.scheme(), "http" | "https")) {
            return Err(EntscheidsucheError::ConfigError(format!(
                "Base URL must be an http(s) URL, got '{base}'"
            )));
        }

        if self.upstream.timeout_secs == 0 {
            return Err(EntscheidsucheError::ConfigError(
                "Timeout must be non-zero".to_string(),
            ));
        }

        if self.search.default_size == 0 {
            return Err(EntscheidsucheError::ConfigError(
                "Default size must be non-zero".to_string(),
            ));
        }

        if self.search.default_size > self.search.max_size {
            return Err(EntscheidsucheError::ConfigError(
                "Default size cannot exceed max size".to_string(),
            ));
        }

        if self.output.max_document_chars == 0 {
            return Err(EntscheidsucheError::ConfigError(
                "Max document chars must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Base URL: {}", self.upstream.base());
        tracing::info!("  Search endpoint: {}", self.upstream.search_url());
        tracing::info!("  Status page: {}", self.upstream.status_url());
        tracing::info!("  Dialect: {}", self.upstream.dialect.as_str());
        tracing::info!("  Timeout: {}s", self.upstream.timeout_secs);
        tracing::info!("  Min request interval: {}ms", self.rate_limit.min_interval_ms);
        tracing::info!("  Default size: {}", self.search.default_size);
        tracing::info!("  Max size: {}", self.search.max_size);
        tracing::info!(
            "  Max document chars: {}",
            self.output.max_document_chars
        );
    }
}
