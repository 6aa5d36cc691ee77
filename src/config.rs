//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::dashboard::YearRange;
use crate::esg::{EsgClientConfig, DEFAULT_API_BASE};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// ESG API connection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Dashboard layout and year range
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// First year of the trend series and year selectors
    #[serde(default = "default_first_year")]
    pub first_year: i32,

    /// Last year of the trend series and year selectors
    #[serde(default = "default_last_year")]
    pub last_year: i32,

    /// Year selected when the dashboard opens
    #[serde(default = "default_last_year")]
    pub default_year: i32,

    #[serde(default = "default_chart_width")]
    pub chart_width: usize,

    #[serde(default = "default_chart_height")]
    pub chart_height: usize,
}

fn default_first_year() -> i32 {
    2020
}

fn default_last_year() -> i32 {
    2025
}

fn default_chart_width() -> usize {
    60
}

fn default_chart_height() -> usize {
    12
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            first_year: default_first_year(),
            last_year: default_last_year(),
            default_year: default_last_year(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load `path`, else the first default location, else built-in defaults
    ///
    /// Environment overrides apply in every case.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) => Self::load_with_env(&path),
            None => {
                let config = Self::from_env();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// First existing file among the default config locations
    pub fn default_path() -> Option<PathBuf> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("greenauto").join("config.toml")),
            Some(PathBuf::from("/etc/greenauto/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        config_paths.into_iter().flatten().find(|p| p.exists())
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from `lookup`, keyed by environment variable name
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(url) = lookup("GREENAUTO_API_URL") {
            self.api.base_url = url;
        }
        if let Some(timeout) = lookup("GREENAUTO_REQUEST_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse() {
                self.api.request_timeout_secs = t;
            }
        }

        // Dashboard overrides
        if let Some(year) = lookup("GREENAUTO_DEFAULT_YEAR") {
            if let Ok(y) = year.parse() {
                self.dashboard.default_year = y;
            }
        }

        // Logging overrides
        if let Some(level) = lookup("GREENAUTO_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("GREENAUTO_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Reject settings the dashboard cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dashboard = &self.dashboard;

        if dashboard.first_year > dashboard.last_year {
            return Err(ConfigError::Invalid(format!(
                "first_year {} is after last_year {}",
                dashboard.first_year, dashboard.last_year
            )));
        }
        if self.api.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "api.request_timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("api.base_url is empty".to_string()));
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::Invalid(format!(
                "unknown log format '{}', expected 'pretty' or 'json'",
                self.logging.format
            )));
        }

        Ok(())
    }

    /// Years covered by the trend chart
    pub fn year_range(&self) -> YearRange {
        YearRange::new(self.dashboard.first_year, self.dashboard.last_year)
    }

    /// Client settings for the ESG API
    pub fn client_config(&self) -> EsgClientConfig {
        EsgClientConfig {
            base_url: self.api.base_url.clone(),
            request_timeout_ms: self.api.request_timeout_secs.saturating_mul(1000),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# GreenAuto ESG Dashboard Configuration
#
# Environment variables override these settings:
# - GREENAUTO_API_URL
# - GREENAUTO_REQUEST_TIMEOUT_SECS
# - GREENAUTO_DEFAULT_YEAR
# - GREENAUTO_LOG_LEVEL
# - GREENAUTO_LOG_FORMAT

[api]
# ESG API base URL, including the /api prefix
base_url = "http://localhost:3001/api"

# Request timeout in seconds
request_timeout_secs = 10

[dashboard]
# Inclusive year range of the trend chart and year selectors
first_year = 2020
last_year = 2025

# Year selected when the dashboard opens
default_year = 2025

# Trend chart plot area, in characters
chart_width = 60
chart_height = 12

[logging]
# Log level: trace, debug, info, warn, error (RUST_LOG takes precedence)
level = "warn"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
