//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Every section is optional; a missing file means all defaults.
//!
//! # Example
//!
//! ```no_run
//! use hindsight::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("hindsight.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use super::logging::LoggingConfig;
use crate::adapter::outbound::report::ReportFormat;
use crate::adapter::outbound::yahoo::YahooConfig;
use crate::application::scanner::ScannerConfig;
use crate::error::{ConfigError, Result};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "hindsight.toml";

/// Longest supported trailing window.
pub const MAX_WINDOW_DAYS: u32 = 3_650;

/// Where the instrument list lives.
#[derive(Debug, Clone, Deserialize)]
pub struct InstrumentsConfig {
    /// Path to a JSON array of ticker symbols.
    #[serde(default = "default_instruments_path")]
    pub path: PathBuf,
}

fn default_instruments_path() -> PathBuf {
    PathBuf::from("tickers.json")
}

impl Default for InstrumentsConfig {
    fn default() -> Self {
        Self {
            path: default_instruments_path(),
        }
    }
}

/// Report rendering settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: ReportFormat,
}

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Instrument list location.
    #[serde(default)]
    pub instruments: InstrumentsConfig,

    /// Market data provider settings.
    #[serde(default)]
    pub provider: YahooConfig,

    /// Worker pool size and price window.
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Report format.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load an explicit config file, or fall back to [`DEFAULT_CONFIG_PATH`]
    /// when it exists, or to defaults.
    ///
    /// # Errors
    ///
    /// Fails if an explicit path cannot be loaded, or if the default file
    /// exists but is invalid.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let fallback = Path::new(DEFAULT_CONFIG_PATH);
        if fallback.exists() {
            debug!(path = DEFAULT_CONFIG_PATH, "Using config from working directory");
            return Self::load(fallback);
        }
        Ok(Self::default())
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are present and values are within
    /// acceptable ranges.
    pub fn validate(&self) -> Result<()> {
        if self.provider.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "base_url" }.into());
        }
        if self.instruments.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "path" }.into());
        }
        if self.scanner.workers == 0 {
            return Err(ConfigError::InvalidValue {
                field: "workers",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.scanner.window_days == 0 || self.scanner.window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                field: "window_days",
                reason: format!("must be between 1 and {MAX_WINDOW_DAYS}"),
            }
            .into());
        }
        if self.provider.http.timeout_ms == 0 || self.provider.http.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "timeouts must be greater than 0".to_string(),
            }
            .into());
        }
        if self.provider.http.retry_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry_max_attempts",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
