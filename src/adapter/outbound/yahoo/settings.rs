//! Yahoo Finance provider configuration.

use serde::Deserialize;

/// HTTP behavior for chart requests.
#[derive(Debug, Clone, Deserialize)]
pub struct YahooHttpConfig {
    /// Whole-request timeout (milliseconds).
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
    /// Connection establishment timeout (milliseconds).
    #[serde(default = "default_http_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Attempts per request, including the first.
    #[serde(default = "default_http_retry_max_attempts")]
    pub retry_max_attempts: u32,
    /// Pause between attempts (milliseconds).
    #[serde(default = "default_http_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

const fn default_http_timeout_ms() -> u64 {
    10_000
}

const fn default_http_connect_timeout_ms() -> u64 {
    5_000
}

const fn default_http_retry_max_attempts() -> u32 {
    3
}

const fn default_http_retry_backoff_ms() -> u64 {
    500
}

impl Default for YahooHttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_http_timeout_ms(),
            connect_timeout_ms: default_http_connect_timeout_ms(),
            retry_max_attempts: default_http_retry_max_attempts(),
            retry_backoff_ms: default_http_retry_backoff_ms(),
        }
    }
}

/// Yahoo Finance chart API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct YahooConfig {
    /// Chart API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub http: YahooHttpConfig,
}

fn default_base_url() -> String {
    "https://query1.finance.yahoo.com".into()
}

impl Default for YahooConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            http: YahooHttpConfig::default(),
        }
    }
}
