//! Configuration module for the storefront console.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::time::Duration;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL every resource path is resolved against
    pub api_base: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Log line format
    pub log_format: LogFormat,
    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_base =
            env::var("STOREFRONT_API_BASE").unwrap_or_else(|_| "http://localhost:8080".to_string());

        let log_level = env::var("STOREFRONT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = match env::var("STOREFRONT_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        let request_timeout = env::var("STOREFRONT_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Self {
            api_base,
            log_level,
            log_format,
            request_timeout,
        }
    }

    /// Configuration pointing at an explicit backend, used by tests and embedders.
    pub fn with_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            request_timeout: None,
        }
    }
}
