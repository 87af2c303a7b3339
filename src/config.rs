//! Configuration management for contact intake.
//!
//! This module handles loading and validating configuration from environment
//! variables. The collection endpoint URL is the one required setting; the
//! rest have sensible defaults.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact intake pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the spreadsheet-backed collection endpoint
    pub endpoint_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// How long the status banner stays visible in seconds (default: 5)
    pub status_banner_secs: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `INTAKE_ENDPOINT_URL`: URL of the collection endpoint
    ///
    /// Optional environment variables:
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `STATUS_BANNER_SECS`: status banner display window (default: 5)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let endpoint_url = env::var("INTAKE_ENDPOINT_URL")
            .map_err(|_| ConfigError::MissingVar("INTAKE_ENDPOINT_URL".to_string()))?;

        // Validate endpoint URL format
        if !endpoint_url.starts_with("http://") && !endpoint_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "INTAKE_ENDPOINT_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let status_banner_secs = Self::parse_env_u64("STATUS_BANNER_SECS", 5)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            endpoint_url,
            request_timeout,
            status_banner_secs,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint_url: String::new(),
            request_timeout: 10,
            status_banner_secs: 5,
            log_level: "error".to_string(),
        }
    }
}
