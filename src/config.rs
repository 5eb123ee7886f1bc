//! Runtime configuration, read from the environment (and `.env` via dotenv)

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::api::{AlphaVantageClient, UpbitClient};

/// Pause between the quote request and the series request for the same
/// symbol. The free Alpha Vantage tier rejects bursts of calls.
pub const SERIES_FETCH_DELAY: Duration = Duration::from_secs(1);

/// Value shipped in sample `.env` files; treated the same as no key
pub const API_KEY_PLACEHOLDER: &str = "YOUR_ALPHA_VANTAGE_API_KEY";

pub const DEFAULT_CHART_DIR: &str = "charts";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("SERIES_DELAY_MS must be a whole number of milliseconds, got '{0}'")]
    InvalidDelay(String),
}

/// Alpha Vantage API key. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// `None` for a missing, blank or placeholder key
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() || raw == API_KEY_PLACEHOLDER {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<ApiKey>,
    pub alpha_vantage_url: String,
    pub upbit_url: String,
    /// `None` when `CORS_RELAY_URL` is set to an empty string
    pub relay_url: Option<String>,
    pub chart_dir: PathBuf,
    pub series_delay: Duration,
}

impl Config {
    /// Load from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("ALPHA_VANTAGE_API_KEY").and_then(|raw| ApiKey::parse(&raw));

        let relay_url = match lookup("CORS_RELAY_URL") {
            Some(url) if url.trim().is_empty() => None,
            Some(url) => Some(url),
            None => Some(UpbitClient::DEFAULT_RELAY_URL.to_string()),
        };

        let series_delay = match lookup("SERIES_DELAY_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidDelay(raw.clone()))?,
            None => SERIES_FETCH_DELAY,
        };

        Ok(Self {
            api_key,
            alpha_vantage_url: lookup("ALPHA_VANTAGE_BASE_URL")
                .unwrap_or_else(|| AlphaVantageClient::DEFAULT_BASE_URL.to_string()),
            upbit_url: lookup("UPBIT_BASE_URL")
                .unwrap_or_else(|| UpbitClient::DEFAULT_BASE_URL.to_string()),
            relay_url,
            chart_dir: lookup("CHART_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CHART_DIR)),
            series_delay,
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
