//! Directory configuration
//!
//! Values come from, in order of precedence: command-line flags, the
//! process environment (optionally seeded from a `.env` file), then the
//! defaults below.

use std::time::Duration;

use url::Url;

use crate::error::{DirectoryError, DirectoryResult};

/// Public mock store used when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://672bba501600dda5a9f62663.mockapi.io/api";

/// Request timeout applied to every store call
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const BASE_URL_ENV: &str = "ROSTER_BASE_URL";
pub const TIMEOUT_ENV: &str = "ROSTER_TIMEOUT_MS";
pub const LOG_LEVEL_ENV: &str = "ROSTER_LOG_LEVEL";

/// Connection settings for the remote employee store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Base URL; the `employees` collection lives directly under it
    pub base_url: Url,

    pub timeout: Duration,

    pub log_level: String,
}

impl DirectoryConfig {
    pub fn new(base_url: &str) -> DirectoryResult<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        })
    }

    /// Load from the process environment, reading `.env` first if present
    pub fn from_env() -> DirectoryResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> DirectoryResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut config = Self::new(&base_url)?;

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let millis: u64 = raw
                .trim()
                .parse()
                .map_err(|_| DirectoryError::config(format!("{TIMEOUT_ENV} must be a whole number of milliseconds, got {raw:?}")))?;
            config = config.with_timeout(Duration::from_millis(millis));
        }

        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            config = config.with_log_level(level);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> DirectoryResult<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_log_level(mut self, log_level: impl Into<String>) -> Self {
        self.log_level = log_level.into();
        self
    }
}

fn parse_base_url(raw: &str) -> DirectoryResult<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| DirectoryError::config(format!("invalid base URL {raw:?}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(DirectoryError::config(format!(
            "base URL must be an http(s) URL, got {raw:?}"
        )));
    }

    Ok(url)
}
