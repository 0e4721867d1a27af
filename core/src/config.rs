//! Client configuration.
//!
//! The API key is the only required input. It is held by the client for its
//! whole lifetime and attached to every outgoing request.

use std::time::Duration;

use crate::error::ApiError;

/// Host used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://api.wordnik.com";

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const API_KEY_VAR: &str = "WORDNIK_API_KEY";
const BASE_URL_VAR: &str = "WORDNIK_BASE_URL";
const TIMEOUT_VAR: &str = "WORDNIK_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load from `WORDNIK_API_KEY`, `WORDNIK_BASE_URL` and
    /// `WORDNIK_TIMEOUT_SECS`. Only the key is required.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let api_key = lookup(API_KEY_VAR)
            .ok_or_else(|| ApiError::Config(format!("{API_KEY_VAR} is not set")))?;
        let mut config = Self::new(api_key);

        if let Some(base_url) = lookup(BASE_URL_VAR) {
            config = config.with_base_url(&base_url);
        }
        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ApiError::Config(format!("{TIMEOUT_VAR} must be whole seconds, got {raw:?}")))?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}
