//! Provider configuration sourced from the environment.
//!
//! | Setting | Primary Env Var | Fallback Env Var | Default |
//! |---------|-----------------|------------------|---------|
//! | API token | `QUOTEDECK_FINNHUB_API_KEY` | `FINNHUB_API_KEY` | (required) |
//! | Base URL | `QUOTEDECK_FINNHUB_BASE_URL` | - | `https://finnhub.io/api/v1` |
//! | Timeout | `QUOTEDECK_TIMEOUT_MS` | - | `10000` |
//!
//! The token is never given a literal default and is redacted from `Debug`.

use std::env;
use std::fmt::{Debug, Formatter};

use crate::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const ENV_API_KEY: &str = "QUOTEDECK_FINNHUB_API_KEY";
pub const ENV_API_KEY_FALLBACK: &str = "FINNHUB_API_KEY";
pub const ENV_BASE_URL: &str = "QUOTEDECK_FINNHUB_BASE_URL";
pub const ENV_TIMEOUT_MS: &str = "QUOTEDECK_TIMEOUT_MS";

/// Popular US tickers used as the default candidate universe.
pub const DEFAULT_UNIVERSE: [&str; 48] = [
    "AAPL", "MSFT", "GOOGL", "AMZN", "TSLA", "NVDA", "META", "NFLX", "INTC", "IBM", "ORCL", "ADBE",
    "PYPL", "CSCO", "BABA", "V", "MA", "JPM", "BAC", "C", "XOM", "WMT", "DIS", "KO", "PFE", "T",
    "PEP", "ABT", "CVX", "UNH", "MRK", "HD", "NKE", "MCD", "PG", "LLY", "AVGO", "VZ", "RTX", "UPS",
    "CAT", "GS", "MS", "BA", "MMM", "GE", "HON", "F",
];

/// Upper bound on the candidate set loaded in one refresh.
pub const MAX_UNIVERSE: usize = 50;

/// Connection settings for the quote provider.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub base_url: String,
    api_key: String,
    pub timeout_ms: u64,
}

impl ProviderConfig {
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        Ok(Self {
            base_url: String::from(DEFAULT_BASE_URL),
            api_key,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        })
    }

    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .filter(|value| !value.trim().is_empty())
            .or_else(|| lookup(ENV_API_KEY_FALLBACK))
            .ok_or(ConfigError::MissingApiKey)?;

        let mut config = Self::new(api_key)?;

        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|value| !value.trim().is_empty()) {
            config = config.with_base_url(base_url);
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            let timeout_ms = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|value| *value > 0)
                .ok_or(ConfigError::InvalidValue {
                    name: ENV_TIMEOUT_MS,
                    value: raw.clone(),
                })?;
            config.timeout_ms = timeout_ms;
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl Debug for ProviderConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
