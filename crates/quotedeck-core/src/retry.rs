//! Opt-in retry policy layered over a [`MarketDataSource`].
//!
//! Fetchers make a single attempt. Callers that want bounded exponential
//! backoff wrap their source in [`RetryingSource`]; the wrapped source still
//! satisfies the same contract, it just takes longer to give up.

use std::time::Duration;

use tracing::debug;

use crate::data_source::{FetchError, FetchFuture, MarketDataSource};
use crate::{NewsArticle, NewsDateRange, QuoteRecord, Symbol};

/// Wait between two attempts at the same symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Backoff {
    Fixed { delay: Duration },
    /// `base * factor^attempt`, capped at `max`, optionally spread by +/- 50%.
    Exponential {
        base: Duration,
        factor: f64,
        max: Duration,
        jitter: bool,
    },
}

impl Default for Backoff {
    fn default() -> Self {
        Self::Exponential {
            base: Duration::from_millis(200),
            factor: 2.0,
            max: Duration::from_secs(3),
            jitter: true,
        }
    }
}

impl Backoff {
    /// Delay before retry number `attempt` (0-based).
    pub fn delay(self, attempt: u32) -> Duration {
        let (base, factor, max, jitter) = match self {
            Self::Fixed { delay } => return delay,
            Self::Exponential { base, factor, max, jitter } => (base, factor, max, jitter),
        };

        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let capped = (base.as_secs_f64() * factor.powi(exponent)).min(max.as_secs_f64());
        let nominal_ms = (capped * 1_000.0).round() as u64;

        if !jitter || nominal_ms == 0 {
            return Duration::from_millis(nominal_ms);
        }

        let spread = nominal_ms / 2;
        let low = nominal_ms - spread;
        Duration::from_millis(fastrand::u64(low..=nominal_ms + spread))
    }
}

/// Retry policy for a [`RetryingSource`].
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    pub enabled: bool,
    /// Total attempts = `max_retries + 1`.
    pub max_retries: u32,
    pub backoff: Backoff,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::no_retry()
    }
}

impl RetryConfig {
    /// Exponential backoff with jitter and `max_retries` extra attempts.
    pub fn exponential(max_retries: u32) -> Self {
        Self {
            enabled: max_retries > 0,
            max_retries,
            backoff: Backoff::default(),
        }
    }

    pub fn fixed(delay: Duration, max_retries: u32) -> Self {
        Self {
            enabled: max_retries > 0,
            max_retries,
            backoff: Backoff::Fixed { delay },
        }
    }

    /// Single attempt, the fetchers' native behaviour.
    pub fn no_retry() -> Self {
        Self {
            enabled: false,
            max_retries: 0,
            backoff: Backoff::default(),
        }
    }

    /// Whether attempt number `attempt` (0-based) that failed with `error` gets another go.
    pub fn should_retry(&self, error: &FetchError, attempt: u32) -> bool {
        self.enabled && attempt < self.max_retries && error.retryable()
    }

    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        self.backoff.delay(attempt)
    }
}

/// Source decorator that retries retryable failures per symbol.
#[derive(Debug, Clone)]
pub struct RetryingSource<S> {
    inner: S,
    config: RetryConfig,
}

impl<S> RetryingSource<S> {
    pub fn new(inner: S, config: RetryConfig) -> Self {
        Self { inner, config }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: MarketDataSource> RetryingSource<S> {
    async fn with_retries<'a, T, F>(&'a self, symbol: &'a Symbol, mut call: F) -> Result<T, FetchError>
    where
        F: FnMut() -> FetchFuture<'a, T>,
    {
        let mut attempt = 0;
        loop {
            match call().await {
                Ok(value) => return Ok(value),
                Err(error) if self.config.should_retry(&error, attempt) => {
                    let delay = self.config.delay_for_attempt(attempt);
                    debug!(
                        symbol = %symbol,
                        attempt = attempt + 1,
                        delay_ms = delay.as_millis() as u64,
                        "retrying after {}",
                        error.message()
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }
}

impl<S: MarketDataSource> MarketDataSource for RetryingSource<S> {
    fn quote<'a>(&'a self, symbol: &'a Symbol) -> FetchFuture<'a, QuoteRecord> {
        Box::pin(self.with_retries(symbol, move || self.inner.quote(symbol)))
    }

    fn company_news<'a>(
        &'a self,
        symbol: &'a Symbol,
        range: NewsDateRange,
    ) -> FetchFuture<'a, Vec<NewsArticle>> {
        Box::pin(self.with_retries(symbol, move || self.inner.company_news(symbol, range)))
    }
}
