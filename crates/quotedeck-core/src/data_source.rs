//! Data source trait and the value-level failure type.
//!
//! | Endpoint | Method | Success |
//! |----------|--------|---------|
//! | Quote | [`MarketDataSource::quote`] | [`QuoteRecord`] |
//! | Company news | [`MarketDataSource::company_news`] | `Vec<NewsArticle>` |
//!
//! A source makes exactly one upstream attempt per call. Every way that
//! attempt can go wrong collapses into a [`FetchError`] carrying the symbol,
//! so callers fanning out over many symbols handle failures as plain values.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::{NewsArticle, NewsDateRange, QuoteRecord, Symbol};

/// Failure taxonomy at the fetcher boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Network, DNS or timeout failure; no response was received.
    Transport,
    /// Non-success status or an error envelope from the provider.
    Provider,
    /// The response body did not match the expected schema.
    Malformed,
}

impl FetchErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Provider => "provider",
            Self::Malformed => "malformed_response",
        }
    }
}

/// Value-level failure for one symbol's fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    kind: FetchErrorKind,
    symbol: Symbol,
    message: String,
    retryable: bool,
}

impl FetchError {
    pub fn transport(symbol: &Symbol, message: impl Into<String>, retryable: bool) -> Self {
        Self {
            kind: FetchErrorKind::Transport,
            symbol: symbol.clone(),
            message: message.into(),
            retryable,
        }
    }

    pub fn provider(symbol: &Symbol, status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Provider,
            symbol: symbol.clone(),
            message: message.into(),
            retryable: status == 429 || status >= 500,
        }
    }

    pub fn malformed(symbol: &Symbol, message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Malformed,
            symbol: symbol.clone(),
            message: message.into(),
            retryable: false,
        }
    }

    pub const fn kind(&self) -> FetchErrorKind {
        self.kind
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} ({})",
            self.symbol,
            self.message,
            self.kind.as_str()
        )
    }
}

impl std::error::Error for FetchError {}

pub type FetchFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, FetchError>> + Send + 'a>>;

/// Per-symbol market-data source.
///
/// Implementations must be `Send + Sync`; the aggregator borrows one source
/// across every in-flight request of a batch.
pub trait MarketDataSource: Send + Sync {
    /// Fetches one quote snapshot with a single upstream attempt.
    fn quote<'a>(&'a self, symbol: &'a Symbol) -> FetchFuture<'a, QuoteRecord>;

    /// Fetches company news published inside `range`.
    fn company_news<'a>(
        &'a self,
        symbol: &'a Symbol,
        range: NewsDateRange,
    ) -> FetchFuture<'a, Vec<NewsArticle>>;
}

impl<S> MarketDataSource for std::sync::Arc<S>
where
    S: MarketDataSource + ?Sized,
{
    fn quote<'a>(&'a self, symbol: &'a Symbol) -> FetchFuture<'a, QuoteRecord> {
        (**self).quote(symbol)
    }

    fn company_news<'a>(
        &'a self,
        symbol: &'a Symbol,
        range: NewsDateRange,
    ) -> FetchFuture<'a, Vec<NewsArticle>> {
        (**self).company_news(symbol, range)
    }
}
