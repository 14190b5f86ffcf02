//! # Quotedeck Core
//!
//! Client-side quote and news aggregation for the Quotedeck toolkit.
//!
//! ## Overview
//!
//! This crate provides the engine behind a stock dashboard:
//!
//! - **Domain types** for symbols, quote snapshots and news articles
//! - **Data source trait** with a Finnhub adapter behind an injectable HTTP client
//! - **Fetchers** that turn every upstream failure into a value
//! - **Bulk aggregation** with concurrent fan-out and order-preserving fan-in
//! - **Search and pagination** as pure functions over the aggregated set
//! - **View state** containers that derive every rendered page on demand
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Provider adapters (Finnhub) |
//! | [`aggregator`] | Concurrent multi-symbol quote aggregation |
//! | [`config`] | Provider configuration from the environment |
//! | [`data_source`] | Data source trait and [`FetchError`] |
//! | [`domain`] | Domain models (Symbol, QuoteRecord, NewsArticle) |
//! | [`error`] | Core error types |
//! | [`fetcher`] | Single-symbol quote and news fetchers |
//! | [`http_client`] | HTTP client abstraction |
//! | [`pagination`] | Stateless page windows |
//! | [`retry`] | Opt-in retry layer |
//! | [`search`] | Case-insensitive prefix search |
//! | [`view_state`] | Board and feed state for the presentation layer |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quotedeck_core::{aggregate, paginate, search, FinnhubAdapter, ProviderConfig, Symbol};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let adapter = FinnhubAdapter::new(ProviderConfig::from_env()?);
//!
//!     let symbols = Symbol::parse_all(["AAPL", "AMZN", "MSFT"])?;
//!     let quotes = aggregate(&adapter, &symbols).await;
//!
//!     let matches = search::filter("a", quotes.records());
//!     let page = paginate(&matches, 10, 1)?;
//!     for quote in page.items {
//!         println!("{}: ${:.2}", quote.symbol, quote.current_price);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  CLI / Viewer   │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Board / Feed    │────▶│ Search + Paging  │
//! └────────┬────────┘     └──────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Aggregator /    │────▶│ Retry (opt-in)   │
//! │ Fetchers        │     └──────────────────┘
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Data Source     │────▶│ HTTP Client      │
//! │ (Adapter Trait) │     │ (reqwest/fake)   │
//! └─────────────────┘     └──────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Fetch failures are values, not panics:
//!
//! ```rust
//! use quotedeck_core::{FetchError, FetchErrorKind};
//!
//! fn describe(error: &FetchError) -> &'static str {
//!     match error.kind() {
//!         FetchErrorKind::Transport => "network problem",
//!         FetchErrorKind::Provider => "provider refused",
//!         FetchErrorKind::Malformed => "unexpected response",
//!     }
//! }
//! ```
//!
//! ## Security
//!
//! - The API token is read from environment variables only and never logged
//! - All HTTP requests use TLS via rustls

pub mod adapters;
pub mod aggregator;
pub mod config;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod fetcher;
pub mod http_client;
pub mod pagination;
pub mod retry;
pub mod search;
pub mod view_state;

// Re-export commonly used types at crate root for convenience

// Adapter implementations
pub use adapters::FinnhubAdapter;

// Aggregation
pub use aggregator::{aggregate, AggregatedResultSet};

// Configuration
pub use config::{ProviderConfig, DEFAULT_UNIVERSE, MAX_UNIVERSE};

// Data source trait and types
pub use data_source::{FetchError, FetchErrorKind, FetchFuture, MarketDataSource};

// Domain models
pub use domain::{
    format_calendar_date, NewsArticle, NewsDateRange, PublishedDate, QuoteRecord, Symbol,
    NEWS_LOOKBACK_DAYS,
};

// Errors
pub use error::{ConfigError, ValidationError};

// Fetchers
pub use fetcher::{fetch_news, fetch_quote};

// HTTP client
pub use http_client::{HttpAuth, HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

// Pagination and search
pub use pagination::{paginate, PageRequest, PageWindow, DEFAULT_PAGE_SIZE};
pub use search::{SearchQuery, Searchable};

// Retry
pub use retry::{Backoff, RetryConfig, RetryingSource};

// View state
pub use view_state::{LoadState, MarketBoard, NewsFeed, ViewStatus};
