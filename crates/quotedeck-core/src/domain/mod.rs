//! # Domain Models
//!
//! Canonical domain types for quotedeck.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Non-empty ticker, the key for quote and news lookups |
//! | [`QuoteRecord`] | Current/high/low/open/previous-close snapshot |
//! | [`NewsArticle`] | One company-news item with an optional publish epoch |
//! | [`NewsDateRange`] | Inclusive UTC `from..=to` window for news lookups |
//! | [`PublishedDate`] | Display date that keeps "unknown" distinct from 1970 |
//!
//! Dates are always interpreted in UTC so that the news window and the
//! rendered article dates agree regardless of the host timezone.

mod news;
mod quote;
mod symbol;

pub use news::{
    format_calendar_date, NewsArticle, NewsDateRange, PublishedDate, NEWS_LOOKBACK_DAYS,
};
pub use quote::QuoteRecord;
pub use symbol::Symbol;
