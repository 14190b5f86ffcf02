//! Single-symbol quote and news fetchers.
//!
//! Both make exactly one attempt against the source. Quote failures come back
//! as a [`FetchError`] value; news failures degrade to an empty list.

use time::OffsetDateTime;
use tracing::warn;

use crate::data_source::{FetchError, MarketDataSource};
use crate::{NewsArticle, NewsDateRange, QuoteRecord, Symbol};

/// Fetches one quote. Never panics or propagates past the returned value.
pub async fn fetch_quote<S>(source: &S, symbol: &Symbol) -> Result<QuoteRecord, FetchError>
where
    S: MarketDataSource + ?Sized,
{
    let outcome = source.quote(symbol).await;
    if let Err(error) = &outcome {
        warn!(
            symbol = %symbol,
            kind = error.kind().as_str(),
            "quote fetch failed: {}",
            error.message()
        );
    }
    outcome
}

/// Fetches the last seven days of company news relative to `now`.
///
/// Returns an empty list on any failure.
pub async fn fetch_news<S>(source: &S, symbol: &Symbol, now: OffsetDateTime) -> Vec<NewsArticle>
where
    S: MarketDataSource + ?Sized,
{
    let range = NewsDateRange::last_week(now);
    match source.company_news(symbol, range).await {
        Ok(articles) => articles,
        Err(error) => {
            warn!(
                symbol = %symbol,
                kind = error.kind().as_str(),
                "news fetch failed, showing no articles: {}",
                error.message()
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_source::{FetchErrorKind, FetchFuture};
    use std::sync::Mutex;
    use time::macros::datetime;

    #[derive(Default)]
    struct NewsOnlySource {
        fail: bool,
        ranges: Mutex<Vec<NewsDateRange>>,
    }

    impl MarketDataSource for NewsOnlySource {
        fn quote<'a>(&'a self, symbol: &'a Symbol) -> FetchFuture<'a, QuoteRecord> {
            Box::pin(async move { Err(FetchError::malformed(symbol, "quotes unsupported")) })
        }

        fn company_news<'a>(
            &'a self,
            symbol: &'a Symbol,
            range: NewsDateRange,
        ) -> FetchFuture<'a, Vec<NewsArticle>> {
            self.ranges.lock().expect("not poisoned").push(range);
            Box::pin(async move {
                if self.fail {
                    return Err(FetchError::provider(symbol, 500, "boom"));
                }
                Ok(vec![NewsArticle {
                    id: 1,
                    headline: format!("{symbol} news"),
                    summary: String::new(),
                    url: String::from("https://n.test/1"),
                    published_at: None,
                }])
            })
        }
    }

    fn symbol() -> Symbol {
        Symbol::parse("IBM").expect("valid symbol")
    }

    #[tokio::test]
    async fn news_uses_seven_day_window_from_now() {
        let source = NewsOnlySource::default();
        let articles = fetch_news(&source, &symbol(), datetime!(2024-06-10 08:00 UTC)).await;

        assert_eq!(articles.len(), 1);
        let ranges = source.ranges.lock().expect("not poisoned").clone();
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].from_param(), "2024-06-03");
        assert_eq!(ranges[0].to_param(), "2024-06-10");
    }

    #[tokio::test]
    async fn news_failure_degrades_to_empty_list() {
        let source = NewsOnlySource {
            fail: true,
            ..NewsOnlySource::default()
        };
        let articles = fetch_news(&source, &symbol(), datetime!(2024-06-10 08:00 UTC)).await;
        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn quote_failure_is_returned_as_value() {
        let source = NewsOnlySource::default();
        let error = fetch_quote(&source, &symbol()).await.expect_err("must fail");
        assert_eq!(error.kind(), FetchErrorKind::Malformed);
    }
}
