//! Bulk quote aggregation.
//!
//! All per-symbol fetches are issued before any is awaited and the batch is
//! joined as a whole. Results land in a buffer indexed by input position, so
//! the output order only depends on the input order, never on which response
//! arrived first. Failed symbols are dropped.
//!
//! There is no local throttling and no cancellation: a batch runs until every
//! request has settled. Callers that no longer need a batch discard it.

use futures::future::join_all;
use serde::Serialize;
use tracing::info;

use crate::data_source::MarketDataSource;
use crate::fetcher::fetch_quote;
use crate::{QuoteRecord, Symbol};

/// Successful quotes of one refresh, in requested order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregatedResultSet {
    records: Vec<QuoteRecord>,
    requested: usize,
}

impl AggregatedResultSet {
    pub fn new(records: Vec<QuoteRecord>, requested: usize) -> Self {
        Self { records, requested }
    }

    pub fn records(&self) -> &[QuoteRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of symbols that were asked for.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Number of symbols whose fetch failed.
    pub fn failed(&self) -> usize {
        self.requested.saturating_sub(self.records.len())
    }

    pub fn get(&self, symbol: &Symbol) -> Option<&QuoteRecord> {
        self.records.iter().find(|record| &record.symbol == symbol)
    }
}

impl<'a> IntoIterator for &'a AggregatedResultSet {
    type Item = &'a QuoteRecord;
    type IntoIter = std::slice::Iter<'a, QuoteRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Fetches every symbol concurrently and keeps the successes in input order.
///
/// An empty input yields an empty set.
pub async fn aggregate<S>(source: &S, symbols: &[Symbol]) -> AggregatedResultSet
where
    S: MarketDataSource + ?Sized,
{
    if symbols.is_empty() {
        return AggregatedResultSet::default();
    }

    let outcomes = join_all(symbols.iter().map(|symbol| fetch_quote(source, symbol))).await;

    let records = outcomes
        .into_iter()
        .filter_map(Result::ok)
        .collect::<Vec<_>>();

    let result = AggregatedResultSet::new(records, symbols.len());
    info!(
        requested = result.requested(),
        succeeded = result.len(),
        failed = result.failed(),
        "quote aggregation complete"
    );
    result
}
