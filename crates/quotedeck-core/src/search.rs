//! Case-insensitive prefix search over aggregated quotes.

use crate::QuoteRecord;

/// Free-text query, case-folded once for comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    folded: String,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        let raw = text.into();
        let folded = raw.trim().to_lowercase();
        Self { raw, folded }
    }

    /// Text as typed.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True for empty or whitespace-only input.
    pub fn is_blank(&self) -> bool {
        self.folded.is_empty()
    }

    /// Prefix match against every searchable key of `item`.
    ///
    /// A blank query matches everything.
    pub fn matches<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        if self.is_blank() {
            return true;
        }
        item.search_keys()
            .into_iter()
            .any(|key| key.to_lowercase().starts_with(&self.folded))
    }
}

/// Items that can be found by prefix search.
pub trait Searchable {
    fn search_keys(&self) -> Vec<&str>;
}

impl Searchable for QuoteRecord {
    fn search_keys(&self) -> Vec<&str> {
        let mut keys = vec![self.symbol.as_str()];
        if let Some(name) = self.name.as_deref() {
            keys.push(name);
        }
        keys
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn search_keys(&self) -> Vec<&str> {
        (**self).search_keys()
    }
}

/// Items whose symbol or display name starts with `query`, ignoring case.
///
/// Input order is preserved and `items` is never modified. A blank query
/// returns every item.
pub fn filter<'a, T: Searchable>(query: &str, items: &'a [T]) -> Vec<&'a T> {
    let query = SearchQuery::new(query);
    items.iter().filter(|item| query.matches(*item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symbol;

    fn quote(symbol: &str) -> QuoteRecord {
        QuoteRecord::new(
            Symbol::parse(symbol).expect("valid symbol"),
            1.0,
            1.0,
            1.0,
            1.0,
            1.0,
        )
        .expect("valid quote")
    }

    fn symbols<'a>(items: &[&'a QuoteRecord]) -> Vec<&'a str> {
        items.iter().map(|q| q.symbol.as_str()).collect()
    }

    #[test]
    fn blank_query_is_identity() {
        let items = vec![quote("MSFT"), quote("AAPL"), quote("AA")];
        for query in ["", "   ", "\t"] {
            let filtered = filter(query, &items);
            assert_eq!(symbols(&filtered), vec!["MSFT", "AAPL", "AA"]);
        }
    }

    #[test]
    fn prefix_match_is_case_insensitive_and_ordered() {
        let items = vec![quote("AAPL"), quote("AMZN"), quote("AA")];
        assert_eq!(symbols(&filter("AA", &items)), vec!["AAPL", "AA"]);
        assert_eq!(symbols(&filter("aa", &items)), vec!["AAPL", "AA"]);
        assert_eq!(symbols(&filter("am", &items)), vec!["AMZN"]);
    }

    #[test]
    fn substring_is_not_a_match() {
        let items = vec![quote("AAPL"), quote("PYPL")];
        assert!(filter("PL", &items).is_empty());
    }

    #[test]
    fn display_name_is_searched_by_prefix() {
        let items = vec![
            quote("GOOGL").with_name("Alphabet Inc."),
            quote("AAPL").with_name("Apple Inc."),
        ];
        assert_eq!(symbols(&filter("alpha", &items)), vec!["GOOGL"]);
        assert!(filter("inc", &items).is_empty());
    }

    #[test]
    fn query_keeps_raw_text() {
        let query = SearchQuery::new("  Ap ");
        assert_eq!(query.as_str(), "  Ap ");
        assert!(!query.is_blank());
        assert!(query.matches(&quote("AAPL").with_name("Apple")));
    }
}
