//! Explicit state containers for the presentation layer.
//!
//! The presentation layer owns one [`MarketBoard`] and, per opened symbol,
//! one [`NewsFeed`]. Both hold the loaded collection plus the search/page
//! inputs; every rendered view is derived from them on demand through the
//! pure [`search`](crate::search) and [`pagination`](crate::pagination)
//! functions.

use std::num::NonZeroUsize;

use crate::aggregator::AggregatedResultSet;
use crate::pagination::{PageRequest, PageWindow, DEFAULT_PAGE_SIZE};
use crate::search::SearchQuery;
use crate::{NewsArticle, QuoteRecord, Symbol};

/// Whether a collection has been fetched yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
}

/// What the presentation layer should show above the list.
///
/// The engine cannot tell why a loaded set is empty (nothing requested,
/// every fetch failed, or the filter excluded everything); it only reports
/// that it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    Loading,
    NoMatches,
    Matches(usize),
}

impl ViewStatus {
    fn from_count(load: LoadState, count: usize) -> Self {
        match load {
            LoadState::Idle | LoadState::Loading => Self::Loading,
            LoadState::Loaded if count == 0 => Self::NoMatches,
            LoadState::Loaded => Self::Matches(count),
        }
    }
}

/// Quote list with search and pagination inputs.
#[derive(Debug, Clone)]
pub struct MarketBoard {
    load: LoadState,
    quotes: AggregatedResultSet,
    query: SearchQuery,
    page: PageRequest,
}

impl Default for MarketBoard {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl MarketBoard {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            load: LoadState::Idle,
            quotes: AggregatedResultSet::default(),
            query: SearchQuery::default(),
            page: PageRequest::first(page_size),
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn begin_loading(&mut self) {
        self.load = LoadState::Loading;
    }

    /// Replaces the whole collection with a fresh aggregation.
    pub fn finish_loading(&mut self, quotes: AggregatedResultSet) {
        self.quotes = quotes;
        self.load = LoadState::Loaded;
    }

    pub fn quotes(&self) -> &AggregatedResultSet {
        &self.quotes
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Changes the search text and returns to the first page.
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.query = SearchQuery::new(text);
        self.page = self.page.with_page(1);
    }

    /// Jumps to `index`; 0 is treated as 1. Out-of-range pages render empty.
    pub fn set_page(&mut self, index: usize) {
        self.page = self.page.with_page(index);
    }

    pub fn page_index(&self) -> usize {
        self.page.page_index()
    }

    /// Advances one page if the current window has a next page.
    pub fn next_page(&mut self) -> bool {
        let next = self.window().next_page_index();
        match next {
            Some(next) => {
                self.set_page(next);
                true
            }
            None => false,
        }
    }

    /// Goes back one page unless already on page 1.
    pub fn previous_page(&mut self) -> bool {
        let current = self.page.page_index();
        if current <= 1 {
            return false;
        }
        self.set_page(current - 1);
        true
    }

    /// Quotes matching the current query, in aggregation order.
    pub fn filtered(&self) -> Vec<&QuoteRecord> {
        self.quotes
            .records()
            .iter()
            .filter(|quote| self.query.matches(*quote))
            .collect()
    }

    /// Current page of the filtered quotes.
    pub fn window(&self) -> PageWindow<&QuoteRecord> {
        self.page.apply(&self.filtered())
    }

    pub fn status(&self) -> ViewStatus {
        ViewStatus::from_count(self.load, self.filtered().len())
    }
}

/// Paged article list for one symbol.
#[derive(Debug, Clone)]
pub struct NewsFeed {
    symbol: Symbol,
    load: LoadState,
    articles: Vec<NewsArticle>,
    page: PageRequest,
}

impl NewsFeed {
    pub fn new(symbol: Symbol, page_size: NonZeroUsize) -> Self {
        Self {
            symbol,
            load: LoadState::Idle,
            articles: Vec::new(),
            page: PageRequest::first(page_size),
        }
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn begin_loading(&mut self) {
        self.load = LoadState::Loading;
    }

    pub fn finish_loading(&mut self, articles: Vec<NewsArticle>) {
        self.articles = articles;
        self.load = LoadState::Loaded;
    }

    pub fn articles(&self) -> &[NewsArticle] {
        &self.articles
    }

    pub fn set_page(&mut self, index: usize) {
        self.page = self.page.with_page(index);
    }

    pub fn page_index(&self) -> usize {
        self.page.page_index()
    }

    pub fn next_page(&mut self) -> bool {
        let next = self.window().next_page_index();
        match next {
            Some(next) => {
                self.set_page(next);
                true
            }
            None => false,
        }
    }

    pub fn previous_page(&mut self) -> bool {
        let current = self.page.page_index();
        if current <= 1 {
            return false;
        }
        self.set_page(current - 1);
        true
    }

    pub fn window(&self) -> PageWindow<&NewsArticle> {
        let articles = self.articles.iter().collect::<Vec<_>>();
        self.page.apply(&articles)
    }

    pub fn status(&self) -> ViewStatus {
        ViewStatus::from_count(self.load, self.articles.len())
    }
}
