use serde::Serialize;
use tracing::{info, warn};

use quotedeck_core::{
    aggregate, MarketBoard, MarketDataSource, PageWindow, QuoteRecord, Symbol, ViewStatus,
    DEFAULT_UNIVERSE, MAX_UNIVERSE,
};

use super::page_selection;
use crate::cli::QuotesArgs;
use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct QuotesReport {
    pub requested: usize,
    pub failed: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub page: PageWindow<QuoteRecord>,
}

pub async fn run<S>(args: &QuotesArgs, source: &S) -> Result<QuotesReport, CliError>
where
    S: MarketDataSource + ?Sized,
{
    let (page_size, page_index) = page_selection(args.paging)?;
    let symbols = requested_symbols(&args.symbols)?;

    let mut board = MarketBoard::new(page_size);
    board.begin_loading();
    info!(count = symbols.len(), "loading quotes");
    board.finish_loading(aggregate(source, &symbols).await);

    if let Some(query) = &args.search {
        board.set_search_query(query.as_str());
    }
    board.set_page(page_index);

    let window = board.window().map(|quote| quote.clone());
    let message = status_message(&board, &window);

    Ok(QuotesReport {
        requested: board.quotes().requested(),
        failed: board.quotes().failed(),
        query: args.search.clone(),
        message,
        page: window,
    })
}

/// Explicit symbols, or the default universe when none were given.
fn requested_symbols(raw: &[String]) -> Result<Vec<Symbol>, CliError> {
    let mut symbols = if raw.is_empty() {
        Symbol::parse_all(DEFAULT_UNIVERSE)?
    } else {
        Symbol::parse_all(raw)?
    };

    if symbols.len() > MAX_UNIVERSE {
        warn!(
            requested = symbols.len(),
            limit = MAX_UNIVERSE,
            "too many symbols, loading only the first {MAX_UNIVERSE}"
        );
        symbols.truncate(MAX_UNIVERSE);
    }
    Ok(symbols)
}

/// Human-readable explanation for an empty board or page.
///
/// The engine reports only that nothing matched; the three causes are told
/// apart here from the counts the board keeps.
fn status_message(board: &MarketBoard, window: &PageWindow<QuoteRecord>) -> Option<String> {
    match board.status() {
        ViewStatus::Loading => Some(String::from("Loading...")),
        ViewStatus::NoMatches if board.quotes().requested() == 0 => {
            Some(String::from("No symbols requested."))
        }
        ViewStatus::NoMatches if board.quotes().is_empty() => {
            Some(String::from("No quotes could be loaded."))
        }
        ViewStatus::NoMatches => Some(String::from("No matching stocks found.")),
        ViewStatus::Matches(_) if window.is_empty() => Some(format!(
            "Page {} is past the last page ({}).",
            window.page_index, window.total_pages
        )),
        ViewStatus::Matches(_) => None,
    }
}
