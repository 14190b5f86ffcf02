use serde::Serialize;
use time::OffsetDateTime;

use quotedeck_core::{
    fetch_news, MarketDataSource, NewsArticle, NewsFeed, PageWindow, Symbol, ViewStatus,
};

use super::page_selection;
use crate::cli::NewsArgs;
use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct NewsReport {
    pub symbol: Symbol,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub page: PageWindow<NewsRow>,
}

/// Article plus its rendered publication date.
#[derive(Debug, Clone, Serialize)]
pub struct NewsRow {
    #[serde(flatten)]
    pub article: NewsArticle,
    pub published: String,
}

impl From<&NewsArticle> for NewsRow {
    fn from(article: &NewsArticle) -> Self {
        Self {
            article: article.clone(),
            published: article.display_date().to_string(),
        }
    }
}

pub async fn run<S>(args: &NewsArgs, source: &S) -> Result<NewsReport, CliError>
where
    S: MarketDataSource + ?Sized,
{
    let (page_size, page_index) = page_selection(args.paging)?;
    let symbol = Symbol::parse(&args.symbol)?;
    let now = OffsetDateTime::now_utc();

    let mut feed = NewsFeed::new(symbol, page_size);
    feed.begin_loading();
    let articles = fetch_news(source, feed.symbol(), now).await;
    feed.finish_loading(articles);
    feed.set_page(page_index);

    let window = feed.window().map(NewsRow::from);
    let message = match feed.status() {
        ViewStatus::Loading => Some(String::from("Loading...")),
        ViewStatus::NoMatches => Some(format!("No recent news available for {}", feed.symbol())),
        ViewStatus::Matches(_) if window.is_empty() => Some(format!(
            "Page {} is past the last page ({}).",
            window.page_index, window.total_pages
        )),
        ViewStatus::Matches(_) => None,
    };

    Ok(NewsReport {
        symbol: feed.symbol().clone(),
        message,
        page: window,
    })
}
