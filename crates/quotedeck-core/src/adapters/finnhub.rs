use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ProviderConfig;
use crate::data_source::{FetchError, FetchFuture, MarketDataSource};
use crate::http_client::{HttpAuth, HttpClient, HttpRequest, ReqwestHttpClient};
use crate::{NewsArticle, NewsDateRange, QuoteRecord, Symbol};

const TOKEN_PARAM: &str = "token";

/// Finnhub REST adapter for `/quote` and `/company-news`.
#[derive(Clone)]
pub struct FinnhubAdapter {
    http_client: Arc<dyn HttpClient>,
    config: ProviderConfig,
    auth: HttpAuth,
}

impl FinnhubAdapter {
    /// Adapter backed by a real reqwest transport.
    pub fn new(config: ProviderConfig) -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::new()), config)
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: ProviderConfig) -> Self {
        let auth = HttpAuth::query_token(TOKEN_PARAM, config.api_key());
        Self {
            http_client,
            config,
            auth,
        }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> HttpRequest {
        HttpRequest::get(format!("{}{path}", self.config.base_url))
            .with_timeout_ms(self.config.timeout_ms)
    }

    /// Executes one request and returns the decoded JSON body.
    async fn get_json(&self, symbol: &Symbol, request: HttpRequest) -> Result<Value, FetchError> {
        let request = request.with_auth(&self.auth);
        debug!(symbol = %symbol, url = %request.redacted_url(), "finnhub request");

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| FetchError::transport(symbol, e.message(), e.retryable()))?;

        if !response.is_success() {
            let detail = error_envelope(&response.body)
                .unwrap_or_else(|| format!("finnhub returned status {}", response.status));
            return Err(FetchError::provider(symbol, response.status, detail));
        }

        let body: Value = serde_json::from_str(&response.body).map_err(|e| {
            FetchError::malformed(symbol, format!("failed to parse finnhub response: {e}"))
        })?;

        if let Some(message) = body.get("error").and_then(Value::as_str) {
            return Err(FetchError::provider(symbol, response.status, message));
        }

        Ok(body)
    }

    async fn fetch_quote(&self, symbol: &Symbol) -> Result<QuoteRecord, FetchError> {
        let request = self.endpoint("/quote").with_query("symbol", symbol.as_str());
        let body = self.get_json(symbol, request).await?;

        let payload: QuoteResponse = serde_json::from_value(body).map_err(|e| {
            FetchError::malformed(symbol, format!("unexpected quote payload: {e}"))
        })?;

        normalize_quote(symbol, payload)
    }

    async fn fetch_company_news(
        &self,
        symbol: &Symbol,
        range: NewsDateRange,
    ) -> Result<Vec<NewsArticle>, FetchError> {
        let request = self
            .endpoint("/company-news")
            .with_query("symbol", symbol.as_str())
            .with_query("from", range.from_param())
            .with_query("to", range.to_param());
        let body = self.get_json(symbol, request).await?;

        let entries: Vec<Value> = serde_json::from_value(body).map_err(|e| {
            FetchError::malformed(symbol, format!("unexpected company-news payload: {e}"))
        })?;

        let articles = entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<NewsItem>(entry) {
                Ok(item) => Some(item.into_article()),
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "skipping unreadable news entry");
                    None
                }
            })
            .collect();
        Ok(articles)
    }
}

impl MarketDataSource for FinnhubAdapter {
    fn quote<'a>(&'a self, symbol: &'a Symbol) -> FetchFuture<'a, QuoteRecord> {
        Box::pin(self.fetch_quote(symbol))
    }

    fn company_news<'a>(
        &'a self,
        symbol: &'a Symbol,
        range: NewsDateRange,
    ) -> FetchFuture<'a, Vec<NewsArticle>> {
        Box::pin(self.fetch_company_news(symbol, range))
    }
}

/// `/quote` payload. Finnhub also sends `d`, `dp` and `t`, which are unused.
#[derive(Debug, Clone, Deserialize)]
struct QuoteResponse {
    c: Option<f64>,
    h: Option<f64>,
    l: Option<f64>,
    o: Option<f64>,
    pc: Option<f64>,
}

/// One `/company-news` entry.
#[derive(Debug, Clone, Deserialize)]
struct NewsItem {
    id: u64,
    #[serde(default)]
    headline: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    datetime: Option<i64>,
}

impl NewsItem {
    fn into_article(self) -> NewsArticle {
        NewsArticle {
            id: self.id,
            headline: self.headline,
            summary: self.summary,
            url: self.url,
            // Finnhub sends 0 for articles without a publication time.
            published_at: self.datetime.filter(|epoch| *epoch > 0),
        }
    }
}

fn normalize_quote(symbol: &Symbol, payload: QuoteResponse) -> Result<QuoteRecord, FetchError> {
    let missing = |field: &str| FetchError::malformed(symbol, format!("quote field '{field}' is missing"));

    let current = payload.c.ok_or_else(|| missing("c"))?;
    let high = payload.h.ok_or_else(|| missing("h"))?;
    let low = payload.l.ok_or_else(|| missing("l"))?;
    let open = payload.o.ok_or_else(|| missing("o"))?;
    let previous_close = payload.pc.ok_or_else(|| missing("pc"))?;

    QuoteRecord::new(symbol.clone(), current, high, low, open, previous_close)
        .map_err(|e| FetchError::malformed(symbol, e.to_string()))
}

fn error_envelope(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("error")?.as_str().map(str::to_owned)
}
