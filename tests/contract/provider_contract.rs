use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use quotedeck_core::http_client::HttpFuture;
use quotedeck_core::{
    aggregate, fetch_news, FetchErrorKind, FinnhubAdapter, HttpClient, HttpError, HttpRequest,
    HttpResponse, MarketDataSource, ProviderConfig, RetryConfig, RetryingSource, Symbol,
};
use time::macros::datetime;

const TOKEN: &str = "contract-token";
const BASE_URL: &str = "https://finnhub.test/api/v1";

/// Replies per `symbol` query parameter; queued replies are consumed first.
#[derive(Default)]
struct RoutedHttpClient {
    routes: HashMap<String, Result<HttpResponse, HttpError>>,
    queued: Mutex<HashMap<String, VecDeque<Result<HttpResponse, HttpError>>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RoutedHttpClient {
    fn route(mut self, symbol: &str, reply: Result<HttpResponse, HttpError>) -> Self {
        self.routes.insert(symbol.to_owned(), reply);
        self
    }

    fn queue(self, symbol: &str, reply: Result<HttpResponse, HttpError>) -> Self {
        self.queued
            .lock()
            .expect("queue lock")
            .entry(symbol.to_owned())
            .or_default()
            .push_back(reply);
        self
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("request lock").clone()
    }
}

impl HttpClient for RoutedHttpClient {
    fn execute<'a>(&'a self, request: HttpRequest) -> HttpFuture<'a> {
        let symbol = request.query_param("symbol").unwrap_or_default().to_owned();
        self.requests.lock().expect("request lock").push(request);

        let queued = self
            .queued
            .lock()
            .expect("queue lock")
            .get_mut(&symbol)
            .and_then(VecDeque::pop_front);
        let reply = queued.unwrap_or_else(|| {
            self.routes
                .get(&symbol)
                .cloned()
                .unwrap_or_else(|| Ok(HttpResponse::with_status(404, r#"{"error":"not routed"}"#)))
        });
        Box::pin(async move { reply })
    }
}

fn adapter(client: Arc<RoutedHttpClient>) -> FinnhubAdapter {
    let config = ProviderConfig::new(TOKEN)
        .expect("config")
        .with_base_url(BASE_URL)
        .with_timeout_ms(2_500);
    FinnhubAdapter::with_http_client(client, config)
}

fn quote_body(price: f64) -> Result<HttpResponse, HttpError> {
    Ok(HttpResponse::ok_json(format!(
        r#"{{"c":{price},"d":0.5,"dp":0.3,"h":{high},"l":{low},"o":{price},"pc":{prev},"t":1700000000}}"#,
        high = price + 1.0,
        low = price - 1.0,
        prev = price - 0.5,
    )))
}

fn symbols(raw: &[&str]) -> Vec<Symbol> {
    Symbol::parse_all(raw).expect("valid symbols")
}

#[tokio::test]
async fn quote_requests_follow_the_provider_contract() {
    let client = Arc::new(RoutedHttpClient::default().route("AAPL", quote_body(190.0)));
    let source = adapter(Arc::clone(&client));

    let quote = source
        .quote(&Symbol::parse("AAPL").expect("valid symbol"))
        .await
        .expect("quote should parse");

    assert_eq!(quote.symbol.as_str(), "AAPL");
    assert_eq!(quote.current_price, 190.0);
    assert_eq!(quote.high, 191.0);
    assert_eq!(quote.low, 189.0);
    assert_eq!(quote.previous_close, 189.5);

    let requests = client.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.url, format!("{BASE_URL}/quote"));
    assert_eq!(request.query_param("symbol"), Some("AAPL"));
    assert_eq!(request.query_param("token"), Some(TOKEN));
    assert_eq!(request.timeout_ms, 2_500);
    assert!(!request.redacted_url().contains(TOKEN));
}

#[tokio::test]
async fn aggregation_over_the_adapter_drops_failures_and_keeps_zero_quotes() {
    let client = Arc::new(
        RoutedHttpClient::default()
            .route("AAPL", quote_body(190.0))
            .route(
                "ZZZZ",
                Ok(HttpResponse::ok_json(r#"{"c":0,"d":null,"dp":null,"h":0,"l":0,"o":0,"pc":0,"t":0}"#)),
            )
            .route("MSFT", Ok(HttpResponse::with_status(500, "upstream down")))
            .route("NVDA", Err(HttpError::new("connection reset")))
            .route("AMZN", Ok(HttpResponse::ok_json("<html>")))
            .route("TSLA", quote_body(250.0)),
    );
    let source = adapter(client);

    let result = aggregate(&source, &symbols(&["AAPL", "ZZZZ", "MSFT", "NVDA", "AMZN", "TSLA"])).await;

    let kept = result
        .records()
        .iter()
        .map(|q| q.symbol.as_str())
        .collect::<Vec<_>>();
    assert_eq!(kept, vec!["AAPL", "ZZZZ", "TSLA"]);
    assert_eq!(result.failed(), 3);

    // An all-zero quote is a valid payload and is passed through unchanged.
    let unknown = result
        .get(&Symbol::parse("ZZZZ").expect("valid symbol"))
        .expect("zero quote kept");
    assert_eq!(unknown.current_price, 0.0);
}

#[tokio::test]
async fn failures_are_classified_at_the_adapter_boundary() {
    let client = Arc::new(
        RoutedHttpClient::default()
            .route("A", Err(HttpError::new("timed out")))
            .route("B", Ok(HttpResponse::with_status(429, r#"{"error":"API limit reached"}"#)))
            .route("C", Ok(HttpResponse::ok_json(r#"{"error":"You don't have access"}"#)))
            .route("D", Ok(HttpResponse::ok_json(r#"{"c":1.0}"#))),
    );
    let source = adapter(client);

    let cases = [
        ("A", FetchErrorKind::Transport, true),
        ("B", FetchErrorKind::Provider, true),
        ("C", FetchErrorKind::Provider, false),
        ("D", FetchErrorKind::Malformed, false),
    ];
    for (raw, kind, retryable) in cases {
        let symbol = Symbol::parse(raw).expect("valid symbol");
        let error = source.quote(&symbol).await.expect_err("must fail");
        assert_eq!(error.kind(), kind, "symbol {raw}");
        assert_eq!(error.retryable(), retryable, "symbol {raw}");
        assert_eq!(error.symbol(), &symbol);
        assert!(!error.to_string().contains(TOKEN));
    }

    let limited = source
        .quote(&Symbol::parse("B").expect("valid symbol"))
        .await
        .expect_err("must fail");
    assert_eq!(limited.message(), "API limit reached");
}

#[tokio::test]
async fn retry_layer_recovers_from_rate_limiting() {
    let client = Arc::new(
        RoutedHttpClient::default()
            .queue("AAPL", Ok(HttpResponse::with_status(429, r#"{"error":"API limit reached"}"#)))
            .route("AAPL", quote_body(190.0)),
    );
    let source = RetryingSource::new(
        adapter(Arc::clone(&client)),
        RetryConfig::fixed(Duration::from_millis(1), 2),
    );

    let result = aggregate(&source, &symbols(&["AAPL"])).await;

    assert_eq!(result.len(), 1);
    assert_eq!(client.requests().len(), 2);
}

#[tokio::test]
async fn news_requests_cover_the_last_seven_days() {
    let client = Arc::new(RoutedHttpClient::default().route(
        "AAPL",
        Ok(HttpResponse::ok_json(
            r#"[
                {"category":"company","datetime":1700000000,"headline":"Apple news","id":101,
                 "image":"","related":"AAPL","source":"Wire","summary":"Summary","url":"https://n.test/101"},
                {"category":"company","headline":"Undated","id":102,"related":"AAPL","summary":"","url":""},
                {"category":"company","datetime":0,"headline":"Zero date","id":103,"related":"AAPL","summary":"","url":""},
                {"category":"company","headline":"No id","related":"AAPL","summary":"","url":""}
            ]"#,
        )),
    ));
    let source = adapter(Arc::clone(&client));
    let symbol = Symbol::parse("AAPL").expect("valid symbol");

    let articles = fetch_news(&source, &symbol, datetime!(2023-11-15 12:00 UTC)).await;

    assert_eq!(articles.len(), 3);
    assert_eq!(articles[0].id, 101);
    assert_eq!(articles[0].display_date().to_string(), "2023-11-14");
    assert_eq!(articles[1].display_date().to_string(), "No Date Available");
    assert_eq!(articles[2].id, 103);
    assert_eq!(articles[2].display_date().to_string(), "No Date Available");

    let requests = client.requests();
    assert_eq!(requests[0].url, format!("{BASE_URL}/company-news"));
    assert_eq!(requests[0].query_param("from"), Some("2023-11-08"));
    assert_eq!(requests[0].query_param("to"), Some("2023-11-15"));
}

#[tokio::test]
async fn news_failure_degrades_to_an_empty_list() {
    let client = Arc::new(
        RoutedHttpClient::default().route("AAPL", Ok(HttpResponse::with_status(403, r#"{"error":"forbidden"}"#))),
    );
    let source = adapter(client);
    let symbol = Symbol::parse("AAPL").expect("valid symbol");

    let articles = fetch_news(&source, &symbol, datetime!(2023-11-15 12:00 UTC)).await;

    assert!(articles.is_empty());
}
