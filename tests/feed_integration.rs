//! Integration tests for the feed client and pollers against a mock HTTP server.
//!
//! Run with:
//! ```bash
//! cargo test --test feed_integration
//! ```

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use investor_ticker::prelude::*;

const QUOTE: &str = "/api/stock-quote";
const TRADES: &str = "/api/trade-history";
const WAIT: Duration = Duration::from_secs(5);

fn client_for(server: &MockServer) -> TickerClient {
    TickerClient::builder()
        .base_url(&server.uri())
        .quote_interval(Duration::from_millis(50))
        .trade_interval(Duration::from_millis(50))
        .request_timeout(Duration::from_secs(2))
        .build()
        .unwrap()
}

fn quote_body(price: f64) -> serde_json::Value {
    json!({
        "symbol": "TSX-V: TUO",
        "price": price,
        "change": 0.005,
        "changePercent": 2.0408,
        "volume": 47160,
        "high": 0.26,
        "low": 0.24,
        "marketCap": "$3.8M",
        "timestamp": "2025-01-15T16:00:00.000Z"
    })
}

fn trade(i: usize) -> serde_json::Value {
    json!({ "time": format!("15:{:02}:00", i % 60), "price": 0.25, "volume": 1000 })
}

async fn mount_quote(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(QUOTE))
        .respond_with(template)
        .mount(server)
        .await;
}

async fn wait_for_quote_revision(client: &TickerClient, at_least: u64) {
    tokio::time::timeout(WAIT, async {
        while client.quotes().revision().await < at_least {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("quote revision not reached in time");
}

async fn wait_for_trade_revision(client: &TickerClient, at_least: u64) {
    tokio::time::timeout(WAIT, async {
        while client.trades().revision().await < at_least {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("trade revision not reached in time");
}

async fn wait_for_requests(server: &MockServer, at_least: usize) {
    tokio::time::timeout(WAIT, async {
        while server.received_requests().await.map_or(0, |r| r.len()) < at_least {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("request count not reached in time");
}

// ── Quote feed ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_quote_fetch_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(QUOTE))
        .and(query_param("symbol", "TSX-V: TUO"))
        .respond_with(ResponseTemplate::new(200).set_body_json(quote_body(0.25)))
        .mount(&server)
        .await;

    let snap = client_for(&server).quotes().fetch().await.unwrap();
    assert_eq!(snap.price, 0.25);
    assert_eq!(snap.volume.as_deref(), Some("47.16K"));
    assert_eq!(snap.market_cap.as_deref(), Some("$3.8M"));
}

#[tokio::test]
async fn test_quote_error_payloads() {
    let server = MockServer::start().await;
    mount_quote(
        &server,
        ResponseTemplate::new(500).set_body_json(json!({
            "symbol": "TSX-V: TUO",
            "timestamp": "2025-01-15T16:00:00.000Z",
            "error": "Unable to fetch stock data"
        })),
    )
    .await;
    let err = client_for(&server).quotes().fetch().await.unwrap_err();
    // Non-2xx fails on status before the body is read.
    assert!(matches!(err, FeedError::NetworkFailure(_)));

    let server = MockServer::start().await;
    mount_quote(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({ "symbol": "TSX-V: TUO", "error": "stale" })),
    )
    .await;
    let err = client_for(&server).quotes().fetch().await.unwrap_err();
    assert!(matches!(err, FeedError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_quote_garbage_body_is_malformed() {
    let server = MockServer::start().await;
    mount_quote(&server, ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;
    let err = client_for(&server).quotes().fetch().await.unwrap_err();
    assert!(matches!(err, FeedError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_refresh_keeps_last_known_good() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(QUOTE))
        .respond_with(ResponseTemplate::new(200).set_body_json(quote_body(0.25)))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_quote(&server, ResponseTemplate::new(503)).await;

    let client = client_for(&server);
    let first = client.quotes().refresh().await.unwrap();
    assert_eq!(first.price, 0.25);

    assert!(client.quotes().refresh().await.is_err());
    let display = client.quotes().display().await;
    assert_eq!(display.price, "0.25");
    assert_eq!(display.change_line(), "+0.005 (+2.04%)");
    assert_eq!(client.quotes().revision().await, 1);
}

#[tokio::test]
async fn test_custom_retry_recovers_from_503() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(QUOTE))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_quote(&server, ResponseTemplate::new(200).set_body_json(quote_body(0.3))).await;

    let client = TickerClient::builder()
        .base_url(&server.uri())
        .retry(RetryPolicy::Custom(RetryConfig {
            max_retries: 2,
            initial_delay: Duration::from_millis(10),
            max_delay: Duration::from_millis(50),
            backoff_factor: 2.0,
            jitter: false,
            retryable_statuses: vec![503],
        }))
        .build()
        .unwrap();

    assert_eq!(client.quotes().fetch().await.unwrap().price, 0.3);
}

#[tokio::test]
async fn test_rate_limited_with_huge_retry_after() {
    let server = MockServer::start().await;
    mount_quote(
        &server,
        ResponseTemplate::new(429).insert_header("Retry-After", "18446744073709552"),
    )
    .await;

    let err = client_for(&server).quotes().fetch().await.unwrap_err();
    assert!(matches!(err, FeedError::NetworkFailure(_)));
}

#[tokio::test]
async fn test_retry_after_is_capped_by_max_delay() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(QUOTE))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "18446744073709552"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_quote(&server, ResponseTemplate::new(200).set_body_json(quote_body(0.35))).await;

    let client = TickerClient::builder()
        .base_url(&server.uri())
        .retry(RetryPolicy::Custom(RetryConfig {
            max_retries: 1,
            initial_delay: Duration::from_millis(10),
            max_delay: Duration::from_millis(20),
            backoff_factor: 2.0,
            jitter: false,
            retryable_statuses: vec![],
        }))
        .build()
        .unwrap();

    let snap = tokio::time::timeout(WAIT, client.quotes().fetch())
        .await
        .expect("retry waited past the backoff ceiling")
        .unwrap();
    assert_eq!(snap.price, 0.35);
}

#[tokio::test]
async fn test_quote_with_garbage_optional_fields_still_applies() {
    let server = MockServer::start().await;
    mount_quote(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "price": 0.25,
            "high": "0.26",
            "low": "n/a",
            "listedSharesOut": "N/A",
            "timestamp": "2025-01-15 16:00:00"
        })),
    )
    .await;

    let client = client_for(&server);
    let snap = client.quotes().refresh().await.unwrap();
    assert_eq!(snap.price, 0.25);
    assert_eq!(snap.high, Some(0.26));
    assert!(snap.low.is_none());
    assert!(snap.listed_shares_outstanding.is_none());
    assert_eq!(client.quotes().display().await.day_range, "0.26/--");
}

// ── Trade feed ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_trade_feed_reported_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TRADES))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "trades": [],
            "lastUpdate": "2025-01-15T21:00:00.000Z",
            "success": false,
            "message": "No trade data found - market may be closed or no recent trades"
        })))
        .mount(&server)
        .await;

    let state = client_for(&server).trades().refresh().await;
    assert_eq!(
        state,
        RenderState::Error {
            message: "No trade data found - market may be closed or no recent trades".to_string()
        }
    );
}

#[tokio::test]
async fn test_trade_feed_unreachable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TRADES))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let state = client_for(&server).trades().refresh().await;
    assert_eq!(state.message(), Some("Failed to load trade history"));
}

#[tokio::test]
async fn test_trade_feed_truncates_to_twenty() {
    let server = MockServer::start().await;
    let trades: Vec<_> = (0..45).map(trade).collect();
    Mock::given(method("GET"))
        .and(path(TRADES))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "trades": trades, "success": true })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    match client.trades().refresh().await {
        RenderState::Rows { rows, notice, total } => {
            assert_eq!(rows.len(), 20);
            assert_eq!(total, 45);
            assert_eq!(notice.as_deref(), Some("Showing 20 of 45 trades"));
            assert_eq!(rows[0].exchange, "TSXV");
            assert_eq!(rows[0].volume, "1,000");
        }
        other => panic!("expected rows, got {:?}", other),
    }
    assert_eq!(client.trades().list().await.len(), 45);
}

// ── Pollers ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_pollers_populate_state() {
    let server = MockServer::start().await;
    mount_quote(&server, ResponseTemplate::new(200).set_body_json(quote_body(2.715))).await;
    Mock::given(method("GET"))
        .and(path(TRADES))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "trades": [trade(1), trade(2)], "success": true })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.trades().render().await, RenderState::Loading);

    let quotes = client.quotes().start_polling();
    let trades = client.trades().start_polling();

    wait_for_quote_revision(&client, 2).await;
    wait_for_trade_revision(&client, 1).await;

    let snapshot = client.quotes().snapshot().await.unwrap();
    let mut chart = ChartView::new(Period::Day1);
    chart.update(Some(&snapshot));
    assert_eq!(chart.pointer_move(0.0).unwrap().price, "2.715");
    assert_eq!(client.trades().render().await.rows().len(), 2);

    QuotePoller::stop(quotes);
    TradePoller::stop(trades);
}

#[tokio::test]
async fn test_poller_keeps_snapshot_through_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(QUOTE))
        .respond_with(ResponseTemplate::new(200).set_body_json(quote_body(0.25)))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_quote(&server, ResponseTemplate::new(200).set_body_json(json!({ "error": "down" }))).await;

    let client = client_for(&server);
    let handle = client.quotes().start_polling();

    wait_for_quote_revision(&client, 1).await;
    // Let several failing polls land.
    wait_for_requests(&server, 4).await;

    assert_eq!(client.quotes().snapshot().await.map(|s| s.price), Some(0.25));
    assert_eq!(client.quotes().revision().await, 1);
    drop(handle);
}

#[tokio::test]
async fn test_stopped_poller_discards_late_response() {
    let server = MockServer::start().await;
    mount_quote(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(quote_body(0.25))
            .set_delay(Duration::from_millis(300)),
    )
    .await;

    let client = client_for(&server);
    let mut handle = client.quotes().start_polling();
    tokio::time::sleep(Duration::from_millis(50)).await;
    handle.stop();
    assert!(!handle.is_running());

    tokio::time::sleep(Duration::from_millis(600)).await;
    assert!(client.quotes().snapshot().await.is_none());
    assert_eq!(client.quotes().revision().await, 0);
}
