//! Integration tests for the HTTP client and its normalization path.
//!
//! Fixture tests run offline. Live tests hit the public CoinGecko API and are
//! `#[ignore]` because they require network access and are rate limited.
//!
//! Run with:
//! ```bash
//! cargo test --features native --test api_integration -- --ignored
//! ```

use std::time::Duration;

use serde_json::json;
use tokio_test::assert_ok;

use crypto_dashboard::client::CoinGeckoClient;
use crypto_dashboard::domain::price_history::wire::MarketChart;
use crypto_dashboard::domain::price_history::PriceHistory;
use crypto_dashboard::domain::quote::quotes_from_markets;
use crypto_dashboard::domain::quote::wire::{CoinDetail, MarketQuote};
use crypto_dashboard::domain::quote::Quote;
use crypto_dashboard::domain::trading_pair::aggregate_trading_pairs;
use crypto_dashboard::shared::{format_percentage, format_price, CoinId, SortOrder, TimeWindow};
use crypto_dashboard::state::LoadState;

const TEST_TIMEOUT: Duration = Duration::from_secs(20);

fn live_client() -> CoinGeckoClient {
    let _ = dotenvy::dotenv();
    CoinGeckoClient::builder()
        .timeout(TEST_TIMEOUT)
        .from_env()
        .expect("valid environment")
        .build()
        .expect("client should build")
}

// ─── Fixtures ────────────────────────────────────────────────────────────────

#[test]
fn test_markets_fixture_normalizes() {
    let raw: Vec<MarketQuote> = serde_json::from_value(json!([
        {
            "id": "bitcoin", "symbol": "btc", "name": "Bitcoin",
            "image": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
            "current_price": 1234.5, "market_cap": 2.4e10, "market_cap_rank": 1,
            "fully_diluted_valuation": null, "total_volume": 1.0e9,
            "high_24h": 1250.0, "low_24h": 1200.0,
            "price_change_24h": 15.2, "price_change_percentage_24h": 1.234,
            "market_cap_change_24h": 1.0e8, "market_cap_change_percentage_24h": 0.4,
            "circulating_supply": 19700000.0, "total_supply": 21000000.0, "max_supply": 21000000.0,
            "ath": 73738.0, "ath_change_percentage": -9.1, "ath_date": "2024-03-14T07:10:36.635Z",
            "atl": 67.81, "atl_change_percentage": 98700.0, "atl_date": "2013-07-06T00:00:00.000Z",
            "roi": null,
            "last_updated": "2024-05-01T12:00:00.000Z",
            "sparkline_in_7d": { "price": [1200.0, 1234.5] },
            "price_change_percentage_1h_in_currency": 0.1,
            "price_change_percentage_24h_in_currency": 1.234,
            "price_change_percentage_7d_in_currency": -3.1
        }
    ]))
    .unwrap();

    let quotes = assert_ok!(quotes_from_markets(raw));
    let btc = &quotes[0];
    assert_eq!(format_price(btc.current_price), "$1,234.50");
    assert_eq!(format_percentage(btc.price_change_percentage_24h), "+1.23%");
    assert_eq!(btc.price_change_percentage.d7, Some(-3.1));
    assert_eq!(btc.sparkline_7d.as_deref(), Some(&[1200.0, 1234.5][..]));
    assert!(btc.last_updated_at().is_some());
}

#[test]
fn test_detail_fixture_in_other_currency() {
    let raw: CoinDetail = serde_json::from_value(json!({
        "id": "ethereum", "symbol": "eth", "name": "Ethereum",
        "image": { "thumb": "t.png", "small": "s.png" },
        "market_data": {
            "current_price": { "usd": 3100.0, "eur": 2900.0 },
            "market_cap": { "usd": 3.7e11, "eur": 3.4e11 },
            "market_cap_rank": 2,
            "total_volume": { "usd": 1.2e10, "eur": 1.1e10 },
            "high_24h": { "eur": 2950.0 }, "low_24h": { "eur": 2850.0 },
            "price_change_24h_in_currency": { "eur": 10.0 },
            "price_change_percentage_24h_in_currency": { "eur": 0.3 },
            "market_cap_change_24h_in_currency": { "eur": 1.0e9 },
            "market_cap_change_percentage_24h_in_currency": { "eur": 0.2 },
            "circulating_supply": 120000000.0,
            "total_supply": null, "max_supply": null,
            "ath": { "eur": 4200.0 }, "ath_change_percentage": { "eur": -31.0 },
            "ath_date": { "eur": "2021-11-10T14:24:19.604Z" },
            "atl": { "eur": 0.4 }, "atl_change_percentage": { "eur": 700000.0 },
            "atl_date": { "eur": "2015-10-20T00:00:00.000Z" },
            "last_updated": "2024-05-01T12:00:00.000Z"
        }
    }))
    .unwrap();

    let quote = assert_ok!(Quote::try_from((raw, "eur")));
    assert_eq!(quote.current_price, 2900.0);
    assert_eq!(quote.image, "s.png");
    assert_eq!(quote.market_cap_rank, Some(2));
    assert_eq!(quote.total_supply, None);
}

#[test]
fn test_chart_fixture_keeps_order() {
    let raw: MarketChart = serde_json::from_value(json!({
        "prices": [[1714560000123.0, 3.0], [1714550000000.0, 1.0], [1714570000000.0]],
        "market_caps": null,
        "total_volumes": []
    }))
    .unwrap();

    let history = PriceHistory::from((raw, TimeWindow::Day1));
    let stamps: Vec<i64> = history.points.iter().map(|p| p.timestamp).collect();
    assert_eq!(stamps, vec![1714560000123, 1714550000000]);
}

#[test]
fn test_tickers_fixture_caps_at_ten() {
    let tickers: Vec<_> = (0..15)
        .map(|i| json!({ "base": "BTC", "target": format!("T{i}"), "last": 1.0, "volume": i as f64 }))
        .collect();
    let pairs = aggregate_trading_pairs(&json!({ "name": "Bitcoin", "tickers": tickers }));

    assert_eq!(pairs.len(), 10);
    assert_eq!(pairs[0].symbol, "BTC/T14");
    assert_eq!(pairs[9].symbol, "BTC/T5");
}

// ─── Live ────────────────────────────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn test_live_top_quotes() {
    let client = live_client();
    let quotes = client
        .quotes()
        .top(SortOrder::MarketCapDesc)
        .await
        .expect("markets should load");

    assert!(!quotes.is_empty());
    assert!(quotes.len() <= 20);
    assert!(quotes.iter().all(|q| !q.id.is_empty()));
}

#[tokio::test]
#[ignore]
async fn test_live_detail_coordinator() {
    let client = live_client();
    let detail = client.detail_coordinator();
    assert!(detail.load("bitcoin").await);

    match detail.detail().current().await {
        LoadState::Success(quote) => assert_eq!(quote.id, CoinId::from("bitcoin")),
        LoadState::Failure(message) => panic!("detail failed: {message}"),
        LoadState::Pending => panic!("detail still pending after load"),
    }

    let history = detail.history().current().await;
    let history = history.success().expect("history should load");
    assert_eq!(history.window, TimeWindow::Day7);
    assert!(!history.is_empty());

    let pairs = detail.pairs().current().await;
    assert!(pairs.success().map(|p| p.len() <= 10).unwrap_or(false));
}

#[tokio::test]
#[ignore]
async fn test_live_unknown_coin_is_status_failure() {
    let client = live_client();
    let detail = client.detail_coordinator();
    detail.load("definitely-not-a-real-coin-id").await;

    let state = detail.detail().current().await;
    let message = state.failure().expect("unknown coin should fail");
    assert!(message.starts_with("API error: "), "{message}");
}
