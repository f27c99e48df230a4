//! Low-level HTTP client — `CoinGeckoHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens in the sub-clients and coordinators). No retries: a failed request
//! is reported once.

use crate::domain::price_history::wire::MarketChart;
use crate::domain::quote::wire::{CoinDetail, MarketQuote, MarketsQuery};
use crate::error::HttpError;
use crate::shared::{CoinId, TimeWindow};
use crate::source::MarketDataApi;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the CoinGecko REST API.
#[derive(Clone)]
pub struct CoinGeckoHttp {
    base_url: String,
    vs_currency: String,
    client: Client,
}

impl CoinGeckoHttp {
    pub fn new(base_url: &str, vs_currency: &str, timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            vs_currency: vs_currency.to_lowercase(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Markets ──────────────────────────────────────────────────────────

    pub async fn get_markets(&self, query: &MarketsQuery) -> Result<Vec<MarketQuote>, HttpError> {
        let url = format!(
            "{}/coins/markets?vs_currency={}&order={}&per_page={}&page={}&sparkline=true&price_change_percentage=1h,24h,7d",
            self.base_url,
            urlencoding::encode(&self.vs_currency),
            query.order.as_str(),
            query.per_page,
            query.page
        );
        self.get(&url).await
    }

    // ── Coin detail ──────────────────────────────────────────────────────

    pub async fn get_coin(&self, id: &CoinId) -> Result<CoinDetail, HttpError> {
        let url = format!(
            "{}/coins/{}?localization=false&tickers=false&market_data=true&community_data=false&developer_data=false&sparkline=true",
            self.base_url,
            urlencoding::encode(id.as_str())
        );
        self.get(&url).await
    }

    // ── Price history ────────────────────────────────────────────────────

    pub async fn get_market_chart(
        &self,
        id: &CoinId,
        window: TimeWindow,
    ) -> Result<MarketChart, HttpError> {
        let url = format!(
            "{}/coins/{}/market_chart?vs_currency={}&days={}",
            self.base_url,
            urlencoding::encode(id.as_str()),
            urlencoding::encode(&self.vs_currency),
            window.days()
        );
        self.get(&url).await
    }

    // ── Tickers ──────────────────────────────────────────────────────────

    pub async fn get_tickers(&self, id: &CoinId) -> Result<serde_json::Value, HttpError> {
        let url = format!(
            "{}/coins/{}/tickers?include_exchange_logo=false&page=1&order=trust_score_desc&depth=false",
            self.base_url,
            urlencoding::encode(id.as_str())
        );
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!(url, "GET");

        let resp = self.client.get(url).send().await.map_err(transport)?;
        let status = resp.status();

        if !status.is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                body = %excerpt(&body_text),
                "Request to {} failed",
                url
            );
            return Err(HttpError::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = resp.text().await.map_err(transport)?;
        decode_body(&body)
    }
}

impl MarketDataApi for CoinGeckoHttp {
    fn vs_currency(&self) -> &str {
        &self.vs_currency
    }

    async fn markets(&self, query: MarketsQuery) -> Result<Vec<MarketQuote>, HttpError> {
        self.get_markets(&query).await
    }

    async fn coin(&self, id: &CoinId) -> Result<CoinDetail, HttpError> {
        self.get_coin(id).await
    }

    async fn market_chart(&self, id: &CoinId, window: TimeWindow) -> Result<MarketChart, HttpError> {
        self.get_market_chart(id, window).await
    }

    async fn tickers(&self, id: &CoinId) -> Result<serde_json::Value, HttpError> {
        self.get_tickers(id).await
    }
}

fn transport(err: reqwest::Error) -> HttpError {
    if err.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Reqwest(err)
    }
}

/// A 2xx body that is blank or JSON `null` counts as an empty response.
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, HttpError> {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        tracing::debug!("Empty response body");
        return Err(HttpError::EmptyResponse);
    }
    Ok(serde_json::from_str(trimmed)?)
}

fn excerpt(body: &str) -> &str {
    match body.char_indices().nth(200) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
