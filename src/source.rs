//! `MarketDataApi` — the wire-level seam between coordinators and the network.

use crate::domain::price_history::wire::MarketChart;
use crate::domain::quote::wire::{CoinDetail, MarketQuote, MarketsQuery};
use crate::error::HttpError;
use crate::shared::{CoinId, TimeWindow};
use std::future::Future;

/// Raw market-data fetches. Implemented by `CoinGeckoHttp`; tests inject fakes.
///
/// Each call is a single request with no retry. Normalization happens in the
/// caller.
pub trait MarketDataApi: Send + Sync {
    /// Currency the quotes are denominated in (e.g. `"usd"`).
    fn vs_currency(&self) -> &str;

    /// `GET /coins/markets`
    fn markets(
        &self,
        query: MarketsQuery,
    ) -> impl Future<Output = Result<Vec<MarketQuote>, HttpError>> + Send;

    /// `GET /coins/{id}`
    fn coin(&self, id: &CoinId) -> impl Future<Output = Result<CoinDetail, HttpError>> + Send;

    /// `GET /coins/{id}/market_chart`
    fn market_chart(
        &self,
        id: &CoinId,
        window: TimeWindow,
    ) -> impl Future<Output = Result<MarketChart, HttpError>> + Send;

    /// `GET /coins/{id}/tickers`, left untyped for the aggregator.
    fn tickers(
        &self,
        id: &CoinId,
    ) -> impl Future<Output = Result<serde_json::Value, HttpError>> + Send;
}
