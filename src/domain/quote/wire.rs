//! Wire types for quote responses (REST).
//!
//! Every field is optional here; presence is checked in `convert.rs`.

use crate::network::MARKETS_PAGE_SIZE;
use crate::shared::serde_util::null_as_default;
use crate::shared::{CoinId, SortOrder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-currency values, e.g. `{"usd": 67000.0, "eur": 61000.0}`.
pub type CurrencyMap<T> = HashMap<String, Option<T>>;

// ─── /coins/markets ─────────────────────────────────────────────────────────

/// Request parameters for `/coins/markets`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketsQuery {
    pub order: SortOrder,
    pub per_page: u32,
    pub page: u32,
}

impl MarketsQuery {
    /// First page of the top list in the given order.
    pub fn top(order: SortOrder) -> Self {
        Self {
            order,
            per_page: MARKETS_PAGE_SIZE,
            page: 1,
        }
    }
}

/// Embedded 7-day price series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sparkline {
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: Vec<f64>,
}

/// One element of the `/coins/markets` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketQuote {
    pub id: Option<CoinId>,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub image: Option<String>,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub market_cap_rank: Option<u32>,
    pub fully_diluted_valuation: Option<f64>,
    pub total_volume: Option<f64>,
    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,
    pub price_change_24h: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub market_cap_change_24h: Option<f64>,
    pub market_cap_change_percentage_24h: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    pub ath: Option<f64>,
    pub ath_change_percentage: Option<f64>,
    pub ath_date: Option<String>,
    pub atl: Option<f64>,
    pub atl_change_percentage: Option<f64>,
    pub atl_date: Option<String>,
    pub last_updated: Option<String>,
    pub sparkline_in_7d: Option<Sparkline>,
    pub price_change_percentage_7d_in_currency: Option<f64>,
    pub price_change_percentage_14d_in_currency: Option<f64>,
    pub price_change_percentage_30d_in_currency: Option<f64>,
    pub price_change_percentage_200d_in_currency: Option<f64>,
    pub price_change_percentage_1y_in_currency: Option<f64>,
}

// ─── /coins/{id} ────────────────────────────────────────────────────────────

/// Image links of the detail response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageLinks {
    pub thumb: Option<String>,
    pub small: Option<String>,
    pub large: Option<String>,
}

impl ImageLinks {
    /// Largest available image.
    pub fn best(&self) -> Option<&String> {
        self.large
            .as_ref()
            .or(self.small.as_ref())
            .or(self.thumb.as_ref())
    }
}

/// `market_data` block of the detail response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketDataBlock {
    #[serde(deserialize_with = "null_as_default")]
    pub current_price: CurrencyMap<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub market_cap: CurrencyMap<f64>,
    pub market_cap_rank: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub fully_diluted_valuation: CurrencyMap<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub total_volume: CurrencyMap<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub high_24h: CurrencyMap<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub low_24h: CurrencyMap<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub price_change_24h_in_currency: CurrencyMap<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub price_change_percentage_24h_in_currency: CurrencyMap<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub market_cap_change_24h_in_currency: CurrencyMap<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub market_cap_change_percentage_24h_in_currency: CurrencyMap<f64>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub ath: CurrencyMap<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub ath_change_percentage: CurrencyMap<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub ath_date: CurrencyMap<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub atl: CurrencyMap<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub atl_change_percentage: CurrencyMap<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub atl_date: CurrencyMap<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub price_change_percentage_7d_in_currency: CurrencyMap<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub price_change_percentage_14d_in_currency: CurrencyMap<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub price_change_percentage_30d_in_currency: CurrencyMap<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub price_change_percentage_200d_in_currency: CurrencyMap<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub price_change_percentage_1y_in_currency: CurrencyMap<f64>,
    pub sparkline_7d: Option<Sparkline>,
    pub last_updated: Option<String>,
}

/// REST response for `/coins/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinDetail {
    pub id: Option<CoinId>,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub image: Option<ImageLinks>,
    pub market_cap_rank: Option<u32>,
    pub last_updated: Option<String>,
    pub market_data: Option<MarketDataBlock>,
}
