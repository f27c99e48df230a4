//! Trading pair domain — one representative venue quote per currency pair.

mod aggregate;
pub mod client;

use serde::{Deserialize, Serialize};

pub use aggregate::{aggregate_trading_pairs, MAX_TRADING_PAIRS};

/// Best-volume venue quote for a `BASE/QUOTE` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingPair {
    pub base: String,
    pub quote: String,
    /// `"BASE/QUOTE"`.
    pub symbol: String,
    pub price: f64,
    pub volume_24h: f64,
    /// The venue's bid/ask spread percentage, standing in for a 24h change.
    pub change_percentage_24h: f64,
}

impl TradingPair {
    pub fn new(
        base: impl Into<String>,
        quote: impl Into<String>,
        price: f64,
        volume_24h: f64,
        change_percentage_24h: f64,
    ) -> Self {
        let base = base.into();
        let quote = quote.into();
        Self {
            symbol: format!("{}/{}", base, quote),
            base,
            quote,
            price,
            volume_24h,
            change_percentage_24h,
        }
    }
}
