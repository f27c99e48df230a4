//! Trading pairs sub-client.

#[cfg(feature = "http")]
use crate::client::CoinGeckoClient;
use crate::domain::trading_pair::{aggregate_trading_pairs, TradingPair};
use crate::error::SdkError;
use crate::shared::CoinId;
use crate::source::MarketDataApi;

/// Fetch tickers and reduce them to the most liquid pairs.
///
/// Transport failures are errors; an unusable payload is an empty list.
pub async fn fetch_pairs<A: MarketDataApi>(
    api: &A,
    id: &CoinId,
) -> Result<Vec<TradingPair>, SdkError> {
    let raw = api.tickers(id).await?;
    Ok(aggregate_trading_pairs(&raw))
}

/// Sub-client for trading pair operations.
#[cfg(feature = "http")]
pub struct TradingPairs<'a> {
    pub(crate) client: &'a CoinGeckoClient,
}

#[cfg(feature = "http")]
impl<'a> TradingPairs<'a> {
    pub async fn get(&self, id: &CoinId) -> Result<Vec<TradingPair>, SdkError> {
        fetch_pairs(self.client.http(), id).await
    }
}
