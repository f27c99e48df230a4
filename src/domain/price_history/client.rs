//! Price history sub-client — chart series for one window.

#[cfg(feature = "http")]
use crate::client::CoinGeckoClient;
use crate::domain::price_history::PriceHistory;
use crate::error::SdkError;
use crate::shared::{CoinId, TimeWindow};
use crate::source::MarketDataApi;

/// Fetch a market chart and normalize its price series.
pub async fn fetch_history<A: MarketDataApi>(
    api: &A,
    id: &CoinId,
    window: TimeWindow,
) -> Result<PriceHistory, SdkError> {
    let chart = api.market_chart(id, window).await?;
    Ok(PriceHistory::from((chart, window)))
}

/// Sub-client for price history operations.
#[cfg(feature = "http")]
pub struct PriceHistoryClient<'a> {
    pub(crate) client: &'a CoinGeckoClient,
}

#[cfg(feature = "http")]
impl<'a> PriceHistoryClient<'a> {
    pub async fn get(&self, id: &CoinId, window: TimeWindow) -> Result<PriceHistory, SdkError> {
        fetch_history(self.client.http(), id, window).await
    }
}
