//! Quotes sub-client — top list and single-asset detail.

#[cfg(feature = "http")]
use crate::client::CoinGeckoClient;
use crate::domain::quote::wire::MarketsQuery;
use crate::domain::quote::{quotes_from_markets, Quote};
use crate::error::SdkError;
use crate::shared::{CoinId, SortOrder};
use crate::source::MarketDataApi;

/// Fetch one page of the markets list and validate every record.
pub async fn fetch_markets<A: MarketDataApi>(
    api: &A,
    query: MarketsQuery,
) -> Result<Vec<Quote>, SdkError> {
    let raw = api.markets(query).await?;
    Ok(quotes_from_markets(raw)?)
}

/// Fetch one asset's detail and select the API's quote currency.
pub async fn fetch_detail<A: MarketDataApi>(api: &A, id: &CoinId) -> Result<Quote, SdkError> {
    let raw = api.coin(id).await?;
    Ok(Quote::try_from((raw, api.vs_currency()))?)
}

/// Sub-client for quote operations.
#[cfg(feature = "http")]
pub struct Quotes<'a> {
    pub(crate) client: &'a CoinGeckoClient,
}

#[cfg(feature = "http")]
impl<'a> Quotes<'a> {
    /// First page of the top list in the given order.
    pub async fn top(&self, order: SortOrder) -> Result<Vec<Quote>, SdkError> {
        fetch_markets(self.client.http(), MarketsQuery::top(order)).await
    }

    pub async fn page(&self, query: MarketsQuery) -> Result<Vec<Quote>, SdkError> {
        fetch_markets(self.client.http(), query).await
    }

    pub async fn get(&self, id: &CoinId) -> Result<Quote, SdkError> {
        fetch_detail(self.client.http(), id).await
    }
}
