//! `DetailCoordinator` — the single-asset detail screen.

use crate::coordinator::run_cycle;
use crate::domain::price_history::client::fetch_history;
use crate::domain::price_history::PriceHistory;
use crate::domain::quote::client::fetch_detail;
use crate::domain::quote::Quote;
use crate::domain::trading_pair::client::fetch_pairs;
use crate::domain::trading_pair::TradingPair;
use crate::shared::{CoinId, TimeWindow};
use crate::source::MarketDataApi;
use crate::state::StateChannel;

use async_lock::RwLock;
use std::sync::Arc;

/// Three independent states for one asset: detail quote, price history for
/// the selected window, and trading pairs.
///
/// A failure of one request leaves the other two untouched.
pub struct DetailCoordinator<A> {
    api: Arc<A>,
    subject: RwLock<Option<CoinId>>,
    window: RwLock<TimeWindow>,
    detail: StateChannel<Quote>,
    history: StateChannel<PriceHistory>,
    pairs: StateChannel<Vec<TradingPair>>,
}

impl<A: MarketDataApi> DetailCoordinator<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            subject: RwLock::new(None),
            window: RwLock::new(TimeWindow::default()),
            detail: StateChannel::new(),
            history: StateChannel::new(),
            pairs: StateChannel::new(),
        }
    }

    pub fn detail(&self) -> &StateChannel<Quote> {
        &self.detail
    }

    pub fn history(&self) -> &StateChannel<PriceHistory> {
        &self.history
    }

    pub fn pairs(&self) -> &StateChannel<Vec<TradingPair>> {
        &self.pairs
    }

    /// Asset currently shown, if any.
    pub async fn current_id(&self) -> Option<CoinId> {
        self.subject.read().await.clone()
    }

    pub async fn window(&self) -> TimeWindow {
        *self.window.read().await
    }

    /// Show `id`: fetches detail, history and pairs concurrently.
    ///
    /// Loading the asset already shown is a no-op returning `false`; use
    /// `refresh()` to force a reload.
    pub async fn load(&self, id: impl Into<CoinId>) -> bool {
        let id = id.into();
        {
            let mut subject = self.subject.write().await;
            if subject.as_ref() == Some(&id) {
                tracing::debug!(id = %id, "Asset already loaded");
                return false;
            }
            *subject = Some(id.clone());
        }
        self.load_all(&id).await;
        true
    }

    /// Select a chart window and re-fetch the history only.
    ///
    /// Always fetches, even when the window is unchanged. Returns `false`
    /// when no asset has been loaded yet.
    pub async fn change_window(&self, window: TimeWindow) -> bool {
        *self.window.write().await = window;
        let Some(id) = self.current_id().await else {
            return false;
        };
        self.load_history(&id, window).await;
        true
    }

    /// Re-fetch all three requests for the current asset.
    pub async fn refresh(&self) -> bool {
        let Some(id) = self.current_id().await else {
            return false;
        };
        self.load_all(&id).await;
        true
    }

    async fn load_all(&self, id: &CoinId) {
        let window = self.window().await;
        tracing::debug!(id = %id, window = %window, "Loading asset detail");
        futures_util::join!(
            self.load_detail(id),
            self.load_history(id, window),
            self.load_pairs(id)
        );
    }

    async fn load_detail(&self, id: &CoinId) -> bool {
        run_cycle(&self.detail, "coin", fetch_detail(self.api.as_ref(), id)).await
    }

    async fn load_history(&self, id: &CoinId, window: TimeWindow) -> bool {
        let fetch = fetch_history(self.api.as_ref(), id, window);
        run_cycle(&self.history, "market_chart", fetch).await
    }

    async fn load_pairs(&self, id: &CoinId) -> bool {
        run_cycle(&self.pairs, "tickers", fetch_pairs(self.api.as_ref(), id)).await
    }
}
