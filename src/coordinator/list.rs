//! `ListCoordinator` — the top-assets list screen.

use crate::coordinator::settle_cycle;
use crate::domain::quote::client::fetch_markets;
use crate::domain::quote::wire::MarketsQuery;
use crate::domain::quote::Quote;
use crate::shared::SortOrder;
use crate::source::MarketDataApi;
use crate::state::{Cycle, StateChannel};

use async_lock::RwLock;
use std::sync::{Arc, Mutex, PoisonError};

/// Holds the top-assets list and the sort order it was fetched with.
///
/// Every load fetches the first page in the current order. `is_refreshing()`
/// is raised by `refresh()` and stays up until that cycle, or a newer one,
/// publishes its terminal result.
pub struct ListCoordinator<A> {
    api: Arc<A>,
    sort: RwLock<SortOrder>,
    refresh: Mutex<RefreshMark>,
    quotes: StateChannel<Vec<Quote>>,
}

/// Bookkeeping behind `is_refreshing()`.
#[derive(Default)]
struct RefreshMark {
    /// Newest refresh cycle not yet covered by a published result.
    pending: Option<Cycle>,
    /// Newest cycle that published its terminal result.
    settled: Option<Cycle>,
}

impl RefreshMark {
    fn raise(&mut self, cycle: Cycle) {
        if self.settled >= Some(cycle) {
            return;
        }
        self.pending = self.pending.max(Some(cycle));
    }

    fn settle(&mut self, cycle: Cycle) {
        self.settled = self.settled.max(Some(cycle));
        if self.pending <= self.settled {
            self.pending = None;
        }
    }
}

impl<A: MarketDataApi> ListCoordinator<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self::with_sort(api, SortOrder::default())
    }

    pub fn with_sort(api: Arc<A>, sort: SortOrder) -> Self {
        Self {
            api,
            sort: RwLock::new(sort),
            refresh: Mutex::new(RefreshMark::default()),
            quotes: StateChannel::new(),
        }
    }

    /// Channel carrying the list's `LoadState`.
    pub fn quotes(&self) -> &StateChannel<Vec<Quote>> {
        &self.quotes
    }

    pub async fn sort_order(&self) -> SortOrder {
        *self.sort.read().await
    }

    pub fn is_refreshing(&self) -> bool {
        self.mark().pending.is_some()
    }

    /// Fetch the list in the current sort order.
    pub async fn load(&self) -> bool {
        let order = self.sort_order().await;
        self.fetch(order, false).await
    }

    /// Switch the sort order and reload.
    ///
    /// Selecting the order already in effect does nothing and returns `false`.
    pub async fn change_sort(&self, order: SortOrder) -> bool {
        {
            let mut sort = self.sort.write().await;
            if *sort == order {
                tracing::debug!(order = %order, "Sort order unchanged");
                return false;
            }
            *sort = order;
        }
        self.fetch(order, false).await;
        true
    }

    /// User-initiated reload; raises `is_refreshing()` until it settles.
    pub async fn refresh(&self) -> bool {
        let order = self.sort_order().await;
        self.fetch(order, true).await
    }

    async fn fetch(&self, order: SortOrder, refresh: bool) -> bool {
        tracing::debug!(order = %order, refresh, "Loading top quotes");
        let cycle = self.quotes.begin().await;
        if refresh {
            self.mark().raise(cycle);
        }

        let fetch = fetch_markets(self.api.as_ref(), MarketsQuery::top(order));
        let published = settle_cycle(&self.quotes, cycle, "markets", fetch).await;
        if published {
            self.mark().settle(cycle);
        }
        published
    }

    fn mark(&self) -> std::sync::MutexGuard<'_, RefreshMark> {
        self.refresh.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
