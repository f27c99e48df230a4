//! High-level client — `CoinGeckoClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared HTTP handle, and the
//! coordinator constructors.

use crate::coordinator::{DetailCoordinator, ListCoordinator};
use crate::domain::price_history::client::PriceHistoryClient;
use crate::domain::quote::client::Quotes;
use crate::domain::trading_pair::client::TradingPairs;
use crate::error::SdkError;
use crate::http::CoinGeckoHttp;
use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT, DEFAULT_VS_CURRENCY};

use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::price_history::client::PriceHistoryClient as PriceHistorySubClient;
pub use crate::domain::quote::client::Quotes as QuotesClient;
pub use crate::domain::trading_pair::client::TradingPairs as TradingPairsClient;

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "COINGECKO_API_URL";
/// Environment variable overriding the quote currency.
pub const ENV_VS_CURRENCY: &str = "COINGECKO_VS_CURRENCY";
/// Environment variable overriding the request timeout, in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "COINGECKO_TIMEOUT_SECS";

/// The primary entry point for the SDK.
///
/// Provides one-shot sub-clients (`client.quotes()`, ...) and constructors
/// for the screen coordinators. Clones share the same connection pool.
#[derive(Clone)]
pub struct CoinGeckoClient {
    pub(crate) http: Arc<CoinGeckoHttp>,
}

impl CoinGeckoClient {
    pub fn builder() -> CoinGeckoClientBuilder {
        CoinGeckoClientBuilder::default()
    }

    pub(crate) fn http(&self) -> &CoinGeckoHttp {
        &self.http
    }

    pub fn vs_currency(&self) -> &str {
        crate::source::MarketDataApi::vs_currency(self.http.as_ref())
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn quotes(&self) -> Quotes<'_> {
        Quotes { client: self }
    }

    pub fn price_history(&self) -> PriceHistoryClient<'_> {
        PriceHistoryClient { client: self }
    }

    pub fn trading_pairs(&self) -> TradingPairs<'_> {
        TradingPairs { client: self }
    }

    // ── Coordinators ─────────────────────────────────────────────────────

    pub fn list_coordinator(&self) -> ListCoordinator<CoinGeckoHttp> {
        ListCoordinator::new(self.http.clone())
    }

    pub fn detail_coordinator(&self) -> DetailCoordinator<CoinGeckoHttp> {
        DetailCoordinator::new(self.http.clone())
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinGeckoClientBuilder {
    base_url: String,
    vs_currency: String,
    timeout: Duration,
}

impl Default for CoinGeckoClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            vs_currency: DEFAULT_VS_CURRENCY.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl CoinGeckoClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn vs_currency(mut self, currency: &str) -> Self {
        self.vs_currency = currency.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Apply `COINGECKO_*` overrides from the process environment.
    ///
    /// Unset variables keep the builder's current value.
    pub fn from_env(self) -> Result<Self, SdkError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, SdkError> {
        if let Some(url) = lookup(ENV_API_URL) {
            let url = url.trim();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(SdkError::Config(format!(
                    "{} must be an http(s) URL, got {:?}",
                    ENV_API_URL, url
                )));
            }
            self.base_url = url.to_string();
        }

        if let Some(currency) = lookup(ENV_VS_CURRENCY) {
            let currency = currency.trim();
            if currency.is_empty() {
                return Err(SdkError::Config(format!("{} is empty", ENV_VS_CURRENCY)));
            }
            self.vs_currency = currency.to_string();
        }

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                SdkError::Config(format!(
                    "{} must be a whole number of seconds, got {:?}",
                    ENV_TIMEOUT_SECS, secs
                ))
            })?;
            if secs == 0 {
                return Err(SdkError::Config(format!("{} must be positive", ENV_TIMEOUT_SECS)));
            }
            self.timeout = Duration::from_secs(secs);
        }

        Ok(self)
    }

    pub fn build(self) -> Result<CoinGeckoClient, SdkError> {
        tracing::debug!(
            base_url = %self.base_url,
            vs_currency = %self.vs_currency,
            "Building CoinGecko client"
        );
        Ok(CoinGeckoClient {
            http: Arc::new(CoinGeckoHttp::new(
                &self.base_url,
                &self.vs_currency,
                self.timeout,
            )?),
        })
    }
}
