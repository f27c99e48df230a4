//! # Crypto Dashboard SDK
//!
//! Market-data normalization and screen load coordination for a crypto
//! price dashboard backed by the CoinGecko public API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, wire types and normalizers
//! 2. **State** — `LoadState` and the `StateChannel` that publishes it
//! 3. **Source** — `MarketDataApi`, the seam between coordinators and the network
//! 4. **HTTP API** — `CoinGeckoHttp`, one method per endpoint, no retries
//! 5. **Coordinators** — `ListCoordinator` and `DetailCoordinator`
//! 6. **High-Level Client** — `CoinGeckoClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use crypto_dashboard::prelude::*;
//!
//! let client = CoinGeckoClient::builder().from_env()?.build()?;
//!
//! let top = client.quotes().top(SortOrder::MarketCapDesc).await?;
//!
//! let detail = client.detail_coordinator();
//! detail.load("bitcoin").await;
//! let history = detail.history().current().await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, request parameters and display formatting.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network constants.
pub mod network;

// ── Layer 2: State ───────────────────────────────────────────────────────────

/// Three-state load results and observable channels.
pub mod state;

// ── Layer 3: Source ──────────────────────────────────────────────────────────

/// Raw market-data fetch trait.
pub mod source;

// ── Layer 4: HTTP API ────────────────────────────────────────────────────────

/// HTTP client for the CoinGecko REST API.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 5: Coordinators ────────────────────────────────────────────────────

/// Screen-facing load coordinators.
pub mod coordinator;

// ── Layer 6: High-Level Client ───────────────────────────────────────────────

/// `CoinGeckoClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + formatting
    pub use crate::shared::{format_percentage, format_price, CoinId, SortOrder, TimeWindow};

    // Domain types
    pub use crate::domain::price_history::{ChartStats, PriceHistory, PricePoint};
    pub use crate::domain::quote::{PeriodChanges, Quote, ValidationError};
    pub use crate::domain::trading_pair::TradingPair;

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_VS_CURRENCY};

    // State
    pub use crate::state::{LoadState, StateChannel, Subscription};

    // Source + coordinators
    pub use crate::coordinator::{DetailCoordinator, ListCoordinator};
    pub use crate::source::MarketDataApi;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        CoinGeckoClient, CoinGeckoClientBuilder, PriceHistorySubClient, QuotesClient,
        TradingPairsClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::CoinGeckoHttp;
}
