//! Network constants for the CoinGecko public API.

use std::time::Duration;

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Default quote currency for prices and market caps.
pub const DEFAULT_VS_CURRENCY: &str = "usd";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Page size of the top-assets list.
pub const MARKETS_PAGE_SIZE: u32 = 20;
