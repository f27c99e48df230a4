//! Shared newtypes and request parameters used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the API sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;
pub mod serde_util;

pub use fmt::num::{format_percentage, format_price};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── CoinId ──────────────────────────────────────────────────────────────────

/// Newtype for CoinGecko asset identifiers (e.g. `"bitcoin"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoinId(String);

impl CoinId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for CoinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CoinId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CoinId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for CoinId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CoinId(s.to_string()))
    }
}

impl Serialize for CoinId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CoinId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CoinId(s))
    }
}

// ─── SortOrder ───────────────────────────────────────────────────────────────

/// Ordering of the top-assets list, passed through to the markets endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    MarketCapDesc,
    VolumeDesc,
    PriceDesc,
    PriceAsc,
    PercentChangeDesc,
    PercentChangeAsc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 6] = [
        SortOrder::MarketCapDesc,
        SortOrder::VolumeDesc,
        SortOrder::PriceDesc,
        SortOrder::PriceAsc,
        SortOrder::PercentChangeDesc,
        SortOrder::PercentChangeAsc,
    ];

    /// Value of the `order` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MarketCapDesc => "market_cap_desc",
            Self::VolumeDesc => "volume_desc",
            Self::PriceDesc => "price_desc",
            Self::PriceAsc => "price_asc",
            Self::PercentChangeDesc => "percent_change_desc",
            Self::PercentChangeAsc => "percent_change_asc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::MarketCapDesc => "Market Cap",
            Self::VolumeDesc => "24h Volume",
            Self::PriceDesc => "Highest Price",
            Self::PriceAsc => "Lowest Price",
            Self::PercentChangeDesc => "Top Gainers",
            Self::PercentChangeAsc => "Top Losers",
        }
    }

    /// Sort order behind each dashboard tab.
    pub fn for_tab(index: usize) -> Self {
        match index {
            0 => Self::VolumeDesc,
            1 => Self::PercentChangeDesc,
            2 => Self::PercentChangeAsc,
            _ => Self::MarketCapDesc,
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── TimeWindow ──────────────────────────────────────────────────────────────

/// Price history window for the detail chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeWindow {
    #[serde(rename = "1")]
    Day1,
    #[default]
    #[serde(rename = "7")]
    Day7,
    #[serde(rename = "30")]
    Day30,
    #[serde(rename = "90")]
    Day90,
    #[serde(rename = "365")]
    Year1,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 5] = [
        TimeWindow::Day1,
        TimeWindow::Day7,
        TimeWindow::Day30,
        TimeWindow::Day90,
        TimeWindow::Year1,
    ];

    /// Value of the `days` query parameter.
    pub fn days(&self) -> &'static str {
        match self {
            Self::Day1 => "1",
            Self::Day7 => "7",
            Self::Day30 => "30",
            Self::Day90 => "90",
            Self::Year1 => "365",
        }
    }

    /// Parse a `days` value. Unknown input maps to the 7-day window.
    pub fn from_days(s: &str) -> Self {
        match s {
            "1" => Self::Day1,
            "7" => Self::Day7,
            "30" => Self::Day30,
            "90" => Self::Day90,
            "365" => Self::Year1,
            _ => Self::Day7,
        }
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d", self.days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_id_serde() {
        let id = CoinId::from("bitcoin");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"bitcoin\"");
        let back: CoinId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_sort_order_api_strings() {
        assert_eq!(SortOrder::default().as_str(), "market_cap_desc");
        assert_eq!(SortOrder::VolumeDesc.as_str(), "volume_desc");
        let parsed: SortOrder = serde_json::from_str("\"percent_change_asc\"").unwrap();
        assert_eq!(parsed, SortOrder::PercentChangeAsc);
    }

    #[test]
    fn test_sort_order_for_tab() {
        assert_eq!(SortOrder::for_tab(0), SortOrder::VolumeDesc);
        assert_eq!(SortOrder::for_tab(1), SortOrder::PercentChangeDesc);
        assert_eq!(SortOrder::for_tab(2), SortOrder::PercentChangeAsc);
        assert_eq!(SortOrder::for_tab(7), SortOrder::MarketCapDesc);
    }

    #[test]
    fn test_time_window_days() {
        let days: Vec<_> = TimeWindow::ALL.iter().map(|w| w.days()).collect();
        assert_eq!(days, ["1", "7", "30", "90", "365"]);
        assert_eq!(TimeWindow::default(), TimeWindow::Day7);
    }

    #[test]
    fn test_time_window_from_days_falls_back() {
        assert_eq!(TimeWindow::from_days("90"), TimeWindow::Day90);
        assert_eq!(TimeWindow::from_days("14"), TimeWindow::Day7);
        assert_eq!(TimeWindow::from_days(""), TimeWindow::Day7);
    }

    #[test]
    fn test_time_window_serde() {
        let w: TimeWindow = serde_json::from_str("\"365\"").unwrap();
        assert_eq!(w, TimeWindow::Year1);
        assert_eq!(serde_json::to_string(&TimeWindow::Day30).unwrap(), "\"30\"");
    }
}
