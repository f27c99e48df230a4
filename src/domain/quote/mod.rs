//! Quote domain — one asset's normalized market snapshot, validation, conversion.

pub mod client;
mod convert;
pub mod wire;

pub use convert::quotes_from_markets;

use crate::shared::CoinId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Quote ───────────────────────────────────────────────────────────────────

/// Percentage price changes over longer windows. Absent when the API omits them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodChanges {
    pub d7: Option<f64>,
    pub d14: Option<f64>,
    pub d30: Option<f64>,
    pub d200: Option<f64>,
    pub y1: Option<f64>,
}

/// A validated market snapshot for one asset.
///
/// Built fresh from every successful fetch and never mutated afterwards.
/// Optional values stay `None` when absent; they are never defaulted to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    pub image: String,
    pub current_price: f64,
    pub market_cap: f64,
    /// 1-based; `None` for unranked assets.
    pub market_cap_rank: Option<u32>,
    pub fully_diluted_valuation: Option<f64>,
    pub total_volume: f64,
    pub high_24h: f64,
    pub low_24h: f64,
    pub price_change_24h: f64,
    pub price_change_percentage_24h: f64,
    pub market_cap_change_24h: f64,
    pub market_cap_change_percentage_24h: f64,
    pub circulating_supply: f64,
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    pub ath: f64,
    pub ath_change_percentage: f64,
    pub ath_date: String,
    pub atl: f64,
    pub atl_change_percentage: f64,
    pub atl_date: String,
    pub last_updated: String,
    pub sparkline_7d: Option<Vec<f64>>,
    pub price_change_percentage: PeriodChanges,
}

impl Quote {
    pub fn is_ranked(&self) -> bool {
        self.market_cap_rank.is_some()
    }

    /// `last_updated` parsed as RFC 3339, if it is well formed.
    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.last_updated)
    }

    pub fn ath_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.ath_date)
    }

    pub fn atl_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.atl_date)
    }
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    Multiple(String, Vec<ValidationError>),
    EmptyId,
    MissingField(&'static str),
    NonFiniteNumber(&'static str),
    MissingMarketData,
    DuplicateId(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(id, errors) => {
                write!(f, "Quote validation errors ({id}):")?;
                for err in errors {
                    write!(f, " {};", err)?;
                }
                Ok(())
            }
            ValidationError::EmptyId => write!(f, "Missing id"),
            ValidationError::MissingField(field) => write!(f, "Missing {}", field),
            ValidationError::NonFiniteNumber(field) => write!(f, "Non-finite {}", field),
            ValidationError::MissingMarketData => write!(f, "Missing market_data"),
            ValidationError::DuplicateId(id) => write!(f, "Duplicate id {}", id),
        }
    }
}

impl std::error::Error for ValidationError {}
