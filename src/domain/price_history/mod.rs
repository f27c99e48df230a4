//! Price history domain — chart points, windows, summary statistics.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::TimeWindow;
use serde::{Deserialize, Serialize};

pub use convert::normalize_series;

/// A single data point on a price chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Epoch timestamp exactly as the API sent it (milliseconds for CoinGecko).
    pub timestamp: i64,
    pub price: f64,
}

/// Normalized price series for one asset over one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    pub window: TimeWindow,
    /// In source order; never re-sorted.
    pub points: Vec<PricePoint>,
}

/// Summary of a price series as shown above the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStats {
    pub current: f64,
    pub start: f64,
    pub change: f64,
    /// Zero when the series starts at zero.
    pub change_percent: f64,
    pub min: f64,
    pub max: f64,
}

impl PriceHistory {
    pub fn new(window: TimeWindow, points: Vec<PricePoint>) -> Self {
        Self { window, points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `None` for an empty series.
    pub fn stats(&self) -> Option<ChartStats> {
        let start = self.points.first()?.price;
        let current = self.points.last()?.price;
        let change = current - start;
        let change_percent = if start != 0.0 {
            change / start * 100.0
        } else {
            0.0
        };

        let (min, max) = self
            .points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.price), hi.max(p.price))
            });

        Some(ChartStats {
            current,
            start,
            change,
            change_percent,
            min,
            max,
        })
    }
}
