//! Conversions from market chart wire types to price points.

use super::wire::MarketChart;
use super::{PriceHistory, PricePoint};
use crate::shared::TimeWindow;
use serde_json::Value;

/// Map raw `[timestamp, value]` tuples to price points, preserving order.
///
/// The timestamp is truncated to an integer. Entries that are not arrays,
/// have fewer than two elements, or hold a non-numeric timestamp or price
/// are skipped; extra elements are ignored.
pub fn normalize_series(raw: &[Value]) -> Vec<PricePoint> {
    raw.iter()
        .filter_map(|tuple| {
            let point = match tuple.as_array().map(Vec::as_slice) {
                Some([timestamp, price, ..]) => timestamp
                    .as_f64()
                    .zip(price.as_f64())
                    .map(|(timestamp, price)| PricePoint {
                        timestamp: timestamp as i64,
                        price,
                    }),
                _ => None,
            };
            if point.is_none() {
                tracing::warn!(tuple = %tuple, "Skipping malformed price tuple");
            }
            point
        })
        .collect()
}

impl From<(MarketChart, TimeWindow)> for PriceHistory {
    fn from((chart, window): (MarketChart, TimeWindow)) -> Self {
        Self {
            window,
            points: normalize_series(&chart.prices),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn series(value: Value) -> Vec<Value> {
        match value {
            Value::Array(items) => items,
            other => panic!("not an array: {other}"),
        }
    }

    #[test]
    fn test_normalize_preserves_order_and_length() {
        let raw = series(json!([[1000, 10.0], [2000, 12.5]]));
        let points = normalize_series(&raw);
        assert_eq!(
            points,
            vec![
                PricePoint { timestamp: 1000, price: 10.0 },
                PricePoint { timestamp: 2000, price: 12.5 },
            ]
        );
    }

    #[test]
    fn test_normalize_does_not_sort_or_dedup() {
        let raw = series(json!([[3000, 1.0], [1000, 2.0], [1000, 2.0]]));
        let timestamps: Vec<_> = normalize_series(&raw).iter().map(|p| p.timestamp).collect();
        assert_eq!(timestamps, [3000, 1000, 1000]);
    }

    #[test]
    fn test_normalize_truncates_timestamp() {
        let points = normalize_series(&series(json!([[1_711_929_600_123.9, 1.0]])));
        assert_eq!(points[0].timestamp, 1_711_929_600_123);
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize_series(&[]).is_empty());
    }

    #[test]
    fn test_normalize_skips_short_tuples() {
        let raw = series(json!([[1000, 10.0], [1500], [], [2000, 12.5, 99.0]]));
        let points = normalize_series(&raw);
        assert_eq!(points.len(), 2);
        assert_eq!(points[1], PricePoint { timestamp: 2000, price: 12.5 });
    }

    #[test]
    fn test_normalize_skips_non_numeric_tuples() {
        let raw = series(json!([
            [1000, 10.0],
            [2000, null],
            [null, 5.0],
            ["3000", 6.0],
            { "t": 4000 },
            7.5,
            [5000, 11.0]
        ]));
        let points = normalize_series(&raw);
        assert_eq!(
            points,
            vec![
                PricePoint { timestamp: 1000, price: 10.0 },
                PricePoint { timestamp: 5000, price: 11.0 },
            ]
        );
    }

    #[test]
    fn test_history_survives_null_price() {
        let chart: MarketChart =
            serde_json::from_str(r#"{"prices": [[1000, 10.0], [2000, null]]}"#).unwrap();
        let history = PriceHistory::from((chart, TimeWindow::Day7));
        assert_eq!(history.points, vec![PricePoint { timestamp: 1000, price: 10.0 }]);
    }

    #[test]
    fn test_history_uses_price_series_only() {
        let chart: MarketChart = serde_json::from_str(
            r#"{
                "prices": [[1000, 10.0], [2000, 11.0]],
                "market_caps": [[1000, 5.0]],
                "total_volumes": null
            }"#,
        )
        .unwrap();
        let history = PriceHistory::from((chart, TimeWindow::Day30));
        assert_eq!(history.window, TimeWindow::Day30);
        assert_eq!(history.points.len(), 2);
        assert_eq!(history.points[1].price, 11.0);
    }

    #[test]
    fn test_history_malformed_series_is_empty() {
        for body in ["{}", r#"{"prices": null}"#, r#"{"prices": "oops"}"#] {
            let chart: MarketChart = serde_json::from_str(body).unwrap();
            assert!(PriceHistory::from((chart, TimeWindow::Day1)).is_empty(), "{body}");
        }
    }
}
