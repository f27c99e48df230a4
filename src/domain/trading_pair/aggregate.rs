//! Collapse raw per-venue tickers into ranked trading pairs.
//!
//! The tickers payload is consumed as untyped JSON: any structural surprise
//! degrades to an empty list instead of an error.

use super::TradingPair;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// At most this many pairs survive, highest volume first.
pub const MAX_TRADING_PAIRS: usize = 10;

type Ticker = Map<String, Value>;

/// Reduce a `/coins/{id}/tickers` payload to the ten most liquid pairs.
///
/// Tickers are grouped by `"{base}/{target}"` (missing symbols count as empty
/// strings). Each group keeps its highest-volume entry, the first one seen on
/// ties; a volume that is absent or not a number counts as 0. The survivors
/// are sorted by volume descending (stable) and truncated.
///
/// A payload without a `tickers` array, or with a ticker that is not an
/// object, yields an empty list.
pub fn aggregate_trading_pairs(raw: &Value) -> Vec<TradingPair> {
    match try_aggregate(raw) {
        Some(pairs) => pairs,
        None => {
            tracing::debug!("Unusable tickers payload, no trading pairs");
            Vec::new()
        }
    }
}

fn try_aggregate(raw: &Value) -> Option<Vec<TradingPair>> {
    let tickers = raw.get("tickers")?.as_array()?;

    let mut best: Vec<&Ticker> = Vec::new();
    let mut slot_by_key: HashMap<String, usize> = HashMap::new();

    for ticker in tickers {
        let ticker = ticker.as_object()?;
        let key = format!("{}/{}", text(ticker, "base"), text(ticker, "target"));

        match slot_by_key.get(&key) {
            Some(&slot) => {
                if number(ticker, "volume") > number(best[slot], "volume") {
                    best[slot] = ticker;
                }
            }
            None => {
                slot_by_key.insert(key, best.len());
                best.push(ticker);
            }
        }
    }

    let mut pairs: Vec<TradingPair> = best
        .into_iter()
        .map(|ticker| {
            TradingPair::new(
                text(ticker, "base"),
                text(ticker, "target"),
                number(ticker, "last"),
                number(ticker, "volume"),
                number(ticker, "bid_ask_spread_percentage"),
            )
        })
        .collect();

    pairs.sort_by(|a, b| b.volume_24h.total_cmp(&a.volume_24h));
    pairs.truncate(MAX_TRADING_PAIRS);
    Some(pairs)
}

fn text<'a>(ticker: &'a Ticker, key: &str) -> &'a str {
    ticker.get(key).and_then(Value::as_str).unwrap_or("")
}

fn number(ticker: &Ticker, key: &str) -> f64 {
    ticker.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ticker(base: &str, target: &str, last: f64, volume: f64, spread: f64) -> Value {
        json!({
            "base": base,
            "target": target,
            "last": last,
            "volume": volume,
            "bid_ask_spread_percentage": spread,
            "market": { "name": "Venue", "identifier": "venue" }
        })
    }

    #[test]
    fn test_dedup_keeps_highest_volume_entry() {
        let raw = json!({
            "name": "Bitcoin",
            "tickers": [
                ticker("A", "B", 1.0, 5.0, 0.1),
                ticker("A", "B", 2.0, 9.0, 0.2),
                ticker("C", "D", 3.0, 3.0, 0.3),
            ]
        });
        let pairs = aggregate_trading_pairs(&raw);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].symbol, "A/B");
        assert_eq!(pairs[0].price, 2.0);
        assert_eq!(pairs[0].volume_24h, 9.0);
        assert_eq!(pairs[0].change_percentage_24h, 0.2);
        assert_eq!(pairs[1].symbol, "C/D");
    }

    #[test]
    fn test_truncates_to_top_ten_by_volume() {
        let tickers: Vec<Value> = (0..15)
            .map(|i| ticker(&format!("T{i}"), "USD", 1.0, i as f64 * 10.0, 0.0))
            .collect();
        let pairs = aggregate_trading_pairs(&json!({ "tickers": tickers }));
        assert_eq!(pairs.len(), MAX_TRADING_PAIRS);
        let volumes: Vec<f64> = pairs.iter().map(|p| p.volume_24h).collect();
        assert_eq!(volumes, [140.0, 130.0, 120.0, 110.0, 100.0, 90.0, 80.0, 70.0, 60.0, 50.0]);
    }

    #[test]
    fn test_missing_tickers_field_is_empty() {
        assert!(aggregate_trading_pairs(&json!({ "name": "Bitcoin" })).is_empty());
        assert!(aggregate_trading_pairs(&json!({ "tickers": null })).is_empty());
        assert!(aggregate_trading_pairs(&json!({ "tickers": "nope" })).is_empty());
        assert!(aggregate_trading_pairs(&json!([])).is_empty());
    }

    #[test]
    fn test_non_object_ticker_empties_the_whole_result() {
        let raw = json!({ "tickers": [ticker("A", "B", 1.0, 5.0, 0.0), 42] });
        assert!(aggregate_trading_pairs(&raw).is_empty());
    }

    #[test]
    fn test_ties_keep_first_seen() {
        let raw = json!({
            "tickers": [
                ticker("A", "B", 1.0, 7.0, 0.0),
                ticker("A", "B", 2.0, 7.0, 0.0),
                ticker("C", "D", 3.0, 7.0, 0.0),
            ]
        });
        let pairs = aggregate_trading_pairs(&raw);
        assert_eq!(pairs[0].symbol, "A/B");
        assert_eq!(pairs[0].price, 1.0);
        assert_eq!(pairs[1].symbol, "C/D");
    }

    #[test]
    fn test_missing_and_non_numeric_fields_default() {
        let raw = json!({
            "tickers": [
                { "target": "USDT", "last": "oops", "volume": "12" },
                { "base": "BTC", "target": 5, "last": 10, "volume": 4 },
            ]
        });
        let pairs = aggregate_trading_pairs(&raw);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].symbol, "BTC/");
        assert_eq!(pairs[0].price, 10.0);
        assert_eq!(pairs[0].volume_24h, 4.0);
        assert_eq!(pairs[1].base, "");
        assert_eq!(pairs[1].symbol, "/USDT");
        assert_eq!(pairs[1].price, 0.0);
        assert_eq!(pairs[1].volume_24h, 0.0);
        assert_eq!(pairs[1].change_percentage_24h, 0.0);
    }
}
