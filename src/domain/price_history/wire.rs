//! Wire types for price history (REST).

use crate::shared::serde_util::lenient_array;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// REST response for `/coins/{id}/market_chart`.
///
/// Three parallel series of `[timestamp, value]` tuples. Only `prices` feeds
/// the chart. Tuples stay untyped so one bad entry cannot reject the chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketChart {
    #[serde(default, deserialize_with = "lenient_array")]
    pub prices: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_array")]
    pub market_caps: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_array")]
    pub total_volumes: Vec<Value>,
}
