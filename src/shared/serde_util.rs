//! Custom serde helpers for CoinGecko wire formats.

/// Deserializes `null` (or a missing field, with `#[serde(default)]`) as `T::default()`.
///
/// The detail endpoint sends per-currency maps as `null` for assets without
/// market data.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de> + Default,
{
    use serde::Deserialize;
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes any JSON array as its elements; anything else (`null`, an
/// object, a scalar) becomes an empty list.
pub fn lenient_array<'de, D>(deserializer: D) -> Result<Vec<serde_json::Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(items) => Ok(items),
        other => {
            tracing::warn!(kind = %json_kind(&other), "Expected an array, using empty list");
            Ok(Vec::new())
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
