use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Clones `value` through its JSON representation.
///
/// Anything that does not survive serialization (skipped fields, non-string
/// map keys) is normalized the same way `serde_json` would normalize it.
pub fn deep_clone<T: Serialize + DeserializeOwned>(value: &T) -> Result<T> {
    let json = serde_json::to_value(value)?;
    Ok(serde_json::from_value(json)?)
}

/// Recursively merges `overlay` into a copy of `base`.
///
/// Nested objects are merged key by key. Arrays, scalars and `null` in
/// `overlay` replace whatever `base` held. When an object in `overlay` meets a
/// non-object in `base`, an array or string base turns into an index-keyed
/// object and any other base is discarded.
///
/// ```
/// use serde_json::json;
/// use small_utils::core::object::deep_merge;
///
/// let merged = deep_merge(&json!({"a": 1, "b": {"c": 2}}), &json!({"b": {"d": 3}}));
/// assert_eq!(merged, json!({"a": 1, "b": {"c": 2, "d": 3}}));
/// ```
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match overlay {
        Value::Object(incoming) => Value::Object(deep_merge_maps(&as_object(base), incoming)),
        other => other.clone(),
    }
}

pub fn deep_merge_maps(base: &Map<String, Value>, overlay: &Map<String, Value>) -> Map<String, Value> {
    let mut result = base.clone();
    for (key, incoming) in overlay {
        let merged = match incoming {
            Value::Object(incoming_map) => {
                let existing = result.get(key).map(as_object).unwrap_or_default();
                Value::Object(deep_merge_maps(&existing, incoming_map))
            }
            other => other.clone(),
        };
        result.insert(key.clone(), merged);
    }
    result
}

fn as_object(value: &Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map.clone(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| (i.to_string(), item.clone()))
            .collect(),
        Value::String(text) => text
            .chars()
            .enumerate()
            .map(|(i, ch)| (i.to_string(), Value::String(ch.to_string())))
            .collect(),
        _ => Map::new(),
    }
}
