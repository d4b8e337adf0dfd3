//! Ordered field lookup over loosely shaped JSON records.
//!
//! Each lookup takes a priority list of keys; the first key holding a value of
//! the wanted kind wins. Keys may be dotted paths (`data.productId`).

use serde_json::Value;

pub(crate) fn at_path<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(record, |current, segment| current.get(segment))
}

fn first_map<'a, T>(record: &'a Value, keys: &[&str], pick: impl Fn(&'a Value) -> Option<T>) -> Option<T> {
    keys.iter().filter_map(|key| at_path(record, key)).find_map(pick)
}

/// Non-negative integer, from a JSON number or a numeric string.
pub(crate) fn as_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn first_id(record: &Value, keys: &[&str]) -> Option<u64> {
    first_map(record, keys, as_id)
}

pub(crate) fn first_str<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a str> {
    first_map(record, keys, Value::as_str)
}

pub(crate) fn first_number(record: &Value, keys: &[&str]) -> Option<f64> {
    first_map(record, keys, |value| match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

pub(crate) fn first_array<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Vec<Value>> {
    first_map(record, keys, Value::as_array)
}
