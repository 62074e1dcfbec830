//! Conversions between loosely-typed engine values and display text.
//!
//! Charting engines hand back JSON-ish values whose "presence" follows
//! script truthiness: `null`, `false`, `0` and `""` all count as missing.

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Text for `value` if it is truthy, `None` otherwise.
pub fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(display_text(other)),
    }
}

/// String form of any value.
///
/// Strings pass through unquoted, numbers drop a zero fractional part,
/// arrays and objects render as compact JSON.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

pub fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Deserialize a string-or-number field, collapsing falsy values to `None`.
pub(crate) fn deserialize_truthy_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(truthy_text))
}
