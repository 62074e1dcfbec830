use folio_protocol::value::display_text;
use serde_json::Value;

/// Shown in place of a missing value.
pub const PLACEHOLDER: &str = "\u{2014}";

/// Display form of a tooltip value. Zero is a value, not an absence.
pub fn format_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => PLACEHOLDER.to_string(),
        Some(v) => display_text(v),
    }
}

/// Heading text for a tooltip label: non-empty strings and numbers only.
pub fn heading_text(label: Option<&Value>) -> Option<String> {
    match label? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        v @ Value::Number(_) => Some(display_text(v)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_and_missing_use_placeholder() {
        assert_eq!(format_value(None), "—");
        assert_eq!(format_value(Some(&json!(null))), "—");
    }

    #[test]
    fn zero_is_not_absent() {
        assert_eq!(format_value(Some(&json!(0))), "0");
        assert_eq!(format_value(Some(&json!(""))), "");
    }

    #[test]
    fn other_values_stringify() {
        assert_eq!(format_value(Some(&json!(1234.5))), "1234.5");
        assert_eq!(format_value(Some(&json!("12%"))), "12%");
        assert_eq!(format_value(Some(&json!(true))), "true");
        assert_eq!(format_value(Some(&json!([10, 20]))), "[10,20]");
    }

    #[test]
    fn heading_accepts_strings_and_numbers() {
        assert_eq!(heading_text(Some(&json!("January"))).as_deref(), Some("January"));
        assert_eq!(heading_text(Some(&json!(2024))).as_deref(), Some("2024"));
        assert_eq!(heading_text(Some(&json!(""))), None);
        assert_eq!(heading_text(Some(&json!({"x": 1}))), None);
        assert_eq!(heading_text(None), None);
    }
}
