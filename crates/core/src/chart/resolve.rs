//! The shared series resolution chain used by tooltips and legends.
//!
//! 1. identity: `payload[name_key]`, data key, display name, `item-{index}`
//! 2. label: config label, `payload[label_key]`, display name, identity
//! 3. color: config color, engine color, `var(--color-{data_key})`, none
//! 4. icon: config icon, none

use folio_protocol::{IconRef, RuntimeDatum, SeriesConfig};

/// Display metadata resolved for one runtime datum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSeries {
    pub key: String,
    pub label: String,
    pub color: Option<String>,
    pub icon: Option<IconRef>,
}

/// Payload fields that stand in for the series identity and label.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldKeys<'a> {
    pub name_key: Option<&'a str>,
    pub label_key: Option<&'a str>,
}

pub fn resolve_series(
    config: &SeriesConfig,
    datum: &RuntimeDatum,
    index: usize,
    fields: FieldKeys<'_>,
) -> ResolvedSeries {
    let name = non_empty(datum.name.as_deref());
    let data_key = non_empty(datum.data_key.as_deref());

    let key = fields
        .name_key
        .and_then(|field| datum.payload_text(field))
        .or_else(|| data_key.map(str::to_string))
        .or_else(|| name.map(str::to_string))
        .unwrap_or_else(|| format!("item-{index}"));

    let descriptor = config.get(&key);

    let label = descriptor
        .and_then(|d| non_empty(d.label.as_deref()))
        .map(str::to_string)
        .or_else(|| fields.label_key.and_then(|field| datum.payload_text(field)))
        .or_else(|| name.map(str::to_string))
        .unwrap_or_else(|| key.clone());

    let color = descriptor
        .and_then(|d| d.static_color())
        .or_else(|| non_empty(datum.color.as_deref()))
        .map(str::to_string)
        .or_else(|| data_key.map(css_color_var));

    let icon = descriptor.and_then(|d| d.icon.clone());

    ResolvedSeries {
        key,
        label,
        color,
        icon,
    }
}

/// CSS reference to the custom property emitted for `series_key`.
pub fn css_color_var(series_key: &str) -> String {
    format!("var(--color-{series_key})")
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_protocol::SeriesDescriptor;
    use serde_json::json;

    fn datum(value: serde_json::Value) -> RuntimeDatum {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn name_only_resolves_to_itself() {
        let resolved = resolve_series(
            &SeriesConfig::new(),
            &RuntimeDatum::named("Revenue"),
            0,
            FieldKeys::default(),
        );
        assert_eq!(resolved.key, "Revenue");
        assert_eq!(resolved.label, "Revenue");
        assert_eq!(resolved.color, None);
        assert_eq!(resolved.icon, None);
    }

    #[test]
    fn anonymous_datum_uses_position() {
        let resolved = resolve_series(
            &SeriesConfig::new(),
            &RuntimeDatum::default(),
            3,
            FieldKeys::default(),
        );
        assert_eq!(resolved.key, "item-3");
        assert_eq!(resolved.label, "item-3");
    }

    #[test]
    fn data_key_beats_name_for_identity() {
        let config = SeriesConfig::new().with("desktop", SeriesDescriptor::labeled("Desktop"));
        let d = datum(json!({ "name": "Something else", "dataKey": "desktop" }));
        let resolved = resolve_series(&config, &d, 0, FieldKeys::default());
        assert_eq!(resolved.key, "desktop");
        assert_eq!(resolved.label, "Desktop");
        assert_eq!(resolved.color.as_deref(), Some("var(--color-desktop)"));
    }

    #[test]
    fn name_key_reads_from_payload() {
        let config = SeriesConfig::new().with(
            "chrome",
            SeriesDescriptor::labeled("Chrome")
                .with_color("#f00")
                .with_icon("chrome"),
        );
        let d = datum(json!({
            "dataKey": "visitors",
            "color": "#00f",
            "payload": { "browser": "chrome", "visitors": 275 }
        }));
        let fields = FieldKeys {
            name_key: Some("browser"),
            label_key: None,
        };
        let resolved = resolve_series(&config, &d, 0, fields);
        assert_eq!(resolved.key, "chrome");
        assert_eq!(resolved.label, "Chrome");
        assert_eq!(resolved.color.as_deref(), Some("#f00"));
        assert_eq!(resolved.icon, Some(IconRef::new("chrome")));
    }

    #[test]
    fn missing_name_key_field_falls_through() {
        let d = datum(json!({ "dataKey": "visitors", "payload": {} }));
        let fields = FieldKeys {
            name_key: Some("browser"),
            label_key: None,
        };
        let resolved = resolve_series(&SeriesConfig::new(), &d, 0, fields);
        assert_eq!(resolved.key, "visitors");
    }

    #[test]
    fn label_key_used_when_config_has_no_label() {
        let config = SeriesConfig::new().with("visitors", SeriesDescriptor::default());
        let d = datum(json!({
            "name": "visitors",
            "dataKey": "visitors",
            "payload": { "title": "Monthly visitors" }
        }));
        let fields = FieldKeys {
            name_key: None,
            label_key: Some("title"),
        };
        let resolved = resolve_series(&config, &d, 0, fields);
        assert_eq!(resolved.label, "Monthly visitors");
    }

    #[test]
    fn empty_config_label_counts_as_missing() {
        let config = SeriesConfig::new().with("desktop", SeriesDescriptor::labeled(""));
        let d = datum(json!({ "name": "Desktop visits", "dataKey": "desktop" }));
        let resolved = resolve_series(&config, &d, 0, FieldKeys::default());
        assert_eq!(resolved.label, "Desktop visits");
    }

    #[test]
    fn theme_only_descriptor_defers_to_engine_color() {
        let config = SeriesConfig::new().with(
            "mobile",
            SeriesDescriptor::default().with_theme("#111", "#eee"),
        );
        let d = datum(json!({ "dataKey": "mobile", "color": "hsl(220 70% 50%)" }));
        let resolved = resolve_series(&config, &d, 0, FieldKeys::default());
        assert_eq!(resolved.color.as_deref(), Some("hsl(220 70% 50%)"));
    }

    #[test]
    fn no_data_key_and_no_color_means_no_swatch() {
        let resolved = resolve_series(
            &SeriesConfig::new(),
            &RuntimeDatum::named("Revenue"),
            0,
            FieldKeys::default(),
        );
        assert_eq!(resolved.color, None);
    }
}
