use folio_protocol::{SeriesConfig, TooltipContent, TooltipEvent, TooltipOptions, TooltipRow};

use super::format::{format_value, heading_text};
use super::resolve::{FieldKeys, resolve_series};

/// Resolve the tooltip for one hover/focus event.
///
/// Returns `None` when the event is inactive or carries no series, so the
/// caller renders nothing at all. Rows keep the engine's order.
pub fn resolve_tooltip(
    config: &SeriesConfig,
    event: &TooltipEvent,
    options: &TooltipOptions,
) -> Option<TooltipContent> {
    if !event.active || event.payload.is_empty() {
        return None;
    }

    let fields = FieldKeys {
        name_key: options.name_key.as_deref(),
        label_key: options.label_key.as_deref(),
    };

    let rows = event
        .payload
        .iter()
        .enumerate()
        .map(|(index, datum)| {
            let series = resolve_series(config, datum, index, fields);
            TooltipRow {
                key: format!("{}-{index}", series.key),
                label: series.label,
                color: series.color,
                icon: series.icon,
                value: format_value(datum.value.as_ref()),
            }
        })
        .collect();

    let heading = if options.hide_label {
        None
    } else {
        heading_text(event.label.as_ref())
    };

    Some(TooltipContent {
        heading,
        indicator: (!options.hide_indicator).then_some(options.indicator),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_protocol::{Indicator, RuntimeDatum, SeriesDescriptor};
    use serde_json::json;

    fn event(value: serde_json::Value) -> TooltipEvent {
        serde_json::from_value(value).unwrap()
    }

    fn sample_config() -> SeriesConfig {
        SeriesConfig::new()
            .with("desktop", SeriesDescriptor::labeled("Desktop").with_theme("#111", "#eee"))
            .with("mobile", SeriesDescriptor::labeled("Mobile").with_color("#60a5fa"))
    }

    #[test]
    fn inactive_event_renders_nothing() {
        let ev = event(json!({
            "active": false,
            "payload": [{ "dataKey": "desktop", "value": 186 }],
            "label": "January"
        }));
        assert_eq!(resolve_tooltip(&sample_config(), &ev, &TooltipOptions::default()), None);
    }

    #[test]
    fn empty_payload_renders_nothing() {
        let ev = event(json!({ "active": true, "payload": [] }));
        assert_eq!(resolve_tooltip(&sample_config(), &ev, &TooltipOptions::default()), None);
    }

    #[test]
    fn rows_follow_payload_order() {
        let ev = event(json!({
            "active": true,
            "label": "January",
            "payload": [
                { "dataKey": "mobile", "name": "mobile", "value": 80, "color": "var(--color-mobile)" },
                { "dataKey": "desktop", "name": "desktop", "value": 186, "color": "var(--color-desktop)" }
            ]
        }));
        let content = resolve_tooltip(&sample_config(), &ev, &TooltipOptions::default()).unwrap();
        assert_eq!(content.heading.as_deref(), Some("January"));
        assert_eq!(content.indicator, Some(Indicator::Dot));

        let labels: Vec<&str> = content.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["Mobile", "Desktop"]);
        assert_eq!(content.rows[0].key, "mobile-0");
        assert_eq!(content.rows[0].color.as_deref(), Some("#60a5fa"));
        assert_eq!(content.rows[1].key, "desktop-1");
        assert_eq!(content.rows[1].color.as_deref(), Some("var(--color-desktop)"));
        assert_eq!(content.rows[1].value, "186");
    }

    #[test]
    fn null_and_zero_values_format_differently() {
        let ev = TooltipEvent {
            active: true,
            payload: vec![
                RuntimeDatum {
                    value: Some(json!(null)),
                    ..RuntimeDatum::named("a")
                },
                RuntimeDatum {
                    value: Some(json!(0)),
                    ..RuntimeDatum::named("b")
                },
            ],
            label: None,
        };
        let content =
            resolve_tooltip(&SeriesConfig::new(), &ev, &TooltipOptions::default()).unwrap();
        assert_eq!(content.rows[0].value, "—");
        assert_eq!(content.rows[1].value, "0");
        assert_eq!(content.heading, None);
    }

    #[test]
    fn hide_flags_suppress_heading_and_indicator() {
        let ev = event(json!({
            "active": true,
            "label": "January",
            "payload": [{ "dataKey": "desktop", "value": 1 }]
        }));
        let options = TooltipOptions {
            hide_label: true,
            hide_indicator: true,
            ..TooltipOptions::default()
        };
        let content = resolve_tooltip(&sample_config(), &ev, &options).unwrap();
        assert_eq!(content.heading, None);
        assert_eq!(content.indicator, None);
        assert_eq!(content.rows.len(), 1);
    }

    #[test]
    fn numeric_label_becomes_heading() {
        let ev = event(json!({
            "active": true,
            "label": 2024,
            "payload": [{ "name": "Revenue", "value": 12.5 }]
        }));
        let content =
            resolve_tooltip(&SeriesConfig::new(), &ev, &TooltipOptions::default()).unwrap();
        assert_eq!(content.heading.as_deref(), Some("2024"));
        assert_eq!(content.rows[0].label, "Revenue");
        assert_eq!(content.rows[0].value, "12.5");
    }
}
