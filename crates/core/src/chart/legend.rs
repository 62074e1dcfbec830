use folio_protocol::{
    LegendContent, LegendEvent, LegendItem, LegendMarker, LegendOptions, SeriesConfig,
};

use super::resolve::{FieldKeys, resolve_series};

/// Resolve legend items for one render.
///
/// Entries whose marker type is `"none"` are dropped before resolution, so
/// positional fallback keys count only the entries that remain. Returns
/// `None` when nothing would be shown.
pub fn resolve_legend(
    config: &SeriesConfig,
    event: &LegendEvent,
    options: &LegendOptions,
) -> Option<LegendContent> {
    if !event.active || event.payload.is_empty() {
        return None;
    }

    let fields = FieldKeys {
        name_key: options.name_key.as_deref(),
        label_key: options.label_key.as_deref(),
    };

    let items: Vec<LegendItem> = event
        .payload
        .iter()
        .filter(|entry| !entry.is_hidden())
        .enumerate()
        .map(|(index, entry)| {
            let series = resolve_series(config, &entry.to_datum(), index, fields);
            let marker = match (&series.icon, options.hide_icon) {
                (_, true) => LegendMarker::Hidden,
                (Some(_), false) => LegendMarker::Icon,
                (None, false) => LegendMarker::Swatch,
            };
            LegendItem {
                key: format!("{}-{index}", series.key),
                label: series.label,
                color: series.color,
                icon: series.icon,
                marker,
            }
        })
        .collect();

    if items.is_empty() {
        tracing::debug!("every legend entry was hidden");
        return None;
    }

    Some(LegendContent {
        vertical_align: options.vertical_align,
        items,
    })
}
