use folio_protocol::{SeriesConfig, ThemeMode};

/// Scoped CSS custom properties for one chart container.
///
/// Produces one block per theme (light first), each scoped to
/// `[data-chart="<id>"]` under the theme's selector:
///
/// ```text
/// :root [data-chart="chart-1"] {
///   --color-desktop: #111;
/// }
/// .dark [data-chart="chart-1"] {
///   --color-desktop: #eee;
/// }
/// ```
///
/// Themes with no colored series are skipped. Returns `None` when no series
/// defines any color.
pub fn chart_style(id: &str, config: &SeriesConfig) -> Option<String> {
    let blocks: Vec<String> = ThemeMode::STYLE_ORDER
        .iter()
        .filter_map(|&mode| theme_block(id, config, mode))
        .collect();

    if blocks.is_empty() {
        return None;
    }
    Some(blocks.join("\n"))
}

fn theme_block(id: &str, config: &SeriesConfig, mode: ThemeMode) -> Option<String> {
    let vars: Vec<String> = config
        .iter()
        .filter_map(|(key, descriptor)| {
            let color = descriptor.color_for(mode)?;
            Some(format!("  --color-{key}: {color};"))
        })
        .collect();

    if vars.is_empty() {
        return None;
    }
    Some(format!(
        "{} [data-chart=\"{id}\"] {{\n{}\n}}",
        mode.css_selector(),
        vars.join("\n")
    ))
}
