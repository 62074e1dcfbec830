//! Chart config adaptation: scoped color styles plus tooltip/legend content.
//!
//! Everything here is a pure function of a [`SeriesConfig`] and the engine's
//! runtime payload, so callers may recompute on every render.

pub mod format;
pub mod legend;
pub mod resolve;
pub mod style;
pub mod tooltip;

pub use legend::resolve_legend;
pub use style::chart_style;
pub use tooltip::resolve_tooltip;

use folio_protocol::{LegendEvent, LegendOptions, SeriesConfig, TooltipEvent, TooltipOptions};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart config: {0}")]
    Config(#[source] serde_json::Error),
    #[error("invalid tooltip event: {0}")]
    TooltipEvent(#[source] serde_json::Error),
    #[error("invalid legend event: {0}")]
    LegendEvent(#[source] serde_json::Error),
    #[error("invalid chart options: {0}")]
    Options(#[source] serde_json::Error),
}

pub fn parse_config(json: &str) -> Result<SeriesConfig, ChartError> {
    serde_json::from_str(json).map_err(ChartError::Config)
}

pub fn parse_tooltip_event(json: &str) -> Result<TooltipEvent, ChartError> {
    serde_json::from_str(json).map_err(ChartError::TooltipEvent)
}

pub fn parse_legend_event(json: &str) -> Result<LegendEvent, ChartError> {
    serde_json::from_str(json).map_err(ChartError::LegendEvent)
}

/// Options are optional: an empty string means defaults.
pub fn parse_tooltip_options(json: &str) -> Result<TooltipOptions, ChartError> {
    parse_options(json)
}

pub fn parse_legend_options(json: &str) -> Result<LegendOptions, ChartError> {
    parse_options(json)
}

fn parse_options<T>(json: &str) -> Result<T, ChartError>
where
    T: Default + serde::de::DeserializeOwned,
{
    if json.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(json).map_err(ChartError::Options)
}
