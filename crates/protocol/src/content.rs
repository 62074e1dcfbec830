use serde::{Deserialize, Serialize};

use crate::payload::{Indicator, VerticalAlign};
use crate::series::IconRef;

/// Resolved tooltip, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipContent {
    pub heading: Option<String>,
    /// `None` when indicators are hidden.
    pub indicator: Option<Indicator>,
    pub rows: Vec<TooltipRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipRow {
    /// Stable list key, `"{series}-{index}"`.
    pub key: String,
    pub label: String,
    pub color: Option<String>,
    pub icon: Option<IconRef>,
    pub value: String,
}

/// Resolved legend, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendContent {
    pub vertical_align: VerticalAlign,
    pub items: Vec<LegendItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendItem {
    pub key: String,
    pub label: String,
    pub color: Option<String>,
    pub icon: Option<IconRef>,
    pub marker: LegendMarker,
}

/// What to draw before a legend label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendMarker {
    Icon,
    /// A color dot; uncolored when the item has no color.
    Swatch,
    Hidden,
}
