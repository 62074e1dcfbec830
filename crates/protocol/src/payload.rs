use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value::{deserialize_truthy_text, truthy_text};

/// One series entry emitted by the charting engine for a render/hover event.
///
/// `name` and `data_key` accept strings or numbers; falsy inputs
/// (`""`, `0`, `null`) deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeDatum {
    #[serde(default, deserialize_with = "deserialize_truthy_text")]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default, deserialize_with = "deserialize_truthy_text")]
    pub data_key: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    /// The raw data row the entry was plotted from.
    #[serde(default)]
    pub payload: Option<Value>,
}

impl RuntimeDatum {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Truthy text of `payload[field]`, if the payload is an object.
    pub fn payload_text(&self, field: &str) -> Option<String> {
        self.payload.as_ref()?.get(field).and_then(truthy_text)
    }
}

/// One legend entry emitted by the charting engine.
///
/// Unlike tooltip entries, a legend entry's `value` is the series name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default, deserialize_with = "deserialize_truthy_text")]
    pub data_key: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub payload: Option<Value>,
}

impl LegendEntry {
    /// Entries drawn with no marker type are not listed.
    pub fn is_hidden(&self) -> bool {
        self.kind.as_deref() == Some("none")
    }

    /// View this entry as a runtime datum, moving `value` into `name`.
    pub fn to_datum(&self) -> RuntimeDatum {
        let name = match &self.value {
            Some(v @ (Value::String(_) | Value::Number(_))) => truthy_text(v),
            _ => None,
        };
        RuntimeDatum {
            name,
            value: None,
            data_key: self.data_key.clone(),
            color: self.color.clone(),
            payload: self.payload.clone(),
        }
    }
}

/// Tooltip state for one hover/focus event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipEvent {
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub payload: Vec<RuntimeDatum>,
    /// Heading candidate, usually the hovered category (e.g. a month).
    #[serde(default)]
    pub label: Option<Value>,
}

/// Legend state for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEvent {
    #[serde(default = "legend_active_default")]
    pub active: bool,
    #[serde(default)]
    pub payload: Vec<LegendEntry>,
}

fn legend_active_default() -> bool {
    true
}

impl Default for LegendEvent {
    fn default() -> Self {
        Self {
            active: true,
            payload: Vec::new(),
        }
    }
}

/// Shape of the color marker drawn beside each tooltip row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    #[default]
    Dot,
    Line,
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Middle,
    #[default]
    Bottom,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipOptions {
    pub hide_label: bool,
    pub hide_indicator: bool,
    pub indicator: Indicator,
    /// Payload field whose value identifies the series.
    pub name_key: Option<String>,
    /// Payload field whose value labels the series.
    pub label_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LegendOptions {
    pub hide_icon: bool,
    pub name_key: Option<String>,
    pub label_key: Option<String>,
    pub vertical_align: VerticalAlign,
}
