pub mod content;
pub mod payload;
pub mod series;
pub mod theme;
pub mod value;

pub use content::{LegendContent, LegendItem, LegendMarker, TooltipContent, TooltipRow};
pub use payload::{
    Indicator, LegendEntry, LegendEvent, LegendOptions, RuntimeDatum, TooltipEvent,
    TooltipOptions, VerticalAlign,
};
pub use series::{IconRef, SeriesConfig, SeriesDescriptor, ThemeColors};
pub use theme::ThemeMode;
