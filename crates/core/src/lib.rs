pub mod chart;
pub mod config;
pub mod preference;

pub use chart::{ChartError, chart_style, resolve_legend, resolve_tooltip};
pub use config::{ConfigError, FolioConfig, SameSite, ThemeCookieSettings};
pub use preference::{
    AppearanceSink, CookieJar, MemoryCookieJar, ThemeController, ThemePreferenceStore,
};
