use serde::{Deserialize, Serialize};

/// The two appearance modes a visitor can pick.
///
/// Serialized as its lowercase literal, which is also the persisted cookie
/// value. `Dark` is the default for first-time visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Order in which per-theme style blocks are emitted.
    pub const STYLE_ORDER: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Exact match on the literal token; anything else is `None`.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Selector that scopes chart custom properties for this mode.
    ///
    /// Light styles hang off `:root`; dark styles only apply once the
    /// document element carries the `dark` class.
    pub fn css_selector(self) -> &'static str {
        match self {
            Self::Light => ":root",
            Self::Dark => ".dark",
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
