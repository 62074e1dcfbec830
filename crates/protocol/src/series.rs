use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::theme::ThemeMode;

/// Reference to a renderable symbol, e.g. an icon-set glyph name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(pub String);

impl IconRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Per-mode color overrides for a single series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    #[serde(default)]
    pub light: Option<String>,
    #[serde(default)]
    pub dark: Option<String>,
}

impl ThemeColors {
    pub fn get(&self, mode: ThemeMode) -> Option<&str> {
        match mode {
            ThemeMode::Light => self.light.as_deref(),
            ThemeMode::Dark => self.dark.as_deref(),
        }
    }
}

/// Display metadata for one series. Every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub icon: Option<IconRef>,
    /// Static color, used for both modes unless `theme` overrides it.
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub theme: Option<ThemeColors>,
}

impl SeriesDescriptor {
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_theme(mut self, light: impl Into<String>, dark: impl Into<String>) -> Self {
        self.theme = Some(ThemeColors {
            light: Some(light.into()),
            dark: Some(dark.into()),
        });
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(IconRef::new(icon));
        self
    }

    /// Color for `mode`: the theme-specific entry, else the static color.
    /// Empty strings count as unset.
    pub fn color_for(&self, mode: ThemeMode) -> Option<&str> {
        self.theme
            .as_ref()
            .and_then(|t| t.get(mode))
            .filter(|c| !c.is_empty())
            .or_else(|| self.static_color())
    }

    pub fn static_color(&self) -> Option<&str> {
        self.color.as_deref().filter(|c| !c.is_empty())
    }
}

/// Declarative mapping from series key to its display metadata.
///
/// Keys iterate in sorted order so anything derived from the config is
/// deterministic regardless of how the map was built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesConfig(BTreeMap<String, SeriesDescriptor>);

impl SeriesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a descriptor, returning `self` for chaining.
    pub fn with(mut self, key: impl Into<String>, descriptor: SeriesDescriptor) -> Self {
        self.0.insert(key.into(), descriptor);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, descriptor: SeriesDescriptor) {
        self.0.insert(key.into(), descriptor);
    }

    pub fn get(&self, key: &str) -> Option<&SeriesDescriptor> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SeriesDescriptor)> {
        self.0.iter().map(|(k, d)| (k.as_str(), d))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, SeriesDescriptor)> for SeriesConfig {
    fn from_iter<I: IntoIterator<Item = (String, SeriesDescriptor)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
