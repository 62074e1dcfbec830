use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default cookie name for the theme preference.
pub const THEME_COOKIE_NAME: &str = "wjjw_theme";
/// Parent domain shared by the site and its subdomains.
pub const THEME_COOKIE_DOMAIN: &str = ".williamjwhite.me";
/// One year, in seconds.
pub const THEME_COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse folio config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("theme cookie name must not be empty")]
    EmptyCookieName,
    #[error("theme cookie name contains a reserved character: {0:?}")]
    InvalidCookieName(String),
    #[error("theme cookie domain contains a reserved character: {0:?}")]
    InvalidCookieDomain(String),
    #[error("theme cookie max age must be positive")]
    ZeroMaxAge,
}

/// Site-level settings. Every field falls back to its default when omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub theme_cookie: ThemeCookieSettings,
}

impl FolioConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FolioConfig = serde_json::from_str(json)?;
        config.theme_cookie.validate()?;
        Ok(config)
    }

    /// Parse `json`, logging and falling back to defaults on any error.
    pub fn from_json_or_default(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|err| {
            tracing::warn!(%err, "invalid folio config; using defaults");
            Self::default()
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Lax => "Lax",
            Self::None => "None",
        }
    }
}

/// Attributes of the persisted theme cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeCookieSettings {
    pub name: String,
    /// Parent domain, with or without a leading dot.
    pub domain: String,
    pub max_age_secs: u64,
    pub same_site: SameSite,
    pub secure: bool,
}

impl Default for ThemeCookieSettings {
    fn default() -> Self {
        Self {
            name: THEME_COOKIE_NAME.to_string(),
            domain: THEME_COOKIE_DOMAIN.to_string(),
            max_age_secs: THEME_COOKIE_MAX_AGE_SECS,
            same_site: SameSite::Lax,
            secure: true,
        }
    }
}

impl ThemeCookieSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::EmptyCookieName);
        }
        if has_reserved_char(&self.name) {
            return Err(ConfigError::InvalidCookieName(self.name.clone()));
        }
        if has_reserved_char(&self.domain) {
            return Err(ConfigError::InvalidCookieDomain(self.domain.clone()));
        }
        if self.max_age_secs == 0 {
            return Err(ConfigError::ZeroMaxAge);
        }
        Ok(())
    }

    /// The `Domain` attribute to send from `host`, if any.
    ///
    /// With no known host the configured domain is always used. Hosts outside
    /// the parent domain (e.g. `localhost`) get no attribute, since browsers
    /// reject cookies scoped to a foreign domain.
    pub fn domain_for_host(&self, host: Option<&str>) -> Option<&str> {
        if self.domain.is_empty() {
            return None;
        }
        let Some(host) = host else {
            return Some(self.domain.as_str());
        };
        let parent = self.domain.trim_start_matches('.');
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        let parent_lower = parent.to_ascii_lowercase();
        let within = host == parent_lower
            || host
                .strip_suffix(&parent_lower)
                .is_some_and(|prefix| prefix.ends_with('.'));
        within.then_some(self.domain.as_str())
    }
}

fn has_reserved_char(s: &str) -> bool {
    s.chars()
        .any(|c| c.is_whitespace() || matches!(c, ';' | '=' | ',' | '"'))
}
