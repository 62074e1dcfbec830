//! Persisted light/dark preference.
//!
//! The preference lives in a single parent-domain cookie so every subdomain
//! of the site shares it. Reads never fail: anything other than an exact
//! `dark` or `light` value reads as [`ThemeMode::Dark`]. Writes outside a
//! browsing context are silently dropped.

pub mod cookie;
mod memory;

pub use memory::MemoryCookieJar;

use folio_protocol::ThemeMode;

use crate::config::ThemeCookieSettings;

/// A cookie store with `document.cookie` semantics.
pub trait CookieJar {
    /// All visible cookies as a `a=1; b=2` header, or `None` when there is
    /// no browsing context to read from.
    fn cookies(&self) -> Option<String>;

    /// Store a `name=value; Attr=...` cookie string. Does nothing when there
    /// is no browsing context.
    fn set_cookie(&self, cookie: &str);
}

impl<J: CookieJar + ?Sized> CookieJar for &J {
    fn cookies(&self) -> Option<String> {
        (**self).cookies()
    }

    fn set_cookie(&self, cookie: &str) {
        (**self).set_cookie(cookie);
    }
}

/// `None` stands for a missing browsing context.
impl<J: CookieJar> CookieJar for Option<J> {
    fn cookies(&self) -> Option<String> {
        self.as_ref().and_then(CookieJar::cookies)
    }

    fn set_cookie(&self, cookie: &str) {
        if let Some(jar) = self {
            jar.set_cookie(cookie);
        }
    }
}

/// Reads and writes the theme cookie through a [`CookieJar`].
#[derive(Debug)]
pub struct ThemePreferenceStore<J> {
    jar: J,
    settings: ThemeCookieSettings,
    host: Option<String>,
}

impl<J: CookieJar> ThemePreferenceStore<J> {
    pub fn new(jar: J) -> Self {
        Self::with_settings(jar, ThemeCookieSettings::default())
    }

    pub fn with_settings(jar: J, settings: ThemeCookieSettings) -> Self {
        Self {
            jar,
            settings,
            host: None,
        }
    }

    /// Current host name, used to decide whether the `Domain` attribute applies.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn settings(&self) -> &ThemeCookieSettings {
        &self.settings
    }

    pub fn jar(&self) -> &J {
        &self.jar
    }

    pub fn read(&self) -> ThemeMode {
        let Some(header) = self.jar.cookies() else {
            tracing::debug!("no browsing context; theme defaults to dark");
            return ThemeMode::default();
        };
        let name = &self.settings.name;
        let mut values = cookie::cookie_values(&header, name).peekable();
        if values.peek().is_none() {
            return ThemeMode::default();
        }
        values.find_map(ThemeMode::parse).unwrap_or_else(|| {
            tracing::debug!("ignoring malformed theme cookie");
            ThemeMode::default()
        })
    }

    pub fn write(&self, mode: ThemeMode) {
        let cookie = self.cookie_for(mode);
        tracing::debug!(%mode, "persisting theme preference");
        self.jar.set_cookie(&cookie);
    }

    /// The exact cookie string [`write`](Self::write) stores for `mode`.
    pub fn cookie_for(&self, mode: ThemeMode) -> String {
        let domain = self.settings.domain_for_host(self.host.as_deref());
        cookie::theme_cookie(&self.settings, mode, domain)
    }
}

/// Receives the active mode whenever it changes, e.g. to toggle a `dark`
/// class on the document element.
pub trait AppearanceSink {
    fn apply(&mut self, mode: ThemeMode);
}

impl<F: FnMut(ThemeMode)> AppearanceSink for F {
    fn apply(&mut self, mode: ThemeMode) {
        self(mode);
    }
}

/// In-memory theme state backed by a [`ThemePreferenceStore`].
///
/// Construction reads the stored preference once and applies it to the sink.
/// Each change is persisted and applied synchronously.
pub struct ThemeController<J, S> {
    store: ThemePreferenceStore<J>,
    sink: S,
    mode: ThemeMode,
}

impl<J: CookieJar, S: AppearanceSink> ThemeController<J, S> {
    pub fn new(store: ThemePreferenceStore<J>, mut sink: S) -> Self {
        let mode = store.read();
        sink.apply(mode);
        Self { store, sink, mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.set(self.mode.toggled());
        self.mode
    }

    pub fn set(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.sink.apply(mode);
        self.store.write(mode);
    }

    pub fn store(&self) -> &ThemePreferenceStore<J> {
        &self.store
    }
}
