//! `document.cookie`-style header parsing and `Set-Cookie` string building.

use folio_protocol::ThemeMode;

use crate::config::ThemeCookieSettings;

/// Values of every cookie called `name` in a `a=1; b=2` header, in order.
///
/// Browsers list host-only and domain cookies of the same name side by side,
/// so a name may appear more than once.
pub fn cookie_values<'a>(header: &'a str, name: &'a str) -> impl Iterator<Item = &'a str> {
    header.split(';').filter_map(move |pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key.trim() == name).then(|| value.trim())
    })
}

/// Value of the first cookie called `name`.
pub fn find_cookie<'a>(header: &'a str, name: &'a str) -> Option<&'a str> {
    cookie_values(header, name).next()
}

/// Build the cookie string that persists `mode`.
///
/// `domain` is the already-resolved `Domain` attribute, if any.
pub fn theme_cookie(
    settings: &ThemeCookieSettings,
    mode: ThemeMode,
    domain: Option<&str>,
) -> String {
    let mut parts = vec![
        format!("{}={}", settings.name, mode.as_str()),
        "Path=/".to_string(),
    ];
    if let Some(domain) = domain {
        parts.push(format!("Domain={domain}"));
    }
    parts.push(format!("Max-Age={}", settings.max_age_secs));
    parts.push(format!("SameSite={}", settings.same_site.as_str()));
    if settings.secure {
        parts.push("Secure".to_string());
    }
    parts.join("; ")
}
