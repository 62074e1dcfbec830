use std::cell::RefCell;
use std::collections::BTreeMap;

use super::CookieJar;

/// In-memory cookie jar with browser overwrite-by-name semantics.
///
/// Attributes other than `Max-Age` are accepted and ignored; a non-positive
/// `Max-Age` removes the cookie, as a browser would.
#[derive(Debug, Default)]
pub struct MemoryCookieJar {
    cookies: RefCell<BTreeMap<String, String>>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jar pre-populated from a `a=1; b=2` header.
    pub fn from_header(header: &str) -> Self {
        let jar = Self::new();
        for pair in header.split(';') {
            if let Some((name, value)) = pair.trim().split_once('=') {
                jar.cookies
                    .borrow_mut()
                    .insert(name.trim().to_string(), value.trim().to_string());
            }
        }
        jar
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.cookies.borrow().get(name).cloned()
    }
}

impl CookieJar for MemoryCookieJar {
    fn cookies(&self) -> Option<String> {
        let cookies = self.cookies.borrow();
        Some(
            cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    fn set_cookie(&self, cookie: &str) {
        let mut parts = cookie.split(';');
        let Some((name, value)) = parts.next().and_then(|p| p.trim().split_once('=')) else {
            tracing::debug!(cookie, "ignoring cookie without a name=value pair");
            return;
        };
        let expired = parts.any(|attr| {
            attr.trim()
                .split_once('=')
                .filter(|(key, _)| key.trim().eq_ignore_ascii_case("max-age"))
                .and_then(|(_, secs)| secs.trim().parse::<i64>().ok())
                .is_some_and(|secs| secs <= 0)
        });
        let mut cookies = self.cookies.borrow_mut();
        if expired {
            cookies.remove(name.trim());
        } else {
            cookies.insert(name.trim().to_string(), value.trim().to_string());
        }
    }
}
