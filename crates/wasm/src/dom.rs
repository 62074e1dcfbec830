use folio_core::{AppearanceSink, CookieJar};
use folio_protocol::ThemeMode;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// `document.cookie` of the current page.
pub struct DocumentCookieJar {
    document: HtmlDocument,
}

impl DocumentCookieJar {
    /// `None` outside a browsing context (workers, prerendering).
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        document
            .dyn_into::<HtmlDocument>()
            .ok()
            .map(|document| Self { document })
    }
}

impl CookieJar for DocumentCookieJar {
    fn cookies(&self) -> Option<String> {
        self.document.cookie().ok()
    }

    fn set_cookie(&self, cookie: &str) {
        if let Err(err) = self.document.set_cookie(cookie) {
            warn(&format!("failed to set theme cookie: {err:?}"));
        }
    }
}

/// Toggles the `dark` class on `<html>`.
pub struct DocumentClassSink;

impl AppearanceSink for DocumentClassSink {
    fn apply(&mut self, mode: ThemeMode) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        if let Err(err) = classes.toggle_with_force("dark", mode.is_dark()) {
            warn(&format!("failed to toggle dark class: {err:?}"));
        }
    }
}

/// Host name of the current page, if any.
pub fn current_host() -> Option<String> {
    web_sys::window()?.location().hostname().ok()
}

/// Log a warning to the browser console.
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}
