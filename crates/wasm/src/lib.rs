mod dom;

use std::sync::{Mutex, PoisonError};

use folio_core::chart;
use folio_core::{FolioConfig, ThemeController, ThemePreferenceStore};
use folio_protocol::ThemeMode;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::dom::{DocumentClassSink, DocumentCookieJar};

static CONFIG: Mutex<Option<FolioConfig>> = Mutex::new(None);

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Replace the site config (JSON). Unset fields keep their defaults.
#[wasm_bindgen]
pub fn configure(config_json: &str) -> Result<(), JsError> {
    let config = FolioConfig::from_json(config_json).map_err(js_error)?;
    *CONFIG.lock().unwrap_or_else(PoisonError::into_inner) = Some(config);
    Ok(())
}

fn store() -> ThemePreferenceStore<Option<DocumentCookieJar>> {
    let settings = CONFIG
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .unwrap_or_default()
        .theme_cookie;
    let store = ThemePreferenceStore::with_settings(DocumentCookieJar::current(), settings);
    match dom::current_host() {
        Some(host) => store.with_host(host),
        None => store,
    }
}

fn parse_mode(mode: &str) -> Result<ThemeMode, JsError> {
    ThemeMode::parse(mode)
        .ok_or_else(|| JsError::new(&format!("unknown theme mode: {mode}")))
}

/// Stored theme, `"dark"` or `"light"`.
#[wasm_bindgen]
pub fn read_theme() -> String {
    store().read().as_str().to_string()
}

/// Persist `mode` without touching the document.
#[wasm_bindgen]
pub fn write_theme(mode: &str) -> Result<(), JsError> {
    store().write(parse_mode(mode)?);
    Ok(())
}

/// Apply `mode` to `<html>` and persist it.
#[wasm_bindgen]
pub fn apply_theme(mode: &str) -> Result<(), JsError> {
    let mode = parse_mode(mode)?;
    ThemeController::new(store(), DocumentClassSink).set(mode);
    Ok(())
}

/// Flip the stored theme, apply it and return the new mode.
#[wasm_bindgen]
pub fn toggle_theme() -> String {
    ThemeController::new(store(), DocumentClassSink)
        .toggle()
        .as_str()
        .to_string()
}

/// Inline style text for a chart container, or `undefined` if no series is colored.
#[wasm_bindgen]
pub fn chart_style(id: &str, config_json: &str) -> Result<Option<String>, JsError> {
    let config = chart::parse_config(config_json).map_err(js_error)?;
    Ok(chart::chart_style(id, &config))
}

/// Resolved tooltip content as JSON, or `undefined` when nothing should render.
#[wasm_bindgen]
pub fn tooltip_content(
    config_json: &str,
    event_json: &str,
    options_json: &str,
) -> Result<Option<String>, JsError> {
    let config = chart::parse_config(config_json).map_err(js_error)?;
    let event = chart::parse_tooltip_event(event_json).map_err(js_error)?;
    let options = chart::parse_tooltip_options(options_json).map_err(js_error)?;
    chart::resolve_tooltip(&config, &event, &options)
        .map(|content| to_json(&content))
        .transpose()
}

/// Resolved legend content as JSON, or `undefined` when nothing should render.
#[wasm_bindgen]
pub fn legend_content(
    config_json: &str,
    event_json: &str,
    options_json: &str,
) -> Result<Option<String>, JsError> {
    let config = chart::parse_config(config_json).map_err(js_error)?;
    let event = chart::parse_legend_event(event_json).map_err(js_error)?;
    let options = chart::parse_legend_options(options_json).map_err(js_error)?;
    chart::resolve_legend(&config, &event, &options)
        .map(|content| to_json(&content))
        .transpose()
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(js_error)
}

fn js_error(err: impl std::fmt::Display) -> JsError {
    JsError::new(&err.to_string())
}
