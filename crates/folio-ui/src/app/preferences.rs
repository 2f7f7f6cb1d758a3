//! Persistence and environment helpers for the app shell.

use gloo::console;
use gloo::utils::window;
use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::core::store::{THEME_KEY, ThemeStore};
use crate::core::theme::ThemeMode;

/// `localStorage`-backed theme store. Values are stored as bare literals.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserThemeStore;

impl ThemeStore for BrowserThemeStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(THEME_KEY).ok().flatten()
    }

    fn save(&self, theme: ThemeMode) {
        let Some(storage) = local_storage() else {
            log_storage_error("set", THEME_KEY, &JsValue::from_str("storage unavailable"));
            return;
        };
        if let Err(err) = storage.set_item(THEME_KEY, theme.as_str()) {
            log_storage_error("set", THEME_KEY, &err);
        }
    }
}

/// Host color-scheme preference, when the browser reports one.
///
/// A reported light preference resolves to light; dark applies only when the host is silent.
pub(crate) fn system_theme() -> Option<ThemeMode> {
    if prefers_color_scheme("dark") {
        Some(ThemeMode::Dark)
    } else if prefers_color_scheme("light") {
        Some(ThemeMode::Light)
    } else {
        None
    }
}

fn prefers_color_scheme(scheme: &str) -> bool {
    window()
        .match_media(&format!("(prefers-color-scheme: {scheme})"))
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

fn local_storage() -> Option<Storage> {
    window().local_storage().ok().flatten()
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &JsValue) {
    console::error!("storage operation failed", operation, key, detail.clone());
}
