//! Persistence and environment helpers for the app shell.

use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use serde::Serialize;

pub(crate) const LOCALE_KEY: &str = "meshscope.locale";
pub(crate) const API_BASE_KEY: &str = "meshscope.api_base";

pub(crate) fn load_locale() -> LocaleCode {
    if let Ok(value) = LocalStorage::get::<String>(LOCALE_KEY)
        && let Some(locale) = LocaleCode::from_lang_tag(&value)
    {
        return locale;
    }
    if let Some(nav) = window().navigator().language()
        && let Some(locale) = LocaleCode::from_lang_tag(&nav)
    {
        return locale;
    }
    DEFAULT_LOCALE
}

pub(crate) fn persist_locale(locale: LocaleCode) {
    set_storage(LOCALE_KEY, locale.code());
}

/// Base URL for API calls: a stored override for development, else the page origin.
pub(crate) fn api_base_url() -> String {
    if let Ok(value) = LocalStorage::get::<String>(API_BASE_KEY) {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    window()
        .location()
        .origin()
        .unwrap_or_else(|_| "http://localhost:20001".to_string())
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
