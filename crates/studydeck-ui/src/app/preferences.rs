//! Persisted theme preference for the app shell.

use crate::core::theme::{THEME_KEY, initial_theme};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use studydeck_tokens::Theme;

pub(crate) fn load_theme() -> Theme {
    let stored = LocalStorage::get::<String>(THEME_KEY).ok();
    initial_theme(stored.as_deref()).unwrap_or_else(|err| {
        console::warn!("ignoring stored theme preference", err.to_string());
        Theme::default()
    })
}

pub(crate) fn persist_theme(theme: Theme) {
    if let Err(err) = LocalStorage::set(THEME_KEY, theme.as_str()) {
        console::error!("storage operation failed", "set", THEME_KEY, err.to_string());
    }
}
