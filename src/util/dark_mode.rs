//! Dark mode initialization and toggle.
//!
//! Reads the stored preference from `localStorage`, falls back to the
//! `prefers-color-scheme` media query, and applies the `dark-mode` class on
//! `<body>`. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: storage failures are swallowed and the theme
//! still applies for the current page.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::{self, Theme};
#[cfg(feature = "csr")]
use crate::state::theme::{DARK_CLASS, STORAGE_KEY};

/// Resolve the startup theme from storage and the system preference.
pub fn read_preference() -> Theme {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::default();
        };

        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());

        let system_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());

        theme::resolve_initial(stored.as_deref(), system_dark)
    }
    #[cfg(not(feature = "csr"))]
    {
        theme::resolve_initial(None, false)
    }
}

/// Apply the `dark-mode` class on `<body>` for `theme`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            log::debug!("no <body>; theme not applied");
            return;
        };
        let _ = body.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Write `theme` to `localStorage`.
pub fn persist(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Apply and persist `theme` in one step, as an explicit user choice does.
pub fn commit(theme: Theme) {
    apply(theme);
    persist(theme);
    #[cfg(feature = "csr")]
    log::debug!("theme set to {}", theme.as_str());
}
