//! Light/dark theme preference.
//!
//! Precedence for the initial theme: stored choice, then the system
//! dark-mode signal, then light. The browser side lives in
//! `util::dark_mode`; this module only decides.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// `localStorage` key holding the persisted preference.
pub const STORAGE_KEY: &str = "theme";

/// Body class applied while the dark theme is active.
pub const DARK_CLASS: &str = "dark-mode";

/// Binary visual theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Persisted string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything other than the two known values is
    /// treated as absent.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Resolve the theme to apply at startup.
pub fn resolve_initial(stored: Option<&str>, system_prefers_dark: bool) -> Theme {
    match stored.and_then(Theme::parse) {
        Some(theme) => theme,
        None if system_prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Applied theme plus the value last written to storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    current: Theme,
    persisted: Option<Theme>,
}

impl ThemeState {
    /// Startup state. Nothing counts as persisted until the user toggles.
    pub fn new(initial: Theme) -> Self {
        Self { current: initial, persisted: None }
    }

    pub fn get(&self) -> Theme {
        self.current
    }

    pub fn persisted(&self) -> Option<Theme> {
        self.persisted
    }

    /// Apply `theme` and record it as the persisted choice.
    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.persisted = Some(theme);
    }

    /// Flip the applied theme and return the new value.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.flipped();
        self.set(next);
        next
    }
}
