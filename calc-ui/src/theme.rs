//! Light/dark theme selection and persistence.

use std::fmt;

use tracing::{debug, warn};

use crate::prefs::{KeyValueStore, StoreError};

/// Key under which the theme is stored.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Self::Light => Palette {
                primary: "\x1b[34m",
                secondary: "\x1b[33m",
                muted: "\x1b[90m",
            },
            Self::Dark => Palette {
                primary: "\x1b[96m",
                secondary: "\x1b[95m",
                muted: "\x1b[37m",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ANSI colour codes used when drawing charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub muted: &'static str,
}

impl Palette {
    pub const RESET: &'static str = "\x1b[0m";
}

/// Owns the current theme and keeps it in sync with a store.
#[derive(Debug)]
pub struct ThemeManager<S: KeyValueStore> {
    store: S,
    current: Theme,
}

impl<S: KeyValueStore> ThemeManager<S> {
    /// Reads the saved theme from `store`.
    ///
    /// A missing, unreadable or unrecognised value falls back to
    /// [`Theme::Light`]; the store is left untouched until the theme changes.
    pub fn load(store: S) -> Self {
        let current = match store.get(THEME_KEY) {
            Ok(Some(value)) => Theme::parse(&value).unwrap_or_else(|| {
                warn!(%value, "unknown saved theme, using default");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(error) => {
                warn!(%error, "cannot read saved theme, using default");
                Theme::default()
            }
        };
        debug!(theme = %current, "loaded theme");
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Switches to `theme` and saves it.
    pub fn set(
        &mut self,
        theme: Theme,
    ) -> Result<Theme, StoreError> {
        self.store.set(THEME_KEY, theme.as_str())?;
        self.current = theme;
        debug!(theme = %theme, "saved theme");
        Ok(theme)
    }

    /// Flips between light and dark and saves the result.
    pub fn toggle(&mut self) -> Result<Theme, StoreError> {
        self.set(self.current.toggled())
    }
}
