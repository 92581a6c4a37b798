//! Light/dark theme toggle backed by a persisted preference.

pub mod preferences;

pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};

use std::env;
use std::fmt;

use log::{debug, error, info, warn};

pub const THEME_PREFERENCE_KEY: &str = "theme";

const DARK_THEME_ICON: &str = "☀️";
const LIGHT_THEME_ICON: &str = "🌙";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph on the toggle button; it shows the theme a click switches to.
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Dark => DARK_THEME_ICON,
            Theme::Light => LIGHT_THEME_ICON,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of the OS-level colour-scheme preference.
pub trait SystemThemeDetector {
    fn preferred_theme(&self) -> Theme;
}

/// Reads `GTK_THEME`; a value containing "dark" means dark, anything else light.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvThemeDetector;

impl SystemThemeDetector for EnvThemeDetector {
    fn preferred_theme(&self) -> Theme {
        match env::var("GTK_THEME") {
            Ok(gtk_theme) if gtk_theme.to_lowercase().contains("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

/// Detector with a fixed answer.
#[derive(Debug, Clone, Copy)]
pub struct FixedThemeDetector(pub Theme);

impl SystemThemeDetector for FixedThemeDetector {
    fn preferred_theme(&self) -> Theme {
        self.0
    }
}

pub struct ThemeToggle<S: PreferenceStore> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeToggle<S> {
    /// Stored preference if valid, otherwise the system preference.
    pub fn load(store: S, detector: &dyn SystemThemeDetector) -> Self {
        let theme = match store.get(THEME_PREFERENCE_KEY) {
            Some(value) => match Theme::parse(&value) {
                Some(theme) => {
                    debug!("Using stored theme: {theme}");
                    theme
                }
                None => {
                    warn!("Ignoring invalid stored theme {value:?}");
                    detector.preferred_theme()
                }
            },
            None => {
                let theme = detector.preferred_theme();
                debug!("No stored theme, using system preference: {theme}");
                theme
            }
        };

        Self { store, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn icon(&self) -> &'static str {
        self.theme.icon()
    }

    /// Flip the theme and persist it.
    ///
    /// The in-memory theme changes even if persisting fails; the failure is
    /// logged and the next toggle retries the write.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();

        match self.store.set(THEME_PREFERENCE_KEY, self.theme.as_str()) {
            Ok(()) => info!("Theme switched to {}", self.theme),
            Err(e) => error!("Theme switched to {} but not persisted: {}", self.theme, e),
        }

        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
