// Unit tests for the theme toggle and preference stores

use crate::error::PreferenceError;
use crate::theme::{
    EnvThemeDetector, FilePreferenceStore, FixedThemeDetector, MemoryPreferenceStore,
    PreferenceStore, SystemThemeDetector, THEME_PREFERENCE_KEY, Theme, ThemeToggle,
};

use common::ErrorLocation;

use std::panic::Location;

use serial_test::serial;
use tempfile::TempDir;

struct ReadOnlyStore;

impl PreferenceStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
        Err(PreferenceError::Write {
            location: ErrorLocation::from(Location::caller()),
            path: "/read-only/preferences.json".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        })
    }
}

#[test]
fn given_stored_theme_when_loading_then_stored_value_wins_over_system() {
    let store = MemoryPreferenceStore::with_value(THEME_PREFERENCE_KEY, "dark");

    let toggle = ThemeToggle::load(store, &FixedThemeDetector(Theme::Light));

    assert_eq!(toggle.theme(), Theme::Dark);
    assert_eq!(toggle.icon(), "☀️");
}

#[test]
fn given_no_stored_theme_when_loading_then_system_preference_used() {
    let toggle = ThemeToggle::load(
        MemoryPreferenceStore::default(),
        &FixedThemeDetector(Theme::Dark),
    );

    assert_eq!(toggle.theme(), Theme::Dark);
}

/// **VALUE**: Verifies a garbage stored value is ignored.
///
/// **BUG THIS CATCHES**: Would catch treating any non-"dark" value as light
/// when the system prefers dark.
#[test]
fn given_invalid_stored_theme_when_loading_then_system_preference_used() {
    let store = MemoryPreferenceStore::with_value(THEME_PREFERENCE_KEY, "sepia");

    let toggle = ThemeToggle::load(store, &FixedThemeDetector(Theme::Dark));

    assert_eq!(toggle.theme(), Theme::Dark);
}

/// **VALUE**: Verifies toggling twice restores the stored value and glyph.
///
/// **WHY THIS MATTERS**: The toggle is an involution; any drift means the
/// persisted value and the button disagree.
#[test]
fn given_light_theme_when_toggled_twice_then_original_value_and_glyph_restored() {
    // GIVEN: Light stored
    let store = MemoryPreferenceStore::with_value(THEME_PREFERENCE_KEY, "light");
    let mut toggle = ThemeToggle::load(store, &FixedThemeDetector(Theme::Dark));
    assert_eq!(toggle.icon(), "🌙");

    // WHEN: Toggled once
    assert_eq!(toggle.toggle(), Theme::Dark);

    // THEN: Dark persisted, sun glyph offered
    assert_eq!(
        toggle.store().get(THEME_PREFERENCE_KEY).as_deref(),
        Some("dark")
    );
    assert_eq!(toggle.icon(), "☀️");

    // WHEN: Toggled again
    assert_eq!(toggle.toggle(), Theme::Light);

    // THEN: Original value and glyph
    assert_eq!(
        toggle.store().get(THEME_PREFERENCE_KEY).as_deref(),
        Some("light")
    );
    assert_eq!(toggle.icon(), "🌙");
}

#[test]
fn given_store_that_fails_when_toggled_then_theme_still_changes() {
    let mut toggle = ThemeToggle::load(ReadOnlyStore, &FixedThemeDetector(Theme::Light));

    assert_eq!(toggle.toggle(), Theme::Dark);
    assert_eq!(toggle.theme(), Theme::Dark);
}

#[test]
fn given_theme_names_when_parsed_then_only_known_values_accepted() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

/// **VALUE**: Verifies the file store survives a reopen.
///
/// **WHY THIS MATTERS**: The theme is the one piece of state that must persist
/// across runs.
#[test]
fn given_file_store_when_value_set_then_visible_after_reopen() {
    // GIVEN: A store in a fresh directory (parent not yet created)
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("preferences.json");
    let mut store = FilePreferenceStore::open(&path).unwrap();
    assert_eq!(store.get(THEME_PREFERENCE_KEY), None);

    // WHEN: Setting the theme and reopening
    store.set(THEME_PREFERENCE_KEY, "dark").unwrap();
    let reopened = FilePreferenceStore::open(&path).unwrap();

    // THEN: Value persisted, no temp file left behind
    assert_eq!(reopened.get(THEME_PREFERENCE_KEY).as_deref(), Some("dark"));
    assert_eq!(reopened.path(), path.as_path());
    assert!(!dir.path().join("nested").join("preferences.json.tmp").exists());
}

#[test]
fn given_corrupt_preferences_file_when_opening_then_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let result = FilePreferenceStore::open(&path);

    assert!(matches!(result, Err(PreferenceError::Parse { .. })));
}

#[test]
fn given_file_store_when_toggling_then_file_updated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.json");
    let store = FilePreferenceStore::open(&path).unwrap();
    let mut toggle = ThemeToggle::load(store, &FixedThemeDetector(Theme::Light));

    toggle.toggle();

    let contents = std::fs::read_to_string(&path).unwrap();
    let values: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(values["theme"], "dark");
}

#[test]
#[serial]
fn given_gtk_theme_env_var_when_detecting_then_dark_variant_recognised() {
    unsafe { std::env::set_var("GTK_THEME", "Adwaita:dark") };
    let dark = EnvThemeDetector.preferred_theme();

    unsafe { std::env::set_var("GTK_THEME", "Adwaita") };
    let light = EnvThemeDetector.preferred_theme();

    unsafe { std::env::remove_var("GTK_THEME") };
    let unset = EnvThemeDetector.preferred_theme();

    assert_eq!(dark, Theme::Dark);
    assert_eq!(light, Theme::Light);
    assert_eq!(unset, Theme::Light);
}
