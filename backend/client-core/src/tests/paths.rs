// Unit tests for config directory detection

use crate::PASSGEN_APP_NAME;
use crate::paths::{CONFIG_DIR_ENV_VAR, PathSource, detect_passgen_paths};

use std::path::PathBuf;

use serial_test::serial;

/// **VALUE**: Verifies the explicit override wins over platform detection.
///
/// **WHY THIS MATTERS**: Tests and portable installs point the client at a
/// specific directory; the platform default must not shadow that.
#[test]
#[serial]
fn given_config_dir_env_var_when_detecting_then_override_used() {
    // GIVEN: The override is set
    unsafe { std::env::set_var(CONFIG_DIR_ENV_VAR, "/tmp/passgen-override") };

    // WHEN: Detecting paths
    let result = detect_passgen_paths();
    unsafe { std::env::remove_var(CONFIG_DIR_ENV_VAR) };

    // THEN: Override is used verbatim
    let paths = result.unwrap();
    assert_eq!(paths.source, PathSource::EnvVar);
    assert_eq!(paths.config_dir, PathBuf::from("/tmp/passgen-override"));
    assert_eq!(
        paths.preferences_file(),
        PathBuf::from("/tmp/passgen-override/preferences.json")
    );
}

#[test]
#[serial]
fn given_no_override_when_detecting_then_directory_named_after_app() {
    unsafe { std::env::remove_var(CONFIG_DIR_ENV_VAR) };

    let Ok(paths) = detect_passgen_paths() else {
        // Neither a platform config dir nor HOME on this machine.
        return;
    };

    assert_ne!(paths.source, PathSource::EnvVar);
    assert!(paths.config_dir.ends_with(PASSGEN_APP_NAME));
}

#[test]
fn given_path_source_when_displayed_then_names_origin() {
    assert_eq!(PathSource::EnvVar.to_string(), CONFIG_DIR_ENV_VAR);
    assert_eq!(PathSource::PlatformDefault.to_string(), "platform default");
    assert_eq!(PathSource::HomeFallback.to_string(), "HOME fallback");
}
