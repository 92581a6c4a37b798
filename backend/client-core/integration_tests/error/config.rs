use client_core::config::AppConfig;
use client_core::error::ConfigError;

use std::error::Error;

use tempfile::TempDir;

/// **VALUE**: Verifies that config validation errors carry a location and reason.
///
/// **WHY THIS MATTERS**: A bad config.json stops the client before the page
/// is shown; the message must say which value is wrong and where it was rejected.
#[test]
fn given_invalid_base_url_when_validated_then_error_names_value_and_location() {
    // GIVEN: A config with a bad URL
    let mut config = AppConfig::default();
    config.server.base_url = "127.0.0.1:5000".to_string();

    // WHEN: Validating
    let err = config.validate().unwrap_err();
    let error_string = format!("{}", err);

    // THEN: Reason and location are present
    assert!(error_string.contains("Config Validation Error"));
    assert!(error_string.contains("127.0.0.1:5000"));
    assert!(error_string.contains("config"));
}

/// **VALUE**: Verifies the IO source chain is preserved for read failures.
///
/// **BUG THIS CATCHES**: Would catch removal of `#[source]` from `ReadError`.
#[test]
fn given_config_path_is_directory_when_loading_then_read_error_keeps_source() {
    // GIVEN: config.json exists but is a directory
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("config.json")).unwrap();

    // WHEN: Loading
    let err = AppConfig::load(dir.path()).unwrap_err();

    // THEN: ReadError with an io::Error source
    assert!(matches!(err, ConfigError::ReadError { .. }));
    assert!(err.source().is_some());
}
