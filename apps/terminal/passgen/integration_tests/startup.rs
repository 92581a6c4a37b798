use passgen::error::PassgenError;
use passgen::runner::load_config;

use tempfile::TempDir;

// ============================================================================
// Integration tests for config loading at startup
// ============================================================================

#[test]
fn given_server_flag_when_loading_config_then_flag_wins() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "server": { "base_url": "http://from-file:5000" } }"#,
    )
    .unwrap();

    let config = load_config(dir.path(), Some("https://from-flag.example")).unwrap();

    assert_eq!(config.server.base_url, "https://from-flag.example");
}

/// **VALUE**: Verifies an invalid `--server` value stops startup with a core error.
///
/// **BUG THIS CATCHES**: Would catch the flag bypassing validation and the client
/// failing later with an opaque URL error on every request.
#[test]
fn given_invalid_server_flag_when_loading_config_then_error() {
    let dir = TempDir::new().unwrap();

    let result = load_config(dir.path(), Some("localhost"));

    assert!(matches!(result, Err(PassgenError::Core { .. })));
}
