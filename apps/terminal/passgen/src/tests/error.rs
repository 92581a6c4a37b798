// Unit tests for error module
// Tests error serialization (used by --json output)

use crate::error::PassgenError;

use client_core::error::{CoreError, GeneratorClientError};

use common::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Tests that errors can be serialized for `--json` output.
///
/// **WHY THIS MATTERS**: Scripts calling `passgen --json` parse stderr; a
/// non-serializable error would leave them with nothing.
///
/// **BUG THIS CATCHES**: Would catch if someone removes the `#[derive(Serialize)]`
/// or adds a non-serializable field.
#[test]
fn given_passgen_error_when_serialized_then_succeeds() {
    // GIVEN: A PassgenError
    let err = PassgenError::Input {
        message: String::from("Test"),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Serializing to JSON
    let result = serde_json::to_string(&err);

    // THEN: Should succeed
    assert!(result.is_ok(), "Error should be serializable");

    // AND: Should contain the error data
    let json = result.unwrap();
    assert!(json.contains("Input"), "JSON should contain variant name");
    assert!(json.contains("Test"), "JSON should contain message");
}

#[test]
fn given_core_error_when_converted_then_message_kept_and_location_is_caller() {
    let core = CoreError::from(GeneratorClientError::from_http_response(500, "boom"));

    let err = PassgenError::from(core);

    let text = format!("{}", err);
    assert!(text.starts_with("Core Error: Server Error: HTTP 500 - boom"));
    assert!(matches!(err, PassgenError::Core { location, .. } if location.file.ends_with("error.rs")));
}
