use client_core::error::GeneratorClientError;
use client_core::error::CoreError;
use common::HttpStatusCode;

/// **VALUE**: Verifies that `GeneratorClientError::Server` includes file/line/column location tracking.
///
/// **WHY THIS MATTERS**: A failed generation only shows a generic toast to the user.
/// The log line is the only place the real cause surfaces, so it must say where the
/// error was created.
///
/// **BUG THIS CATCHES**: Would catch if someone:
/// - Removes `#[track_caller]` from `from_http_response()`
/// - Drops `{location}` from the Display format
#[test]
fn given_server_error_when_formatted_then_includes_status_body_and_location() {
    // GIVEN: A 503 response converted to an error
    let err = GeneratorClientError::from_http_response(503, "generator overloaded");

    // WHEN: Formatting the error as string
    let error_string = format!("{}", err);

    // THEN: Status, body and this file are present
    assert!(error_string.contains("Server Error"));
    assert!(error_string.contains("HTTP 503"));
    assert!(error_string.contains("generator overloaded"));
    assert!(error_string.contains("generator_client.rs"));
}

#[test]
fn given_server_errors_when_categorised_then_client_and_server_split() {
    let bad_request = GeneratorClientError::from_http_response(400, "");
    let internal = GeneratorClientError::from_http_response(500, "");
    let redirect = GeneratorClientError::from_http_response(302, "");

    assert_eq!(bad_request.error_category(), "client_error");
    assert_eq!(internal.error_category(), "server_error");
    assert_eq!(redirect.error_category(), "unexpected_status");
    assert_eq!(internal.status_code(), Some(HttpStatusCode(500)));
}

/// **VALUE**: Verifies url and serde_json errors convert with location.
///
/// **BUG THIS CATCHES**: Would catch a `From` impl losing `#[track_caller]`,
/// which makes every converted error point at the error module itself.
#[test]
fn given_foreign_errors_when_converted_then_location_points_at_caller() {
    // GIVEN: A URL parse failure and a JSON failure
    let url_err = url::Url::parse("not a url").unwrap_err();
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();

    // WHEN: Converting
    let from_url = GeneratorClientError::from(url_err);
    let from_json = GeneratorClientError::from(json_err);

    // THEN: Categories and locations are right
    assert_eq!(from_url.error_category(), "url");
    assert_eq!(from_json.error_category(), "json");
    assert_eq!(from_url.status_code(), None);
    assert!(format!("{}", from_url).contains("generator_client.rs"));
    assert!(format!("{}", from_json).contains("generator_client.rs"));
}

#[test]
fn given_generator_error_when_wrapped_in_core_error_then_display_is_transparent() {
    let err = GeneratorClientError::from_http_response(500, "boom");
    let expected = format!("{}", err);

    let core: CoreError = err.into();

    assert_eq!(format!("{}", core), expected);
}
