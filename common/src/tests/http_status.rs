use crate::HttpStatusCode;

/// **VALUE**: Verifies 4xx/5xx classification boundaries.
///
/// **WHY THIS MATTERS**: Generation failures are logged differently for rejected
/// requests and for generator crashes.
///
/// **BUG THIS CATCHES**: Off-by-one range errors at 400/499/500/599.
#[test]
fn given_status_codes_when_classified_then_ranges_are_exact() {
    assert!(HttpStatusCode(400).is_client_error());
    assert!(HttpStatusCode(499).is_client_error());
    assert!(!HttpStatusCode(500).is_client_error());
    assert!(HttpStatusCode(500).is_server_error());
    assert!(HttpStatusCode(599).is_server_error());
    assert!(!HttpStatusCode(200).is_server_error());
    assert!(!HttpStatusCode(600).is_server_error());
}

#[test]
fn given_u16_when_converted_then_displays_numeric_code() {
    let status = HttpStatusCode::from(503);
    assert_eq!(status.to_string(), "503");
}
