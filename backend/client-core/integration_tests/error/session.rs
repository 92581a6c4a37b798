use client_core::error::{PathError, SessionError};

/// **VALUE**: Verifies helper constructors capture the caller's location.
///
/// **BUG THIS CATCHES**: Would catch `#[track_caller]` being dropped from
/// `SessionError::closed()` or `PathError::detection()`.
#[test]
fn given_helper_constructors_when_formatted_then_location_is_caller() {
    let closed = SessionError::closed("Page session stopped");
    let detection = PathError::detection("no HOME");

    assert!(format!("{}", closed).contains("Session Closed Error: Page session stopped"));
    assert!(format!("{}", closed).contains("session.rs"));
    assert!(format!("{}", detection).contains("no HOME"));
    assert!(format!("{}", detection).contains("session.rs"));
}
