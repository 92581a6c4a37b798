use crate::RedactedPassword;

/// **VALUE**: Verifies that the password never leaks through Debug or Display.
///
/// **WHY THIS MATTERS**: Page state is logged at debug level. A derived Debug
/// would write every generated password into passgen.log.
///
/// **BUG THIS CATCHES**: Would catch someone replacing the manual impls with derives.
#[test]
fn given_password_when_formatted_then_value_is_hidden() {
    // GIVEN: A generated password
    let password = RedactedPassword::from("Ab12!xyz");

    // WHEN: Formatting with Debug and Display
    let debug = format!("{password:?}");
    let display = format!("{password}");

    // THEN: Neither contains the secret
    assert!(!debug.contains("Ab12!xyz"));
    assert!(!display.contains("Ab12!xyz"));
    assert!(debug.contains("REDACTED"));
}

/// **VALUE**: Verifies that implicit serialization is refused.
///
/// **WHY THIS MATTERS**: Request bodies must call `as_str()` on purpose; a stray
/// `#[derive(Serialize)]` on a struct holding the password must fail loudly.
///
/// **BUG THIS CATCHES**: Would catch if Serialize started emitting the value.
#[test]
fn given_password_when_serialized_then_returns_error() {
    let password = RedactedPassword::from("secret");

    let result = serde_json::to_string(&password);

    assert!(result.is_err(), "Serialization should be refused");
}

#[test]
fn given_json_string_when_deserialized_then_exposes_value_via_as_str() {
    let password: RedactedPassword = serde_json::from_str("\"Ab12!xyz\"").unwrap();

    assert_eq!(password.as_str(), "Ab12!xyz");
    assert_eq!(password.char_count(), 8);
    assert!(!password.is_empty());
}

#[test]
fn given_multibyte_password_when_counting_then_counts_chars_not_bytes() {
    let password = RedactedPassword::from("ñandú");

    assert_eq!(password.char_count(), 5);
}
