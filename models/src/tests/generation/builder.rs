use crate::{CharacterClass, CharacterClasses, GenerationRequestBuilder, GenerationStyle, ModelError};

/// **VALUE**: Verifies that the builder rejects lengths below the page minimum.
///
/// **WHY THIS MATTERS**: The input synchronizer clamps before building; a request
/// with length 3 means clamping was bypassed somewhere.
///
/// **BUG THIS CATCHES**: Would catch if the range check is removed or loosened.
#[test]
fn given_length_below_minimum_when_building_then_returns_validation_error() {
    // GIVEN: Builder with length 3
    let builder = GenerationRequestBuilder::default().with_length(3);

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error
    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert!(message.contains("between 4 and 50"), "got: {message}");
        }
        other => panic!("Expected validation error, got {other:?}"),
    }
}

#[test]
fn given_length_above_maximum_when_building_then_returns_validation_error() {
    let result = GenerationRequestBuilder::default().with_length(51).build();

    assert!(matches!(result, Err(ModelError::Validation { .. })));
}

/// **VALUE**: Verifies that a request with every class disabled cannot be built.
///
/// **WHY THIS MATTERS**: "At least one class enabled" is the only invariant shared
/// between the checkboxes and the request.
///
/// **BUG THIS CATCHES**: Would catch if `any()` stops being consulted in `build()`.
#[test]
fn given_all_classes_disabled_when_building_then_returns_validation_error() {
    // GIVEN: Every class switched off
    let builder = GenerationRequestBuilder::default()
        .with_length(12)
        .with_classes(CharacterClasses {
            uppercase: false,
            lowercase: false,
            numbers: false,
            special: false,
        });

    // WHEN: Building
    let result = builder.build();

    // THEN: Validation error mentioning character classes
    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert_eq!(message, "At least one character class must be enabled");
        }
        other => panic!("Expected validation error, got {other:?}"),
    }
}

#[test]
fn given_missing_length_when_building_then_returns_validation_error() {
    let result = GenerationRequestBuilder::default().build();

    match result {
        Err(ModelError::Validation { message, .. }) => assert_eq!(message, "Length is required"),
        other => panic!("Expected validation error, got {other:?}"),
    }
}

/// **VALUE**: Verifies defaults for unset style and classes.
///
/// **WHY THIS MATTERS**: The page starts with all four boxes checked and the
/// standard style; the builder must agree with that initial state.
#[test]
fn given_only_length_when_building_then_uses_page_defaults() {
    let request = GenerationRequestBuilder::default()
        .with_length(12)
        .build()
        .unwrap();

    assert_eq!(request.length, 12);
    assert_eq!(request.style, GenerationStyle::Standard);
    assert_eq!(request.classes, CharacterClasses::default());
}

#[test]
fn given_single_class_toggled_off_when_building_then_other_classes_stay_enabled() {
    let request = GenerationRequestBuilder::default()
        .with_length(8)
        .with_class(CharacterClass::Special, false)
        .build()
        .unwrap();

    assert!(!request.classes.special);
    assert!(request.classes.uppercase && request.classes.lowercase && request.classes.numbers);
}
