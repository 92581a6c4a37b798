use crate::{
    CharacterClass, CharacterClasses, GenerationRequestBuilder, GenerationStyle, clamp_length,
};

use serde_json::json;

/// **VALUE**: Verifies the clamp property over the whole interesting input range.
///
/// **WHY THIS MATTERS**: Every length entry path (text field, slider, steppers)
/// funnels through this function.
///
/// **BUG THIS CATCHES**: Would catch swapped bounds or an off-by-one at 4 or 50.
#[test]
fn given_any_length_when_clamped_then_falls_in_range() {
    for value in -100..=200_i64 {
        let clamped = clamp_length(value);
        assert!((4..=50).contains(&clamped), "{value} -> {clamped}");
        if (4..=50).contains(&value) {
            assert_eq!(clamped as i64, value);
        }
    }
    assert_eq!(clamp_length(3), 4);
    assert_eq!(clamp_length(51), 50);
    assert_eq!(clamp_length(i64::MIN), 4);
    assert_eq!(clamp_length(i64::MAX), 50);
}

/// **VALUE**: Verifies the exact JSON body sent to the generator.
///
/// **WHY THIS MATTERS**: The server reads flat `uppercase`/`lowercase`/... keys and
/// a `type` key; nesting the flags or naming the style `style` silently breaks it.
///
/// **BUG THIS CATCHES**: Would catch removal of `#[serde(flatten)]` or the rename.
#[test]
fn given_request_when_serialized_then_matches_wire_shape() {
    // GIVEN: A request with special characters disabled
    let request = GenerationRequestBuilder::default()
        .with_length(16)
        .with_style(GenerationStyle::EasyToRead)
        .with_class(CharacterClass::Special, false)
        .build()
        .unwrap();

    // WHEN: Serializing
    let value = serde_json::to_value(&request).unwrap();

    // THEN: Flat body with kebab-case style
    assert_eq!(
        value,
        json!({
            "length": 16,
            "type": "easy-to-read",
            "uppercase": true,
            "lowercase": true,
            "numbers": true,
            "special": false
        })
    );
}

#[test]
fn given_style_strings_when_parsed_then_round_trip_through_display() {
    for style in [
        GenerationStyle::Standard,
        GenerationStyle::EasyToRead,
        GenerationStyle::EasyToPronounce,
    ] {
        assert_eq!(style.to_string().parse::<GenerationStyle>().unwrap(), style);
    }
    assert!("memorable".parse::<GenerationStyle>().is_err());
}

#[test]
fn given_class_names_when_parsed_then_resolve_to_classes() {
    assert_eq!("numbers".parse::<CharacterClass>().unwrap(), CharacterClass::Numbers);
    assert!("emoji".parse::<CharacterClass>().is_err());
}

#[test]
fn given_classes_when_counting_then_reports_enabled_flags() {
    let mut classes = CharacterClasses::default();
    assert_eq!(classes.enabled_count(), 4);

    classes.set(CharacterClass::Uppercase, false);
    classes.set(CharacterClass::Numbers, false);

    assert_eq!(classes.enabled_count(), 2);
    assert!(classes.any());
    assert!(!classes.get(CharacterClass::Uppercase));
}
