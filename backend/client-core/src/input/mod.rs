//! Input synchronizer: length field, slider, steppers and class checkboxes.
//!
//! One length value is mirrored into both the numeric field text and the
//! slider position. Every operation reports whether a new password should be
//! requested and, if the input had to be corrected, a notice for the user.

use models::{
    CharacterClass, CharacterClasses, DEFAULT_PASSWORD_LENGTH, GenerationRequest,
    GenerationStyle, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, clamp_length,
};

use log::debug;

pub const CLASS_REQUIRED_NOTICE: &str = "Debe seleccionar al menos un tipo de carácter";

/// Result of one input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputOutcome {
    pub regenerate: bool,
    pub notice: Option<&'static str>,
}

impl InputOutcome {
    fn regenerate() -> Self {
        Self {
            regenerate: true,
            notice: None,
        }
    }

    fn unchanged() -> Self {
        Self {
            regenerate: false,
            notice: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InputSynchronizer {
    length: u32,
    length_text: String,
    classes: CharacterClasses,
    style: GenerationStyle,
}

impl Default for InputSynchronizer {
    fn default() -> Self {
        Self::new(DEFAULT_PASSWORD_LENGTH, GenerationStyle::default())
    }
}

impl InputSynchronizer {
    pub fn new(length: u32, style: GenerationStyle) -> Self {
        let length = clamp_length(i64::from(length));
        Self {
            length,
            length_text: length.to_string(),
            classes: CharacterClasses::default(),
            style,
        }
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    /// Text currently shown in the numeric field.
    pub fn length_text(&self) -> &str {
        &self.length_text
    }

    pub fn slider_value(&self) -> u32 {
        self.length
    }

    pub fn classes(&self) -> CharacterClasses {
        self.classes
    }

    pub fn style(&self) -> GenerationStyle {
        self.style
    }

    /// Numeric field `change` event.
    ///
    /// Out-of-range values are clamped; unparsable text restores the
    /// previous length. The field is rewritten either way.
    pub fn set_length_text(&mut self, text: &str) -> InputOutcome {
        match parse_leading_integer(text) {
            Some(value) => {
                let clamped = clamp_length(value);
                if i64::from(clamped) != value {
                    debug!("Length {value} clamped to {clamped}");
                }
                self.set_length(clamped);
            }
            None => {
                debug!("Ignoring non-numeric length input");
                self.length_text = self.length.to_string();
            }
        }
        InputOutcome::regenerate()
    }

    /// Range control `input` event.
    pub fn set_slider(&mut self, value: i64) -> InputOutcome {
        self.set_length(clamp_length(value));
        InputOutcome::regenerate()
    }

    /// `+` button. No-op at the maximum.
    pub fn increase_length(&mut self) -> InputOutcome {
        if self.length >= MAX_PASSWORD_LENGTH {
            return InputOutcome::unchanged();
        }
        self.set_length(self.length + 1);
        InputOutcome::regenerate()
    }

    /// `-` button. No-op at the minimum.
    pub fn decrease_length(&mut self) -> InputOutcome {
        if self.length <= MIN_PASSWORD_LENGTH {
            return InputOutcome::unchanged();
        }
        self.set_length(self.length - 1);
        InputOutcome::regenerate()
    }

    /// Checkbox `change` event.
    ///
    /// Unchecking the last enabled class is reverted and reported.
    pub fn set_class(&mut self, class: CharacterClass, checked: bool) -> InputOutcome {
        self.classes.set(class, checked);

        if !self.classes.any() {
            debug!("Rejected clearing last character class {class}");
            self.classes.set(class, true);
            return InputOutcome {
                regenerate: true,
                notice: Some(CLASS_REQUIRED_NOTICE),
            };
        }

        InputOutcome::regenerate()
    }

    pub fn set_style(&mut self, style: GenerationStyle) -> InputOutcome {
        self.style = style;
        InputOutcome::regenerate()
    }

    /// Snapshot of the current controls as a request body.
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            length: self.length,
            style: self.style,
            classes: self.classes,
        }
    }

    fn set_length(&mut self, length: u32) {
        self.length = length;
        self.length_text = length.to_string();
    }
}

/// Parse an optional sign followed by digits, ignoring trailing text.
///
/// Digit runs too large for `i64` saturate, which then clamps to a bound.
pub(crate) fn parse_leading_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = &rest[..rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len())];
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
