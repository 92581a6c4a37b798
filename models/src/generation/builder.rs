use crate::error::model_error::ModelError;
use crate::{
    CharacterClass, CharacterClasses, ErrorLocation, GenerationRequest, GenerationStyle,
    MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};

use std::panic::Location;

/// Builder for validated [`GenerationRequest`] instances.
///
/// Unset fields fall back to the page defaults: every class enabled and
/// the standard style. Length has no default and must be provided.
#[derive(Debug, Default)]
pub struct GenerationRequestBuilder {
    length: Option<u32>,
    style: Option<GenerationStyle>,
    classes: Option<CharacterClasses>,
}

impl GenerationRequestBuilder {
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_style(mut self, style: GenerationStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_classes(mut self, classes: CharacterClasses) -> Self {
        self.classes = Some(classes);
        self
    }

    pub fn with_class(mut self, class: CharacterClass, enabled: bool) -> Self {
        let mut classes = self.classes.unwrap_or_default();
        classes.set(class, enabled);
        self.classes = Some(classes);
        self
    }

    /// Build the request with validation.
    #[track_caller]
    pub fn build(self) -> Result<GenerationRequest, ModelError> {
        let length = self.length.ok_or_else(|| ModelError::Validation {
            message: String::from("Length is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
            return Err(ModelError::Validation {
                message: format!(
                    "Length must be between {MIN_PASSWORD_LENGTH} and {MAX_PASSWORD_LENGTH}, got {length}"
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let classes = self.classes.unwrap_or_default();

        if !classes.any() {
            return Err(ModelError::Validation {
                message: String::from("At least one character class must be enabled"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(GenerationRequest {
            length,
            style: self.style.unwrap_or_default(),
            classes,
        })
    }
}
