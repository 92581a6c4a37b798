//! Options sent to the generator endpoint.

pub mod builder;

use crate::{ErrorLocation, ModelError};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_LENGTH: u32 = 4;
pub const MAX_PASSWORD_LENGTH: u32 = 50;
pub const DEFAULT_PASSWORD_LENGTH: u32 = 12;

/// Clamp any user-entered length into `[MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH]`.
pub fn clamp_length(value: i64) -> u32 {
    // Bounds fit in u32, so the cast after clamping is lossless.
    value.clamp(MIN_PASSWORD_LENGTH as i64, MAX_PASSWORD_LENGTH as i64) as u32
}

/// Shaping of the generated password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationStyle {
    #[default]
    Standard,
    EasyToRead,
    EasyToPronounce,
}

impl GenerationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationStyle::Standard => "standard",
            GenerationStyle::EasyToRead => "easy-to-read",
            GenerationStyle::EasyToPronounce => "easy-to-pronounce",
        }
    }
}

impl fmt::Display for GenerationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationStyle {
    type Err = ModelError;

    #[track_caller]
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "standard" => Ok(GenerationStyle::Standard),
            "easy-to-read" => Ok(GenerationStyle::EasyToRead),
            "easy-to-pronounce" => Ok(GenerationStyle::EasyToPronounce),
            other => Err(ModelError::UnknownValue {
                message: format!("Unknown generation style: {other}"),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// One of the four character-class checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Special,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Special,
    ];

    /// Wire field name, also used as the checkbox id.
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Numbers => "numbers",
            CharacterClass::Special => "special",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterClass {
    type Err = ModelError;

    #[track_caller]
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        CharacterClass::ALL
            .into_iter()
            .find(|class| class.as_str() == value)
            .ok_or_else(|| ModelError::UnknownValue {
                message: format!("Unknown character class: {value}"),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

/// Checkbox state for the four character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClasses {
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub special: bool,
}

impl Default for CharacterClasses {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            numbers: true,
            special: true,
        }
    }
}

impl CharacterClasses {
    pub fn get(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Numbers => self.numbers,
            CharacterClass::Special => self.special,
        }
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        match class {
            CharacterClass::Uppercase => self.uppercase = enabled,
            CharacterClass::Lowercase => self.lowercase = enabled,
            CharacterClass::Numbers => self.numbers = enabled,
            CharacterClass::Special => self.special = enabled,
        }
    }

    pub fn any(&self) -> bool {
        self.enabled_count() > 0
    }

    pub fn enabled_count(&self) -> usize {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.get(*class))
            .count()
    }
}

/// Body of `POST /api/generate-password`.
///
/// Construct through [`GenerationRequestBuilder`](builder::GenerationRequestBuilder)
/// to get length and class validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub length: u32,
    #[serde(rename = "type")]
    pub style: GenerationStyle,
    #[serde(flatten)]
    pub classes: CharacterClasses,
}
