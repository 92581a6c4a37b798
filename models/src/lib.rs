//! Domain models for passgen.
//!
//! Pure data structures exchanged with the password generator API. Models
//! carry validation but no behaviour; page logic lives in `client-core`.

pub mod error;
pub mod generation;
pub mod strength;

#[cfg(test)]
mod tests;

pub use common::ErrorLocation;
pub use error::model_error::ModelError;
pub use generation::builder::GenerationRequestBuilder;
pub use generation::{
    CharacterClass, CharacterClasses, DEFAULT_PASSWORD_LENGTH, GenerationRequest,
    GenerationStyle, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, clamp_length,
};
pub use strength::{AnalysisResult, AnalysisStrength, GenerationResult, Strength};
