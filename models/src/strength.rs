//! Responses returned by the generator API.

use common::RedactedPassword;

use serde::Deserialize;

/// Score and qualitative label computed server-side.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Strength {
    pub score: u32,
    pub level: String,
}

/// Body of a successful `POST /api/generate-password`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationResult {
    pub password: RedactedPassword,
    pub strength: Strength,
}

/// Strength block of the check endpoint; `level` is optional there.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalysisStrength {
    pub score: u32,
    #[serde(default)]
    pub level: Option<String>,
}

/// Body of a successful `POST /api/check-password`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalysisResult {
    pub strength: AnalysisStrength,
}
