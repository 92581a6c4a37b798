//! Supplementary analysis panel fed by the check endpoint.

use models::AnalysisResult;

/// Crack-time labels, keyed by the minimum score that earns them.
const CRACK_TIME_THRESHOLDS: [(u32, &str); 5] = [
    (25, "segundos"),
    (50, "horas"),
    (75, "meses"),
    (90, "años"),
    (100, "siglos"),
];

const DEFAULT_CRACK_TIME: &str = "segundos";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisView {
    pub score: u32,
    pub level: Option<String>,
    pub crack_time: &'static str,
}

impl AnalysisView {
    pub fn score_text(&self) -> String {
        format!("{}/100", self.score)
    }
}

impl From<&AnalysisResult> for AnalysisView {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            score: result.strength.score,
            level: result.strength.level.clone(),
            crack_time: crack_time_label(result.strength.score),
        }
    }
}

/// Label of the highest threshold `score` reaches.
pub fn crack_time_label(score: u32) -> &'static str {
    CRACK_TIME_THRESHOLDS
        .iter()
        .rev()
        .find(|(threshold, _)| score >= *threshold)
        .map(|(_, label)| *label)
        .unwrap_or(DEFAULT_CRACK_TIME)
}
