//! Strength presenter: maps a server score and level onto the meter.
//!
//! Two meter layouts exist. `Segmented` lights four bars at 25/50/75/90;
//! `Continuous` draws one bar snapped to 25/50/75/100% with breakpoints at
//! 40/70/90. Both colour the level label from the level text alone.

use models::Strength;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DANGER_COLOR: &str = "#dc3545";
pub const WARNING_COLOR: &str = "#ffc107";
pub const INFO_COLOR: &str = "#17a2b8";
pub const SUCCESS_COLOR: &str = "#28a745";

const MAX_SCORE: u32 = 100;
const SEGMENT_COUNT: usize = 4;

const WEAK_LEVEL_MARKERS: [&str; 2] = ["débil", "weak"];
const MEDIUM_LEVEL_MARKERS: [&str; 3] = ["media", "medium", "moderate"];

/// Meter layout, selectable in config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MeterProfile {
    #[default]
    Segmented,
    Continuous,
}

impl MeterProfile {
    /// Toast auto-dismiss delay that goes with this layout.
    pub fn toast_duration(&self) -> Duration {
        match self {
            MeterProfile::Segmented => Duration::from_millis(2000),
            MeterProfile::Continuous => Duration::from_millis(3000),
        }
    }
}

/// State of one segment in the segmented meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarState {
    Empty,
    Weak,
    Medium,
    Strong,
}

/// Colour band of the continuous meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Danger,
    Warning,
    Info,
    Success,
}

impl Tone {
    pub fn color(&self) -> &'static str {
        match self {
            Tone::Danger => DANGER_COLOR,
            Tone::Warning => WARNING_COLOR,
            Tone::Info => INFO_COLOR,
            Tone::Success => SUCCESS_COLOR,
        }
    }
}

/// Colour class of the level label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelTone {
    Weak,
    Medium,
    Strong,
}

impl LevelTone {
    pub fn color(&self) -> &'static str {
        match self {
            LevelTone::Weak => DANGER_COLOR,
            LevelTone::Medium => WARNING_COLOR,
            LevelTone::Strong => SUCCESS_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeterFill {
    Bars([BarState; SEGMENT_COUNT]),
    Width { percent: u8, tone: Tone },
}

/// Everything needed to paint the meter and its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterView {
    pub score: u32,
    pub fill: MeterFill,
    pub label: String,
    pub label_tone: LevelTone,
}

impl MeterView {
    pub fn label_color(&self) -> &'static str {
        self.label_tone.color()
    }
}

pub fn present(profile: MeterProfile, strength: &Strength) -> MeterView {
    let score = strength.score.min(MAX_SCORE);

    let fill = match profile {
        MeterProfile::Segmented => MeterFill::Bars(segmented_bars(score)),
        MeterProfile::Continuous => {
            let (percent, tone) = continuous_fill(score);
            MeterFill::Width { percent, tone }
        }
    };

    MeterView {
        score,
        fill,
        label: strength.level.clone(),
        label_tone: level_tone(&strength.level),
    }
}

/// Bars lit for `score`; each tier repaints every bar below it.
pub fn segmented_bars(score: u32) -> [BarState; SEGMENT_COUNT] {
    let (lit, state) = match score {
        90.. => (4, BarState::Strong),
        75.. => (3, BarState::Strong),
        50.. => (2, BarState::Medium),
        25.. => (1, BarState::Weak),
        _ => (0, BarState::Empty),
    };

    let mut bars = [BarState::Empty; SEGMENT_COUNT];
    bars.iter_mut().take(lit).for_each(|bar| *bar = state);
    bars
}

/// Snapped width percentage and colour band for `score`.
pub fn continuous_fill(score: u32) -> (u8, Tone) {
    match score {
        0..40 => (25, Tone::Danger),
        40..70 => (50, Tone::Warning),
        70..90 => (75, Tone::Info),
        _ => (100, Tone::Success),
    }
}

/// Label colour from the level text, matched case-insensitively.
///
/// Weak markers are checked first so "Muy débil" never reads as strong.
/// Unrecognised labels fall through to strong.
pub fn level_tone(level: &str) -> LevelTone {
    let level = level.to_lowercase();

    if WEAK_LEVEL_MARKERS.iter().any(|m| level.contains(m)) {
        LevelTone::Weak
    } else if MEDIUM_LEVEL_MARKERS.iter().any(|m| level.contains(m)) {
        LevelTone::Medium
    } else {
        LevelTone::Strong
    }
}
