use crate::analysis::{AnalysisView, crack_time_label};

use models::{AnalysisResult, AnalysisStrength};

/// **VALUE**: Verifies crack-time labels at and around every threshold.
///
/// **BUG THIS CATCHES**: Would catch picking the first (lowest) matching threshold
/// instead of the highest one the score reaches.
#[test]
fn given_scores_when_labelled_then_uses_highest_reached_threshold() {
    assert_eq!(crack_time_label(0), "segundos");
    assert_eq!(crack_time_label(24), "segundos");
    assert_eq!(crack_time_label(25), "segundos");
    assert_eq!(crack_time_label(50), "horas");
    assert_eq!(crack_time_label(74), "horas");
    assert_eq!(crack_time_label(75), "meses");
    assert_eq!(crack_time_label(90), "años");
    assert_eq!(crack_time_label(99), "años");
    assert_eq!(crack_time_label(100), "siglos");
}

#[test]
fn given_analysis_result_when_converted_then_formats_score_out_of_100() {
    let result = AnalysisResult {
        strength: AnalysisStrength {
            score: 82,
            level: None,
        },
    };

    let view = AnalysisView::from(&result);

    assert_eq!(view.score_text(), "82/100");
    assert_eq!(view.crack_time, "meses");
    assert_eq!(view.level, None);
}
