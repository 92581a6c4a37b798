// Unit tests for the page view-model
// Token fencing, error placeholders, toasts and copy behaviour

use crate::clipboard::{Clipboard, MemoryClipboard};
use crate::error::{ClipboardError, GeneratorClientError};
use crate::input::{CLASS_REQUIRED_NOTICE, InputSynchronizer};
use crate::page::{
    COPIED_NOTICE, COPY_FAILED_NOTICE, ERROR_PLACEHOLDER, GENERATION_FAILED_NOTICE,
    LOADING_PLACEHOLDER, NOTHING_TO_COPY_NOTICE, PasswordField, PasswordPage,
};
use crate::strength::{BarState, LevelTone, MeterFill, MeterProfile};

use common::{ErrorLocation, RedactedPassword};
use models::{AnalysisResult, AnalysisStrength, CharacterClass, GenerationResult, Strength};

use std::panic::Location;

fn page() -> PasswordPage {
    PasswordPage::new(MeterProfile::Segmented, InputSynchronizer::default())
}

fn generated(password: &str, score: u32, level: &str) -> GenerationResult {
    GenerationResult {
        password: RedactedPassword::from(password),
        strength: Strength {
            score,
            level: level.to_string(),
        },
    }
}

fn analysis(score: u32) -> AnalysisResult {
    AnalysisResult {
        strength: AnalysisStrength { score, level: None },
    }
}

struct BrokenClipboard;

impl Clipboard for BrokenClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable {
            message: String::from("no terminal"),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// **VALUE**: Verifies the loading placeholder and the request snapshot.
///
/// **WHY THIS MATTERS**: While a request is in flight the field must show
/// "Generando..." and the request must reflect the controls at click time.
#[test]
fn given_new_page_when_generation_begins_then_field_shows_loading() {
    // GIVEN: A fresh page
    let mut page = page();
    assert_eq!(page.password_field(), &PasswordField::Empty);
    assert_eq!(page.latest_token(), None);

    // WHEN: Generating
    let effects = page.generate();

    // THEN: Loading placeholder and a pending request with the default length
    assert_eq!(page.password_field().text(), LOADING_PLACEHOLDER);
    let pending = effects.generation.unwrap();
    assert_eq!(pending.request.length, 12);
    assert_eq!(page.latest_token(), Some(pending.token));
}

/// **VALUE**: Verifies the full success path for the reference response.
///
/// **WHY THIS MATTERS**: Password, meter tier and label colour must all reflect
/// the server response, and the analysis follow-up must be requested.
#[test]
fn given_successful_response_when_applied_then_password_meter_and_analysis_follow_up() {
    // GIVEN: A generation in flight
    let mut page = page();
    let token = page.generate().generation.unwrap().token;

    // WHEN: The server answers
    let effects = page.finish_generation(token, Ok(generated("Ab12!xyz", 82, "Fuerte")));

    // THEN: Field shows the password
    assert_eq!(page.password_field().text(), "Ab12!xyz");

    // AND: Meter is at the >=75 tier with a strong label
    let meter = page.meter().unwrap();
    assert_eq!(
        meter.fill,
        MeterFill::Bars([
            BarState::Strong,
            BarState::Strong,
            BarState::Strong,
            BarState::Empty
        ])
    );
    assert_eq!(meter.label, "Fuerte");
    assert_eq!(meter.label_tone, LevelTone::Strong);

    // AND: Analysis is requested for the same password, no toast
    let pending = effects.analysis.unwrap();
    assert_eq!(pending.password.as_str(), "Ab12!xyz");
    assert_eq!(pending.token, token);
    assert!(effects.toast.is_none());
    assert!(page.toast().is_none());
}

/// **VALUE**: Verifies the failure path shows the placeholder and exactly one toast.
///
/// **BUG THIS CATCHES**: Would catch a failure leaving "Generando..." in the field
/// or showing the toast twice.
#[test]
fn given_server_error_when_applied_then_error_placeholder_and_one_toast() {
    // GIVEN: A generation in flight
    let mut page = page();
    let token = page.generate().generation.unwrap().token;

    // WHEN: The server returns 500
    let effects = page.finish_generation(
        token,
        Err(GeneratorClientError::from_http_response(500, "boom")),
    );

    // THEN: Error placeholder and one toast
    assert_eq!(page.password_field().text(), ERROR_PLACEHOLDER);
    assert!(effects.toast.is_some());
    assert!(effects.analysis.is_none());
    assert_eq!(page.toasts_shown(), 1);
    assert_eq!(page.toast().unwrap().message, GENERATION_FAILED_NOTICE);
}

/// **VALUE**: Verifies that a superseded response cannot overwrite newer state.
///
/// **WHY THIS MATTERS**: Overlapping requests are common (dragging the slider).
/// The slow first response must not replace the second one's password.
///
/// **BUG THIS CATCHES**: Would catch removal of the token comparison.
#[test]
fn given_two_generations_when_first_resolves_last_then_it_is_discarded() {
    // GIVEN: Two overlapping generations
    let mut page = page();
    let first = page.generate().generation.unwrap().token;
    let second = page.increase_length().generation.unwrap().token;
    assert!(second > first);

    // WHEN: The second resolves, then the first
    page.finish_generation(second, Ok(generated("new-password", 60, "Media")));
    let late = page.finish_generation(first, Ok(generated("old-password", 95, "Muy fuerte")));

    // THEN: Late response is ignored entirely
    assert!(late.is_empty());
    assert_eq!(page.password_field().text(), "new-password");
    assert_eq!(page.meter().unwrap().label, "Media");
}

#[test]
fn given_stale_failure_when_applied_then_no_toast_and_loading_kept() {
    let mut page = page();
    let first = page.generate().generation.unwrap().token;
    page.generate();

    let effects = page.finish_generation(
        first,
        Err(GeneratorClientError::from_http_response(503, "")),
    );

    assert!(effects.is_empty());
    assert_eq!(page.password_field(), &PasswordField::Loading);
    assert_eq!(page.toasts_shown(), 0);
}

#[test]
fn given_current_analysis_when_applied_then_panel_visible() {
    let mut page = page();
    let token = page.generate().generation.unwrap().token;
    page.finish_generation(token, Ok(generated("Ab12!xyz", 82, "Fuerte")));

    assert!(page.finish_analysis(token, Ok(analysis(82))));

    let panel = page.analysis().unwrap();
    assert_eq!(panel.score_text(), "82/100");
    assert_eq!(panel.crack_time, "meses");
}

/// **VALUE**: Verifies that analysis failures have no visible effect.
///
/// **WHY THIS MATTERS**: The analysis panel is secondary; its failure must never
/// produce a toast or touch the password field.
#[test]
fn given_analysis_failure_when_applied_then_silently_ignored() {
    let mut page = page();
    let token = page.generate().generation.unwrap().token;
    page.finish_generation(token, Ok(generated("Ab12!xyz", 82, "Fuerte")));

    let changed = page.finish_analysis(
        token,
        Err(GeneratorClientError::from_http_response(404, "not found")),
    );

    assert!(!changed);
    assert!(page.analysis().is_none());
    assert!(page.toast().is_none());
    assert_eq!(page.password_field().text(), "Ab12!xyz");
}

#[test]
fn given_stale_analysis_when_applied_then_discarded() {
    let mut page = page();
    let first = page.generate().generation.unwrap().token;
    page.finish_generation(first, Ok(generated("Ab12!xyz", 82, "Fuerte")));
    page.generate();

    assert!(!page.finish_analysis(first, Ok(analysis(82))));
    assert!(page.analysis().is_none());
}

#[test]
fn given_last_class_unchecked_when_applied_then_toast_and_regeneration() {
    let mut page = page();
    for class in [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
    ] {
        page.set_class(class, false);
    }

    let effects = page.set_class(CharacterClass::Special, false);

    assert!(effects.toast.is_some());
    assert!(effects.generation.is_some());
    assert_eq!(page.toast().unwrap().message, CLASS_REQUIRED_NOTICE);
    assert!(page.input().classes().special);
}

#[test]
fn given_length_at_minimum_when_decreasing_then_no_effects() {
    let mut page = page();
    page.set_length_text("4");

    let effects = page.decrease_length();

    assert!(effects.is_empty());
}

/// **VALUE**: Verifies copy writes the password, pulses the button and toasts.
#[test]
fn given_password_when_copied_then_clipboard_pulse_and_toast() {
    // GIVEN: A page showing a password
    let mut page = page();
    let token = page.generate().generation.unwrap().token;
    page.finish_generation(token, Ok(generated("Ab12!xyz", 82, "Fuerte")));
    let mut clipboard = MemoryClipboard::default();

    // WHEN: Copying
    let effects = page.copy_password(&mut clipboard);

    // THEN: Clipboard holds the password, pulse and toast are active
    assert_eq!(clipboard.contents(), Some("Ab12!xyz"));
    assert!(page.is_copy_pulse_active());
    assert_eq!(page.toast().unwrap().message, COPIED_NOTICE);

    // WHEN: Timers fire
    assert!(page.end_copy_pulse(effects.pulse.unwrap()));
    assert!(page.expire_toast(effects.toast.unwrap()));

    // THEN: Both are cleared
    assert!(!page.is_copy_pulse_active());
    assert!(page.toast().is_none());
}

#[test]
fn given_placeholder_in_field_when_copied_then_nothing_copied() {
    let mut page = page();
    page.generate();
    let mut clipboard = MemoryClipboard::default();

    let effects = page.copy_password(&mut clipboard);

    assert_eq!(clipboard.contents(), None);
    assert!(effects.pulse.is_none());
    assert_eq!(page.toast().unwrap().message, NOTHING_TO_COPY_NOTICE);
}

#[test]
fn given_broken_clipboard_when_copied_then_failure_toast_without_pulse() {
    let mut page = page();
    let token = page.generate().generation.unwrap().token;
    page.finish_generation(token, Ok(generated("Ab12!xyz", 82, "Fuerte")));

    let effects = page.copy_password(&mut BrokenClipboard);

    assert!(effects.pulse.is_none());
    assert!(!page.is_copy_pulse_active());
    assert_eq!(page.toast().unwrap().message, COPY_FAILED_NOTICE);
}

#[test]
fn given_page_when_snapshotted_then_debug_output_hides_password() {
    let mut page = page();
    let token = page.generate().generation.unwrap().token;
    page.finish_generation(token, Ok(generated("Ab12!xyz", 82, "Fuerte")));

    let snapshot = page.snapshot();

    assert_eq!(snapshot.password_field.text(), "Ab12!xyz");
    assert_eq!(snapshot.length_text, "12");
    assert!(!format!("{snapshot:?}").contains("Ab12!xyz"));
}
