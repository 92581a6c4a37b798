use passgen::cli::{GenerateArgs, ThemeAction};
use passgen::error::PassgenError;
use passgen::runner::{
    build_request, check_once, generate_once, open_preferences, theme_command, write_analysis,
    write_generate_report, write_theme,
};

use client_core::config::UiPreferences;
use client_core::input::CLASS_REQUIRED_NOTICE;
use client_core::generator_client::GeneratorClient;
use client_core::strength::MeterProfile;
use client_core::theme::{FixedThemeDetector, Theme, ThemeToggle};

use models::{CharacterClass, GenerationStyle};

use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Integration tests for the one-shot commands against a mock generator
// ============================================================================

async fn mount_success(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/generate-password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "password": "Ab12!xyz",
            "strength": { "score": 82, "level": "Fuerte" }
        })))
        .mount(server)
        .await;
}

/// **VALUE**: Tests the full generate command: request from flags, password,
/// meter and analysis in the printed report.
///
/// **WHY THIS MATTERS**: This is the path scripts use. Flags, UI defaults and the
/// two endpoints all meet here.
#[tokio::test]
async fn given_generate_flags_when_run_then_report_has_password_strength_and_analysis() {
    // GIVEN: A server expecting length 8 without numbers, using the default style
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate-password"))
        .and(body_json(json!({
            "length": 8,
            "type": "standard",
            "uppercase": true,
            "lowercase": true,
            "numbers": false,
            "special": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "password": "Ab!xyzQr",
            "strength": { "score": 82, "level": "Fuerte" }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/check-password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "strength": { "score": 82 }
        })))
        .mount(&server)
        .await;

    let client = GeneratorClient::new(&server.uri(), None).unwrap();
    let args = GenerateArgs {
        length: Some(8),
        no_numbers: true,
        ..GenerateArgs::default()
    };

    // WHEN: Building and running the request
    let (request, notices) = build_request(&args, &UiPreferences::default()).unwrap();
    assert!(notices.is_empty());
    let report = generate_once(&client, &request, MeterProfile::Segmented)
        .await
        .unwrap();

    // THEN: Report carries password, strength and analysis
    assert_eq!(report.password, "Ab!xyzQr");
    assert_eq!(report.score, 82);
    assert_eq!(report.level, "Fuerte");
    let analysis = report.analysis.as_ref().unwrap();
    assert_eq!(analysis.crack_time, "meses");

    // AND: Plain output lists password first, then the meter
    let mut out = Vec::new();
    write_generate_report(&mut out, &report, false, false).unwrap();
    let text = String::from_utf8(out).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Ab!xyzQr"));
    assert_eq!(lines.next(), Some("Fuerza: ██ ██ ██ ░░  Fuerte"));
    assert!(text.contains("82/100"));
}

/// **VALUE**: Verifies the analysis endpoint failing does not fail the command.
#[tokio::test]
async fn given_check_endpoint_missing_when_generating_then_report_without_analysis() {
    // GIVEN: Only the generate endpoint exists (check returns 404)
    let server = MockServer::start().await;
    mount_success(&server).await;
    let client = GeneratorClient::new(&server.uri(), None).unwrap();
    let (request, _) = build_request(&GenerateArgs::default(), &UiPreferences::default()).unwrap();

    // WHEN: Generating
    let report = generate_once(&client, &request, MeterProfile::Continuous)
        .await
        .unwrap();

    // THEN: Password present, analysis absent, JSON output well formed
    assert_eq!(report.password, "Ab12!xyz");
    assert!(report.analysis.is_none());

    let mut out = Vec::new();
    write_generate_report(&mut out, &report, true, false).unwrap();
    let json: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["password"], "Ab12!xyz");
    assert_eq!(json["score"], 82);
    assert_eq!(json["analysis"], Value::Null);
}

#[tokio::test]
async fn given_generator_down_when_generating_then_core_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate-password"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let client = GeneratorClient::new(&server.uri(), None).unwrap();
    let (request, _) = build_request(&GenerateArgs::default(), &UiPreferences::default()).unwrap();

    let result = generate_once(&client, &request, MeterProfile::Segmented).await;

    assert!(matches!(result, Err(PassgenError::Core { message, .. }) if message.contains("503")));
}

/// **VALUE**: Verifies out-of-range lengths are clamped with a notice, not rejected.
///
/// **WHY THIS MATTERS**: The page clamps typed lengths in place; the command line
/// must behave the same and still produce a password.
///
/// **BUG THIS CATCHES**: Would catch `--length 3` or `--length 51` failing with a
/// validation error, or being forwarded to the server unclamped.
#[test]
fn given_out_of_range_length_when_building_request_then_clamped_with_notice() {
    for (requested, expected) in [(3, 4), (0, 4), (51, 50)] {
        // GIVEN: A length flag outside 4..=50
        let args = GenerateArgs {
            length: Some(requested),
            ..GenerateArgs::default()
        };

        // WHEN: Building the request
        let (request, notices) = build_request(&args, &UiPreferences::default()).unwrap();

        // THEN: The nearest bound is used and one notice explains it
        assert_eq!(request.length, expected);
        assert_eq!(notices.len(), 1);
        assert!(notices[0].contains(&expected.to_string()));
    }
}

/// **VALUE**: Verifies disabling every class re-enables the last one, like the checkboxes.
///
/// **BUG THIS CATCHES**: Would catch all four `--no-*` flags producing an error, or an
/// empty class set reaching the server.
#[test]
fn given_all_classes_disabled_when_building_request_then_last_class_restored() {
    // GIVEN: Every class switched off
    let no_classes = GenerateArgs {
        no_uppercase: true,
        no_lowercase: true,
        no_numbers: true,
        no_special: true,
        ..GenerateArgs::default()
    };

    // WHEN: Building the request
    let (request, notices) = build_request(&no_classes, &UiPreferences::default()).unwrap();

    // THEN: Only symbols stay on, with the class-required notice
    assert_eq!(request.classes.enabled_count(), 1);
    assert!(request.classes.get(CharacterClass::Special));
    assert_eq!(notices, vec![CLASS_REQUIRED_NOTICE.to_string()]);
}

#[test]
fn given_no_flags_when_building_request_then_ui_defaults_used() {
    let ui = UiPreferences {
        default_length: 30,
        default_style: GenerationStyle::EasyToPronounce,
        ..UiPreferences::default()
    };

    let (request, notices) = build_request(&GenerateArgs::default(), &ui).unwrap();
    assert!(notices.is_empty());

    assert_eq!(request.length, 30);
    assert_eq!(request.style, GenerationStyle::EasyToPronounce);
    assert_eq!(request.classes.enabled_count(), 4);
}

#[tokio::test]
async fn given_password_when_checked_then_score_and_crack_time_printed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/check-password"))
        .and(body_json(json!({ "password": "hunter2" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "strength": { "score": 20, "level": "Muy débil" }
        })))
        .mount(&server)
        .await;
    let client = GeneratorClient::new(&server.uri(), None).unwrap();

    let analysis = check_once(&client, "hunter2").await.unwrap();
    let mut out = Vec::new();
    write_analysis(&mut out, &analysis, false).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("20/100"));
    assert!(text.contains("Muy débil"));
    assert!(text.contains("segundos"));
}

/// **VALUE**: Tests the theme command against a real preferences file.
///
/// **WHY THIS MATTERS**: `passgen theme toggle` twice must leave the file as it
/// started.
#[test]
fn given_stored_light_theme_when_toggled_twice_then_light_again() {
    // GIVEN: A preferences file with light stored
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("preferences.json");
    std::fs::write(&file, r#"{ "theme": "light" }"#).unwrap();

    // WHEN: Toggling twice
    let first = theme_command(&file, ThemeAction::Toggle).unwrap();
    let second = theme_command(&file, ThemeAction::Toggle).unwrap();

    // THEN: Dark then light, and show agrees
    assert_eq!(first, Theme::Dark);
    assert_eq!(second, Theme::Light);
    assert_eq!(theme_command(&file, ThemeAction::Show).unwrap(), Theme::Light);

    let mut out = Vec::new();
    write_theme(&mut out, second, true).unwrap();
    let json: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["theme"], "light");
    assert_eq!(json["icon"], "🌙");
}

/// **VALUE**: Verifies the report's debug output never carries the plaintext password.
///
/// **BUG THIS CATCHES**: Would catch a derived `Debug` leaking the password into
/// `debug!` lines or the log file.
#[tokio::test]
async fn given_generated_report_when_debug_formatted_then_password_redacted() {
    // GIVEN: A report for a generated password
    let server = MockServer::start().await;
    mount_success(&server).await;
    let client = GeneratorClient::new(&server.uri(), None).unwrap();
    let (request, _) = build_request(&GenerateArgs::default(), &UiPreferences::default()).unwrap();
    let report = generate_once(&client, &request, MeterProfile::Segmented)
        .await
        .unwrap();

    // WHEN: Formatting with {:?}
    let debug = format!("{report:?}");

    // THEN: Score is visible, the password is not
    assert!(!debug.contains("Ab12!xyz"));
    assert!(debug.contains("[REDACTED]"));
    assert!(debug.contains("82"));
}

/// **VALUE**: Verifies a corrupt preferences file does not stop the interactive page.
///
/// **WHY THIS MATTERS**: The theme is presentation only; losing it must not cost the
/// user the generator.
///
/// **BUG THIS CATCHES**: Would catch the parse error being propagated at startup.
#[test]
fn given_corrupt_preferences_when_opening_then_memory_store_with_system_theme() {
    // GIVEN: A preferences file that is not JSON
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("preferences.json");
    std::fs::write(&file, "{ not json").unwrap();

    // WHEN: Opening the store for the interactive page
    let store = open_preferences(&file);
    let mut toggle = ThemeToggle::load(store, &FixedThemeDetector(Theme::Dark));

    // THEN: The system theme is used and toggling still works without touching the file
    assert_eq!(toggle.theme(), Theme::Dark);
    assert_eq!(toggle.toggle(), Theme::Light);
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "{ not json");
}

#[test]
fn given_valid_preferences_when_opening_then_stored_theme_used() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("preferences.json");
    std::fs::write(&file, r#"{ "theme": "dark" }"#).unwrap();

    let toggle = ThemeToggle::load(open_preferences(&file), &FixedThemeDetector(Theme::Light));

    assert_eq!(toggle.theme(), Theme::Dark);
}
