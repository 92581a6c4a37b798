//! Page session event loop against a mock generator server.

use crate::session_tests::helpers::{mount_check, mount_generate, start_session};

use client_core::page::{
    COPIED_NOTICE, ERROR_PLACEHOLDER, GENERATION_FAILED_NOTICE, LOADING_PLACEHOLDER,
    PasswordField,
};
use client_core::session::PageEvent;
use client_core::strength::{MeterFill, MeterProfile, Tone};
use client_core::theme::{PreferenceStore, THEME_PREFERENCE_KEY, Theme};

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies the page generates on load and then shows the analysis.
///
/// **WHY THIS MATTERS**: The first frame the user sees must already be loading
/// a password, and the analysis panel must follow the generated password.
#[tokio::test]
async fn given_running_session_when_started_then_initial_password_and_analysis_shown() {
    // GIVEN: A healthy server
    let server = MockServer::start().await;
    mount_generate(&server, "Ab12!xyz", 82, "Fuerte").await;
    mount_check(&server, 82).await;

    // WHEN: Starting the session
    let (task, handle, renderer) = start_session(&server.uri(), MeterProfile::Segmented);

    // THEN: The first frame shows the loading placeholder
    let (first, _) = renderer
        .wait_for("first frame", |_, _| true)
        .await;
    assert_eq!(renderer.frames()[0].0.password_field.text(), LOADING_PLACEHOLDER);
    assert_eq!(first.length_text, "12");

    // AND: The password and analysis arrive
    let (frame, theme) = renderer
        .wait_for("analysis panel", |page, _| page.analysis.is_some())
        .await;
    assert_eq!(frame.password_field.text(), "Ab12!xyz");
    assert_eq!(frame.meter.as_ref().unwrap().label, "Fuerte");
    assert_eq!(frame.analysis.as_ref().unwrap().score_text(), "82/100");
    assert_eq!(theme, Theme::Light);

    handle.shutdown().await.unwrap();
    task.await.unwrap();
}

/// **VALUE**: Verifies a server failure shows the error placeholder and one toast.
///
/// **BUG THIS CATCHES**: Would catch a failure path that leaves "Generando..."
/// on screen or shows the toast more than once.
#[tokio::test]
async fn given_failing_server_when_generating_then_error_placeholder_and_single_toast() {
    // GIVEN: A server returning 500
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate-password"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    // WHEN: The session starts
    let (task, handle, renderer) = start_session(&server.uri(), MeterProfile::Segmented);

    // THEN: Error placeholder with the failure toast
    let (frame, _) = renderer
        .wait_for("error placeholder", |page, _| {
            page.password_field == PasswordField::Failed
        })
        .await;
    assert_eq!(frame.password_field.text(), ERROR_PLACEHOLDER);
    assert_eq!(frame.toast.as_ref().unwrap().message, GENERATION_FAILED_NOTICE);

    // AND: The toast expires on its own
    renderer
        .wait_for("toast dismissed", |page, _| page.toast.is_none())
        .await;

    handle.shutdown().await.unwrap();
    let session = task.await.unwrap();
    assert_eq!(session.page().toasts_shown(), 1);
    assert!(session.page().meter().is_none());
}

/// **VALUE**: Verifies that a slow, superseded response never reaches the screen.
///
/// **WHY THIS MATTERS**: Changing the length while a request is in flight starts
/// a second request. If the first one answers last it must be ignored, otherwise
/// the field shows a password for options the user no longer has selected.
///
/// **BUG THIS CATCHES**: Would catch removal of the request token check.
#[tokio::test]
async fn given_overlapping_generations_when_first_answers_last_then_its_result_is_discarded() {
    // GIVEN: Length 12 answers slowly, length 20 answers immediately
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate-password"))
        .and(body_partial_json(json!({ "length": 12 })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "password": "slow-twelve!",
                    "strength": { "score": 95, "level": "Muy fuerte" }
                }))
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/generate-password"))
        .and(body_partial_json(json!({ "length": 20 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "password": "fast-twenty-password",
            "strength": { "score": 60, "level": "Media" }
        })))
        .mount(&server)
        .await;
    mount_check(&server, 60).await;

    // WHEN: The initial request is overtaken by a length change
    let (task, handle, renderer) = start_session(&server.uri(), MeterProfile::Segmented);
    handle
        .send(PageEvent::LengthText("20".to_string()))
        .await
        .unwrap();

    renderer
        .wait_for("second password", |page, _| {
            page.password_field.text() == "fast-twenty-password"
        })
        .await;

    // Let the slow response land
    tokio::time::sleep(Duration::from_millis(700)).await;

    // THEN: No frame ever showed the slow password
    assert!(
        renderer
            .frames()
            .iter()
            .all(|(page, _)| page.password_field.text() != "slow-twelve!")
    );

    handle.shutdown().await.unwrap();
    let session = task.await.unwrap();
    assert_eq!(session.page().password_field().text(), "fast-twenty-password");
    assert_eq!(session.page().meter().unwrap().label, "Media");
}

#[tokio::test]
async fn given_continuous_profile_when_high_score_received_then_full_success_bar() {
    let server = MockServer::start().await;
    mount_generate(&server, "Zz9$Zz9$Zz9$", 92, "Muy fuerte").await;
    mount_check(&server, 92).await;

    let (task, handle, renderer) = start_session(&server.uri(), MeterProfile::Continuous);

    let (frame, _) = renderer
        .wait_for("meter", |page, _| page.meter.is_some())
        .await;
    assert_eq!(
        frame.meter.unwrap().fill,
        MeterFill::Width {
            percent: 100,
            tone: Tone::Success
        }
    );

    handle.shutdown().await.unwrap();
    task.await.unwrap();
}

/// **VALUE**: Verifies copy writes the clipboard, pulses and toasts, then both clear.
#[tokio::test]
async fn given_generated_password_when_copied_then_clipboard_written_and_feedback_clears() {
    // GIVEN: A generated password
    let server = MockServer::start().await;
    mount_generate(&server, "Ab12!xyz", 82, "Fuerte").await;
    mount_check(&server, 82).await;
    let (task, handle, renderer) = start_session(&server.uri(), MeterProfile::Segmented);
    renderer
        .wait_for("password", |page, _| page.password_field.text() == "Ab12!xyz")
        .await;

    // WHEN: Copying
    handle.send(PageEvent::Copy).await.unwrap();

    // THEN: Pulse and toast appear
    let (frame, _) = renderer
        .wait_for("copy pulse", |page, _| page.copy_pulse)
        .await;
    assert_eq!(frame.toast.unwrap().message, COPIED_NOTICE);

    // AND: Both clear
    renderer
        .wait_for("feedback cleared", |page, _| {
            !page.copy_pulse && page.toast.is_none()
        })
        .await;

    handle.shutdown().await.unwrap();
    let session = task.await.unwrap();
    assert_eq!(session.clipboard().contents(), Some("Ab12!xyz"));
}

#[tokio::test]
async fn given_running_session_when_theme_toggled_then_frame_repainted_and_preference_stored() {
    let server = MockServer::start().await;
    mount_generate(&server, "Ab12!xyz", 82, "Fuerte").await;
    mount_check(&server, 82).await;
    let (task, handle, renderer) = start_session(&server.uri(), MeterProfile::Segmented);

    handle.send(PageEvent::ToggleTheme).await.unwrap();

    renderer
        .wait_for("dark theme", |_, theme| theme == Theme::Dark)
        .await;

    handle.shutdown().await.unwrap();
    let session = task.await.unwrap();
    assert_eq!(session.theme().theme(), Theme::Dark);
    assert_eq!(
        session.theme().store().get(THEME_PREFERENCE_KEY).as_deref(),
        Some("dark")
    );
}

/// **VALUE**: Verifies a stopped session rejects further events.
///
/// **WHY THIS MATTERS**: Input readers keep a handle after shutdown; sending
/// must fail loudly instead of hanging.
#[tokio::test]
async fn given_stopped_session_when_sending_then_session_error() {
    // GIVEN: A session that has shut down and been dropped
    let server = MockServer::start().await;
    mount_generate(&server, "Ab12!xyz", 82, "Fuerte").await;
    mount_check(&server, 82).await;
    let (task, handle, _renderer) = start_session(&server.uri(), MeterProfile::Segmented);
    handle.shutdown().await.unwrap();
    drop(task.await.unwrap());

    // WHEN: Sending another event
    let result = handle.send(PageEvent::Generate).await;

    // THEN: Closed error
    assert!(result.is_err());
}
