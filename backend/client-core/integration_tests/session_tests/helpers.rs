//! Test helpers for page session integration tests.
//!
//! This module provides utilities for driving a `PageSession`:
//! - Recording renderer that keeps every painted frame
//! - Mock generator server setup
//! - Polling for a frame that matches a condition

use client_core::clipboard::MemoryClipboard;
use client_core::generator_client::GeneratorClient;
use client_core::input::InputSynchronizer;
use client_core::page::{PageSnapshot, PasswordPage};
use client_core::session::{PageRenderer, PageSession, SessionHandle};
use client_core::strength::MeterProfile;
use client_core::theme::{FixedThemeDetector, MemoryPreferenceStore, Theme, ThemeToggle};

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;
use tokio::task::JoinHandle;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Toast duration used by session tests; short so expiry is observable.
pub const TEST_TOAST_DURATION: Duration = Duration::from_millis(150);

const WAIT_TIMEOUT: Duration = Duration::from_secs(5);
const POLL_INTERVAL: Duration = Duration::from_millis(10);

pub type TestSession = PageSession<MemoryPreferenceStore, MemoryClipboard, RecordingRenderer>;

/// Renderer that records every frame it is asked to paint.
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    frames: Arc<Mutex<Vec<(PageSnapshot, Theme)>>>,
}

impl RecordingRenderer {
    pub fn frames(&self) -> Vec<(PageSnapshot, Theme)> {
        self.frames.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<(PageSnapshot, Theme)> {
        self.frames.lock().unwrap().last().cloned()
    }

    /// Wait until the most recent frame satisfies `predicate`.
    pub async fn wait_for<F>(&self, description: &str, predicate: F) -> (PageSnapshot, Theme)
    where
        F: Fn(&PageSnapshot, Theme) -> bool,
    {
        let deadline = tokio::time::Instant::now() + WAIT_TIMEOUT;
        loop {
            if let Some((snapshot, theme)) = self.last() {
                if predicate(&snapshot, theme) {
                    return (snapshot, theme);
                }
            }
            assert!(
                tokio::time::Instant::now() < deadline,
                "Timed out waiting for: {description}"
            );
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}

impl PageRenderer for RecordingRenderer {
    fn render(&mut self, page: &PageSnapshot, theme: Theme) {
        self.frames.lock().unwrap().push((page.clone(), theme));
    }
}

/// Test helper: Mount a generate endpoint returning `password` with `score`/`level`.
pub async fn mount_generate(server: &MockServer, password: &str, score: u32, level: &str) {
    Mock::given(method("POST"))
        .and(path("/api/generate-password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "password": password,
            "strength": { "score": score, "level": level }
        })))
        .mount(server)
        .await;
}

/// Test helper: Mount a check endpoint returning `score`.
pub async fn mount_check(server: &MockServer, score: u32) {
    Mock::given(method("POST"))
        .and(path("/api/check-password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "strength": { "score": score }
        })))
        .mount(server)
        .await;
}

/// Test helper: Start a session against `base_url` with a light theme.
pub fn start_session(
    base_url: &str,
    profile: MeterProfile,
) -> (JoinHandle<TestSession>, SessionHandle, RecordingRenderer) {
    let client = GeneratorClient::new(base_url, None).unwrap();
    let page = PasswordPage::new(profile, InputSynchronizer::default());
    let theme = ThemeToggle::load(
        MemoryPreferenceStore::default(),
        &FixedThemeDetector(Theme::Light),
    );
    let renderer = RecordingRenderer::default();

    let (session, handle) = PageSession::new(
        page,
        theme,
        client,
        MemoryClipboard::default(),
        renderer.clone(),
        TEST_TOAST_DURATION,
    );

    (tokio::spawn(session.run()), handle, renderer)
}
