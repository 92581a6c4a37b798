//! Event loop driving a [`PasswordPage`].
//!
//! Uses an actor pattern: the session task owns the page, the theme toggle,
//! the clipboard and the renderer, and processes [`PageEvent`]s one at a
//! time. Network calls and timers run as spawned tasks that post their
//! completion back as events, so page state is never shared or locked.

use crate::clipboard::Clipboard;
use crate::error::{GeneratorClientError, SessionError};
use crate::generator_client::GeneratorClient;
use crate::notification::{COPY_PULSE_DURATION, PulseTicket, ToastTicket};
use crate::page::{PageEffects, PageSnapshot, PasswordPage, RequestToken};
use crate::theme::{PreferenceStore, Theme, ThemeToggle};

use models::{AnalysisResult, CharacterClass, GenerationResult, GenerationStyle};

use std::time::Duration;

use log::{debug, info};
use tokio::sync::mpsc;

const EVENT_CHANNEL_CAPACITY: usize = 100;

/// Everything that can happen to the page.
#[derive(Debug)]
pub enum PageEvent {
    /// Generate or refresh button
    Generate,
    /// Numeric length field change
    LengthText(String),
    /// Range control input
    Slider(i64),
    IncreaseLength,
    DecreaseLength,
    SetClass(CharacterClass, bool),
    SetStyle(GenerationStyle),
    Copy,
    ToggleTheme,

    GenerationFinished {
        token: RequestToken,
        result: Result<GenerationResult, GeneratorClientError>,
    },
    AnalysisFinished {
        token: RequestToken,
        result: Result<AnalysisResult, GeneratorClientError>,
    },
    ToastExpired(ToastTicket),
    CopyPulseEnded(PulseTicket),

    /// Stop the loop; in-flight completions are dropped.
    Shutdown,
}

/// Paints page state. Called after every event that changed something.
pub trait PageRenderer: Send {
    fn render(&mut self, page: &PageSnapshot, theme: Theme);
}

/// Sender side of a running session.
#[derive(Clone)]
pub struct SessionHandle {
    events_tx: mpsc::Sender<PageEvent>,
}

impl SessionHandle {
    pub async fn send(&self, event: PageEvent) -> Result<(), SessionError> {
        self.events_tx
            .send(event)
            .await
            .map_err(|e| SessionError::closed(format!("Page session stopped: {e}")))
    }

    pub async fn shutdown(&self) -> Result<(), SessionError> {
        self.send(PageEvent::Shutdown).await
    }
}

pub struct PageSession<S, C, R>
where
    S: PreferenceStore,
    C: Clipboard,
    R: PageRenderer,
{
    page: PasswordPage,
    theme: ThemeToggle<S>,
    client: GeneratorClient,
    clipboard: C,
    renderer: R,
    toast_duration: Duration,
    events_tx: mpsc::Sender<PageEvent>,
    events_rx: mpsc::Receiver<PageEvent>,
}

impl<S, C, R> PageSession<S, C, R>
where
    S: PreferenceStore + 'static,
    C: Clipboard + 'static,
    R: PageRenderer + 'static,
{
    pub fn new(
        page: PasswordPage,
        theme: ThemeToggle<S>,
        client: GeneratorClient,
        clipboard: C,
        renderer: R,
        toast_duration: Duration,
    ) -> (Self, SessionHandle) {
        let (events_tx, events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let handle = SessionHandle {
            events_tx: events_tx.clone(),
        };

        let session = Self {
            page,
            theme,
            client,
            clipboard,
            renderer,
            toast_duration,
            events_tx,
            events_rx,
        };

        (session, handle)
    }

    pub fn page(&self) -> &PasswordPage {
        &self.page
    }

    pub fn theme(&self) -> &ThemeToggle<S> {
        &self.theme
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Run until [`PageEvent::Shutdown`], then hand the session back.
    ///
    /// A first password is requested before any event is read.
    pub async fn run(mut self) -> Self {
        info!("Page session started against {}", self.client.base_url());

        let effects = self.page.generate();
        self.dispatch(effects);
        self.render();

        while let Some(event) = self.events_rx.recv().await {
            if matches!(event, PageEvent::Shutdown) {
                break;
            }
            if self.handle(event) {
                self.render();
            }
        }

        info!("Page session stopped");
        self
    }

    /// Apply one event. Returns true if the page needs repainting.
    fn handle(&mut self, event: PageEvent) -> bool {
        let effects = match event {
            PageEvent::Generate => self.page.generate(),
            PageEvent::LengthText(text) => self.page.set_length_text(&text),
            PageEvent::Slider(value) => self.page.set_slider(value),
            PageEvent::IncreaseLength => self.page.increase_length(),
            PageEvent::DecreaseLength => self.page.decrease_length(),
            PageEvent::SetClass(class, checked) => self.page.set_class(class, checked),
            PageEvent::SetStyle(style) => self.page.set_style(style),
            PageEvent::Copy => self.page.copy_password(&mut self.clipboard),
            PageEvent::ToggleTheme => {
                self.theme.toggle();
                return true;
            }
            PageEvent::GenerationFinished { token, result } => {
                let effects = self.page.finish_generation(token, result);
                if effects.is_empty() {
                    return false;
                }
                effects
            }
            PageEvent::AnalysisFinished { token, result } => {
                return self.page.finish_analysis(token, result);
            }
            PageEvent::ToastExpired(ticket) => return self.page.expire_toast(ticket),
            PageEvent::CopyPulseEnded(ticket) => return self.page.end_copy_pulse(ticket),
            PageEvent::Shutdown => return false,
        };

        self.dispatch(effects);
        true
    }

    fn dispatch(&self, effects: PageEffects) {
        if let Some(pending) = effects.generation {
            let client = self.client.clone();
            let tx = self.events_tx.clone();
            tokio::spawn(async move {
                let result = client.generate(&pending.request).await;
                post(
                    &tx,
                    PageEvent::GenerationFinished {
                        token: pending.token,
                        result,
                    },
                )
                .await;
            });
        }

        if let Some(pending) = effects.analysis {
            let client = self.client.clone();
            let tx = self.events_tx.clone();
            tokio::spawn(async move {
                let result = client.check(pending.password.as_str()).await;
                post(
                    &tx,
                    PageEvent::AnalysisFinished {
                        token: pending.token,
                        result,
                    },
                )
                .await;
            });
        }

        if let Some(ticket) = effects.toast {
            self.schedule(self.toast_duration, PageEvent::ToastExpired(ticket));
        }

        if let Some(ticket) = effects.pulse {
            self.schedule(COPY_PULSE_DURATION, PageEvent::CopyPulseEnded(ticket));
        }
    }

    fn schedule(&self, delay: Duration, event: PageEvent) {
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            post(&tx, event).await;
        });
    }

    fn render(&mut self) {
        let snapshot = self.page.snapshot();
        self.renderer.render(&snapshot, self.theme.theme());
    }
}

async fn post(tx: &mpsc::Sender<PageEvent>, event: PageEvent) {
    if let Err(e) = tx.send(event).await {
        debug!("Dropping {:?}: session already stopped", e.0);
    }
}
