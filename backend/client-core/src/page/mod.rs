//! Page view-model.
//!
//! [`PasswordPage`] owns every piece of state the password page shows:
//! the input controls, the password field, the strength meter, the analysis
//! panel, the toast slot and the copy pulse. Event methods mutate it and
//! return [`PageEffects`] describing the network calls and timers the
//! driver must start; completions come back through `finish_*` methods
//! carrying the [`RequestToken`] they were started with.

use crate::analysis::AnalysisView;
use crate::clipboard::Clipboard;
use crate::config::UiPreferences;
use crate::error::GeneratorClientError;
use crate::input::{InputOutcome, InputSynchronizer};
use crate::notification::{CopyPulse, Notifier, PulseTicket, Toast, ToastTicket};
use crate::strength::{MeterProfile, MeterView, present};

use common::RedactedPassword;
use models::{
    AnalysisResult, CharacterClass, CharacterClasses, GenerationRequest, GenerationResult,
    GenerationStyle,
};

use log::{debug, error, info, warn};

pub const LOADING_PLACEHOLDER: &str = "Generando...";
pub const ERROR_PLACEHOLDER: &str = "Error al generar";
pub const GENERATION_FAILED_NOTICE: &str = "Error al generar la contraseña. Inténtelo de nuevo.";
pub const COPIED_NOTICE: &str = "Contraseña copiada al portapapeles";
pub const NOTHING_TO_COPY_NOTICE: &str = "No hay contraseña para copiar";
pub const COPY_FAILED_NOTICE: &str = "No se pudo copiar la contraseña";

/// Identifies one generation; only the latest token may update the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Content of the password output field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordField {
    Empty,
    Loading,
    Ready(RedactedPassword),
    Failed,
}

impl PasswordField {
    /// Text shown in the field.
    pub fn text(&self) -> &str {
        match self {
            PasswordField::Empty => "",
            PasswordField::Loading => LOADING_PLACEHOLDER,
            PasswordField::Ready(password) => password.as_str(),
            PasswordField::Failed => ERROR_PLACEHOLDER,
        }
    }

    pub fn password(&self) -> Option<&RedactedPassword> {
        match self {
            PasswordField::Ready(password) => Some(password),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingGeneration {
    pub token: RequestToken,
    pub request: GenerationRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAnalysis {
    pub token: RequestToken,
    pub password: RedactedPassword,
}

/// Work the driver has to start after an event.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PageEffects {
    pub generation: Option<PendingGeneration>,
    pub analysis: Option<PendingAnalysis>,
    pub toast: Option<ToastTicket>,
    pub pulse: Option<PulseTicket>,
}

impl PageEffects {
    pub fn is_empty(&self) -> bool {
        self.generation.is_none()
            && self.analysis.is_none()
            && self.toast.is_none()
            && self.pulse.is_none()
    }
}

/// Copy of the renderable state, handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    pub length_text: String,
    pub slider_value: u32,
    pub classes: CharacterClasses,
    pub style: GenerationStyle,
    pub password_field: PasswordField,
    pub meter: Option<MeterView>,
    pub analysis: Option<AnalysisView>,
    pub toast: Option<Toast>,
    pub copy_pulse: bool,
}

pub struct PasswordPage {
    profile: MeterProfile,
    input: InputSynchronizer,
    password_field: PasswordField,
    meter: Option<MeterView>,
    analysis: Option<AnalysisView>,
    notifier: Notifier,
    copy_pulse: CopyPulse,
    issued: u64,
}

impl PasswordPage {
    pub fn new(profile: MeterProfile, input: InputSynchronizer) -> Self {
        Self {
            profile,
            input,
            password_field: PasswordField::Empty,
            meter: None,
            analysis: None,
            notifier: Notifier::default(),
            copy_pulse: CopyPulse::default(),
            issued: 0,
        }
    }

    pub fn from_preferences(ui: &UiPreferences) -> Self {
        Self::new(
            ui.meter_profile,
            InputSynchronizer::new(ui.default_length, ui.default_style),
        )
    }

    pub fn profile(&self) -> MeterProfile {
        self.profile
    }

    pub fn input(&self) -> &InputSynchronizer {
        &self.input
    }

    pub fn password_field(&self) -> &PasswordField {
        &self.password_field
    }

    pub fn meter(&self) -> Option<&MeterView> {
        self.meter.as_ref()
    }

    pub fn analysis(&self) -> Option<&AnalysisView> {
        self.analysis.as_ref()
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.notifier.current()
    }

    pub fn toasts_shown(&self) -> u64 {
        self.notifier.shown_count()
    }

    pub fn is_copy_pulse_active(&self) -> bool {
        self.copy_pulse.is_active()
    }

    /// Token of the most recently started generation, if any.
    pub fn latest_token(&self) -> Option<RequestToken> {
        (self.issued > 0).then_some(RequestToken(self.issued))
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            length_text: self.input.length_text().to_string(),
            slider_value: self.input.slider_value(),
            classes: self.input.classes(),
            style: self.input.style(),
            password_field: self.password_field.clone(),
            meter: self.meter.clone(),
            analysis: self.analysis.clone(),
            toast: self.notifier.current().cloned(),
            copy_pulse: self.copy_pulse.is_active(),
        }
    }

    // ============================================
    // INPUT EVENTS
    // ============================================

    /// Generate / refresh buttons.
    pub fn generate(&mut self) -> PageEffects {
        PageEffects {
            generation: Some(self.begin_generation()),
            ..PageEffects::default()
        }
    }

    pub fn set_length_text(&mut self, text: &str) -> PageEffects {
        let outcome = self.input.set_length_text(text);
        self.apply_input(outcome)
    }

    pub fn set_slider(&mut self, value: i64) -> PageEffects {
        let outcome = self.input.set_slider(value);
        self.apply_input(outcome)
    }

    pub fn increase_length(&mut self) -> PageEffects {
        let outcome = self.input.increase_length();
        self.apply_input(outcome)
    }

    pub fn decrease_length(&mut self) -> PageEffects {
        let outcome = self.input.decrease_length();
        self.apply_input(outcome)
    }

    pub fn set_class(&mut self, class: CharacterClass, checked: bool) -> PageEffects {
        let outcome = self.input.set_class(class, checked);
        self.apply_input(outcome)
    }

    pub fn set_style(&mut self, style: GenerationStyle) -> PageEffects {
        let outcome = self.input.set_style(style);
        self.apply_input(outcome)
    }

    fn apply_input(&mut self, outcome: InputOutcome) -> PageEffects {
        let toast = outcome.notice.map(|notice| self.notifier.show(notice));
        let generation = outcome.regenerate.then(|| self.begin_generation());

        PageEffects {
            generation,
            toast,
            ..PageEffects::default()
        }
    }

    // ============================================
    // GENERATION
    // ============================================

    /// Put the field into its loading state and issue a new token.
    pub fn begin_generation(&mut self) -> PendingGeneration {
        self.issued += 1;
        let token = RequestToken(self.issued);
        self.password_field = PasswordField::Loading;

        debug!("Generation {:?} started", token);
        PendingGeneration {
            token,
            request: self.input.request(),
        }
    }

    fn is_latest(&self, token: RequestToken) -> bool {
        self.latest_token() == Some(token)
    }

    /// Apply the generator response for `token`.
    ///
    /// Responses for superseded tokens are dropped without touching the page.
    /// A success schedules the follow-up analysis; a failure shows the error
    /// placeholder and one toast.
    pub fn finish_generation(
        &mut self,
        token: RequestToken,
        result: Result<GenerationResult, GeneratorClientError>,
    ) -> PageEffects {
        if !self.is_latest(token) {
            debug!(
                "Discarding stale generation {:?} (latest {:?})",
                token,
                self.latest_token()
            );
            return PageEffects::default();
        }

        match result {
            Ok(generated) => {
                info!(
                    "Generation {:?} succeeded: {} chars, score {}",
                    token,
                    generated.password.char_count(),
                    generated.strength.score
                );

                self.meter = Some(present(self.profile, &generated.strength));
                self.password_field = PasswordField::Ready(generated.password.clone());

                PageEffects {
                    analysis: Some(PendingAnalysis {
                        token,
                        password: generated.password,
                    }),
                    ..PageEffects::default()
                }
            }
            Err(e) => {
                error!(
                    "Generation {:?} failed ({}): {}",
                    token,
                    e.error_category(),
                    e
                );

                self.password_field = PasswordField::Failed;
                PageEffects {
                    toast: Some(self.notifier.show(GENERATION_FAILED_NOTICE)),
                    ..PageEffects::default()
                }
            }
        }
    }

    /// Apply the check endpoint response for `token`.
    ///
    /// Failures are logged and otherwise ignored. Returns true if the
    /// analysis panel changed.
    pub fn finish_analysis(
        &mut self,
        token: RequestToken,
        result: Result<AnalysisResult, GeneratorClientError>,
    ) -> bool {
        if !self.is_latest(token) {
            debug!("Discarding stale analysis {:?}", token);
            return false;
        }

        match result {
            Ok(analysis) => {
                self.analysis = Some(AnalysisView::from(&analysis));
                true
            }
            Err(e) => {
                warn!("Password analysis failed ({}): {}", e.error_category(), e);
                false
            }
        }
    }

    // ============================================
    // COPY & TIMERS
    // ============================================

    /// Copy button: write the shown password to `clipboard`.
    pub fn copy_password(&mut self, clipboard: &mut dyn Clipboard) -> PageEffects {
        let Some(password) = self.password_field.password() else {
            debug!("Copy requested without a password in the field");
            return PageEffects {
                toast: Some(self.notifier.show(NOTHING_TO_COPY_NOTICE)),
                ..PageEffects::default()
            };
        };

        match clipboard.write_text(password.as_str()) {
            Ok(()) => PageEffects {
                pulse: Some(self.copy_pulse.start()),
                toast: Some(self.notifier.show(COPIED_NOTICE)),
                ..PageEffects::default()
            },
            Err(e) => {
                error!("Clipboard write failed: {}", e);
                PageEffects {
                    toast: Some(self.notifier.show(COPY_FAILED_NOTICE)),
                    ..PageEffects::default()
                }
            }
        }
    }

    pub fn expire_toast(&mut self, ticket: ToastTicket) -> bool {
        self.notifier.expire(ticket)
    }

    pub fn end_copy_pulse(&mut self, ticket: PulseTicket) -> bool {
        self.copy_pulse.end(ticket)
    }
}
