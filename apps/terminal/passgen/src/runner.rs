//! Startup and the four commands: generate, check, theme and interactive.

use crate::cli::{Args, Command, GenerateArgs, ThemeAction};
use crate::clipboard::Osc52Clipboard;
use crate::commands::{CommandLine, HELP_TEXT, parse_command};
use crate::error::PassgenError;
use crate::logger;
use crate::renderer::{TerminalRenderer, analysis_line, meter_line};

use client_core::analysis::AnalysisView;
use client_core::config::{AppConfig, UiPreferences};
use client_core::error::CoreError;
use client_core::generator_client::GeneratorClient;
use client_core::input::InputSynchronizer;
use client_core::page::PasswordPage;
use client_core::paths::{detect_passgen_paths, load_dotenv};
use client_core::session::PageSession;
use client_core::strength::{MeterProfile, MeterView, present};
use client_core::theme::{
    EnvThemeDetector, FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, Theme,
    ThemeToggle,
};

use common::ErrorLocation;
use models::{
    CharacterClass, GenerationRequest, GenerationRequestBuilder, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH, clamp_length,
};

use std::fmt;
use std::fs::create_dir_all;
use std::io::{IsTerminal, Write, stdout};
use std::panic::Location;
use std::path::Path;

use log::{error, info, warn};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Result of `passgen generate`.
#[derive(Serialize)]
pub struct GenerateReport {
    pub password: String,
    pub score: u32,
    pub level: String,
    #[serde(skip)]
    pub meter: MeterView,
    pub analysis: Option<AnalysisReport>,
}

impl fmt::Debug for GenerateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerateReport")
            .field("password", &"[REDACTED]")
            .field("score", &self.score)
            .field("level", &self.level)
            .field("meter", &self.meter)
            .field("analysis", &self.analysis)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub score: u32,
    pub level: Option<String>,
    pub crack_time: &'static str,
}

impl From<&AnalysisView> for AnalysisReport {
    fn from(view: &AnalysisView) -> Self {
        Self {
            score: view.score,
            level: view.level.clone(),
            crack_time: view.crack_time,
        }
    }
}

#[derive(Debug, Serialize)]
struct ThemeReport {
    theme: &'static str,
    icon: &'static str,
}

// ============================================
// STARTUP
// ============================================

/// Resolve directories, start logging, load config and run the command.
pub async fn run(args: Args) -> Result<(), PassgenError> {
    let dotenv = load_dotenv();

    let paths = detect_passgen_paths().map_err(CoreError::from)?;
    create_dir_all(&paths.config_dir).map_err(|e| PassgenError::Passgen {
        message: format!(
            "Failed to create config directory {}: {e}",
            paths.config_dir.display()
        ),
        location: ErrorLocation::from(Location::caller()),
    })?;

    logger::initialize(&paths.config_dir, logger::console_level(args.verbose))?;

    info!("passgen starting");
    info!(
        "Config directory: {} ({})",
        paths.config_dir.display(),
        paths.source
    );
    if let Some(path) = dotenv {
        info!("Environment loaded from {}", path.display());
    }

    let config = load_config(&paths.config_dir, args.server.as_deref())?;
    let client = GeneratorClient::new(&config.server.base_url, config.server.request_timeout())
        .map_err(CoreError::from)?;

    let json = args.json;
    let ansi = !json && stdout().is_terminal();

    match args.command.unwrap_or(Command::Interactive) {
        Command::Generate(generate) => {
            let (request, notices) = build_request(&generate, &config.ui)?;
            for notice in notices {
                info!("{notice}");
                eprintln!("{notice}");
            }
            let report = generate_once(&client, &request, config.ui.meter_profile).await?;
            write_generate_report(&mut stdout(), &report, json, ansi)
        }
        Command::Check { password } => {
            let analysis = check_once(&client, &password).await?;
            write_analysis(&mut stdout(), &analysis, json)
        }
        Command::Theme { action } => {
            let theme = theme_command(&paths.preferences_file(), action.unwrap_or_default())?;
            write_theme(&mut stdout(), theme, json)
        }
        Command::Interactive => {
            let store = open_preferences(&paths.preferences_file());
            let theme = ThemeToggle::load(store, &EnvThemeDetector);
            run_interactive(&config, client, theme).await
        }
    }
}

/// Load config.json, then apply `PASSGEN_SERVER_URL` and `--server`.
pub fn load_config(
    config_dir: &Path,
    server_override: Option<&str>,
) -> Result<AppConfig, PassgenError> {
    let mut config = AppConfig::load(config_dir).map_err(CoreError::from)?;
    config.apply_env_overrides().map_err(CoreError::from)?;

    if let Some(url) = server_override {
        info!("Using --server override: {url}");
        config.server.base_url = url.to_string();
        config.validate().map_err(CoreError::from)?;
    }

    Ok(config)
}

/// Print `error` on stderr, as JSON when requested.
pub fn report_error(error: &PassgenError, json: bool) {
    error!("{error}");

    if json {
        match serde_json::to_string(error) {
            Ok(body) => eprintln!("{body}"),
            Err(e) => eprintln!("{error} (JSON encoding failed: {e})"),
        }
    } else {
        eprintln!("{error}");
    }
}

// ============================================
// ONE-SHOT COMMANDS
// ============================================

/// Build a request from flags, falling back to the UI defaults.
///
/// Flags are corrected the way the page corrects its controls: the length is
/// clamped to the allowed range and clearing every class re-enables the last
/// one cleared. Each correction comes back as a notice for the user.
pub fn build_request(
    args: &GenerateArgs,
    ui: &UiPreferences,
) -> Result<(GenerationRequest, Vec<String>), PassgenError> {
    let mut notices = Vec::new();

    let requested = args.length.unwrap_or(ui.default_length);
    let length = clamp_length(i64::from(requested));
    if length != requested {
        notices.push(length_notice(requested, length));
    }

    let mut input = InputSynchronizer::new(length, args.style.unwrap_or(ui.default_style));
    let wanted = args.classes();
    for class in CharacterClass::ALL {
        if !wanted.get(class) {
            let outcome = input.set_class(class, false);
            notices.extend(outcome.notice.map(String::from));
        }
    }

    let request = GenerationRequestBuilder::default()
        .with_length(input.length())
        .with_style(input.style())
        .with_classes(input.classes())
        .build()
        .map_err(CoreError::from)?;

    Ok((request, notices))
}

fn length_notice(requested: u32, length: u32) -> String {
    format!(
        "La longitud debe estar entre {MIN_PASSWORD_LENGTH} y {MAX_PASSWORD_LENGTH}; se usará {length} en lugar de {requested}"
    )
}

/// Generate one password and, if the check endpoint answers, its analysis.
///
/// An analysis failure only drops the analysis from the report.
pub async fn generate_once(
    client: &GeneratorClient,
    request: &GenerationRequest,
    profile: MeterProfile,
) -> Result<GenerateReport, PassgenError> {
    let generated = client.generate(request).await.map_err(CoreError::from)?;
    let meter = present(profile, &generated.strength);

    let analysis = match client.check(generated.password.as_str()).await {
        Ok(result) => Some(AnalysisReport::from(&AnalysisView::from(&result))),
        Err(e) => {
            warn!("Password analysis failed ({}): {}", e.error_category(), e);
            None
        }
    };

    Ok(GenerateReport {
        password: generated.password.as_str().to_string(),
        score: generated.strength.score,
        level: generated.strength.level,
        meter,
        analysis,
    })
}

pub async fn check_once(
    client: &GeneratorClient,
    password: &str,
) -> Result<AnalysisView, PassgenError> {
    let result = client.check(password).await.map_err(CoreError::from)?;
    Ok(AnalysisView::from(&result))
}

/// Preference store for the interactive page.
///
/// An unreadable preference file only costs the stored theme, so it falls back
/// to an in-memory store and the system theme.
pub fn open_preferences(path: &Path) -> Box<dyn PreferenceStore> {
    match FilePreferenceStore::open(path) {
        Ok(store) => {
            info!("Theme preferences: {}", store.path().display());
            Box::new(store)
        }
        Err(e) => {
            warn!("Ignoring theme preferences ({}): {}", path.display(), e);
            Box::new(MemoryPreferenceStore::default())
        }
    }
}

/// Show or toggle the stored theme.
pub fn theme_command(preferences_file: &Path, action: ThemeAction) -> Result<Theme, PassgenError> {
    let store = FilePreferenceStore::open(preferences_file).map_err(CoreError::from)?;
    let mut toggle = ThemeToggle::load(store, &EnvThemeDetector);

    if action == ThemeAction::Toggle {
        toggle.toggle();
    }

    Ok(toggle.theme())
}

fn output_error(e: std::io::Error) -> PassgenError {
    PassgenError::Passgen {
        message: format!("Failed to write output: {e}"),
        location: ErrorLocation::from(Location::caller()),
    }
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<(), PassgenError> {
    let body = serde_json::to_string_pretty(value).map_err(|e| PassgenError::Passgen {
        message: format!("Failed to encode output: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;
    writeln!(out, "{body}").map_err(output_error)
}

pub fn write_generate_report(
    out: &mut impl Write,
    report: &GenerateReport,
    json: bool,
    ansi: bool,
) -> Result<(), PassgenError> {
    if json {
        return write_json(out, report);
    }

    writeln!(out, "{}", report.password).map_err(output_error)?;
    writeln!(out, "Fuerza: {}", meter_line(&report.meter, ansi)).map_err(output_error)?;
    if let Some(analysis) = &report.analysis {
        writeln!(
            out,
            "Puntuación: {}/100  Tiempo estimado de descifrado: {}",
            analysis.score, analysis.crack_time
        )
        .map_err(output_error)?;
    }

    Ok(())
}

pub fn write_analysis(
    out: &mut impl Write,
    analysis: &AnalysisView,
    json: bool,
) -> Result<(), PassgenError> {
    if json {
        return write_json(out, &AnalysisReport::from(analysis));
    }

    writeln!(out, "{}", analysis_line(analysis)).map_err(output_error)
}

pub fn write_theme(out: &mut impl Write, theme: Theme, json: bool) -> Result<(), PassgenError> {
    if json {
        return write_json(
            out,
            &ThemeReport {
                theme: theme.as_str(),
                icon: theme.icon(),
            },
        );
    }

    writeln!(out, "{} {}", theme, theme.icon()).map_err(output_error)
}

// ============================================
// INTERACTIVE PAGE
// ============================================

/// Drive the page from stdin until `quit` or end of input.
pub async fn run_interactive(
    config: &AppConfig,
    client: GeneratorClient,
    theme: ThemeToggle<Box<dyn PreferenceStore>>,
) -> Result<(), PassgenError> {
    let page = PasswordPage::from_preferences(&config.ui);
    let (session, handle) = PageSession::new(
        page,
        theme,
        client,
        Osc52Clipboard::for_stdout(),
        TerminalRenderer::for_stdout(),
        config.ui.toast_duration(),
    );

    let task = tokio::spawn(session.run());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = lines.next_line().await.map_err(|e| PassgenError::Passgen {
            message: format!("Failed to read input: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;
        let Some(line) = line else {
            info!("Input closed");
            break;
        };

        match parse_command(&line) {
            Ok(CommandLine::Event(event)) => handle.send(event).await.map_err(CoreError::from)?,
            Ok(CommandLine::Help) => println!("{HELP_TEXT}"),
            Ok(CommandLine::Quit) => break,
            Ok(CommandLine::Empty) => {}
            Err(e) => {
                warn!("{e}");
                eprintln!("{e}");
            }
        }
    }

    handle.shutdown().await.map_err(CoreError::from)?;
    task.await.map_err(|e| PassgenError::Passgen {
        message: format!("Page session task failed: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    info!("passgen stopped");
    Ok(())
}
