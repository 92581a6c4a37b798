//! Text rendering of the page for a terminal.

use client_core::analysis::AnalysisView;
use client_core::page::PageSnapshot;
use client_core::session::PageRenderer;
use client_core::strength::{BarState, LevelTone, MeterFill, MeterView};
use client_core::theme::Theme;

use models::{CharacterClass, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

use std::fmt::{self, Write as _};
use std::io::{IsTerminal, Stdout, Write, stdout};

use fern::colors::Color;
use log::error;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const TITLE_COLOR: Color = Color::BrightWhite;

const SLIDER_WIDTH: u32 = 24;
const METER_WIDTH: u32 = 20;
const FILLED_CELL: &str = "█";
const EMPTY_CELL: &str = "░";

/// Checkbox labels as shown on the page.
fn class_label(class: CharacterClass) -> &'static str {
    match class {
        CharacterClass::Uppercase => "Mayúsculas",
        CharacterClass::Lowercase => "Minúsculas",
        CharacterClass::Numbers => "Números",
        CharacterClass::Special => "Símbolos",
    }
}

/// Terminal colour for a `#rrggbb` hex string.
pub fn hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
    Some(Color::TrueColor {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Foreground-coloured text, written the same way fern colours log levels.
struct Painted<'a> {
    text: &'a str,
    color: Color,
}

impl fmt::Display for Painted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1B[{}m{}\x1B[0m", self.color.to_fg_str(), self.text)
    }
}

pub fn paint(text: &str, hex: &str, ansi: bool) -> String {
    match hex_color(hex).filter(|_| ansi) {
        Some(color) => Painted { text, color }.to_string(),
        None => text.to_string(),
    }
}

fn bar_color(state: BarState) -> Option<&'static str> {
    match state {
        BarState::Empty => None,
        BarState::Weak => Some(LevelTone::Weak.color()),
        BarState::Medium => Some(LevelTone::Medium.color()),
        BarState::Strong => Some(LevelTone::Strong.color()),
    }
}

/// Meter and label on one line, e.g. `██ ██ ██ ░░  Fuerte`.
pub fn meter_line(meter: &MeterView, ansi: bool) -> String {
    let bar = match &meter.fill {
        MeterFill::Bars(bars) => bars
            .iter()
            .map(|state| match bar_color(*state) {
                Some(color) => paint(&FILLED_CELL.repeat(2), color, ansi),
                None => EMPTY_CELL.repeat(2),
            })
            .collect::<Vec<_>>()
            .join(" "),
        MeterFill::Width { percent, tone } => {
            let filled = u32::from(*percent) * METER_WIDTH / 100;
            format!(
                "{}{}",
                paint(&FILLED_CELL.repeat(filled as usize), tone.color(), ansi),
                EMPTY_CELL.repeat((METER_WIDTH - filled) as usize)
            )
        }
    };

    format!("{bar}  {}", paint(&meter.label, meter.label_color(), ansi))
}

pub fn analysis_line(analysis: &AnalysisView) -> String {
    let mut line = format!("Puntuación: {}", analysis.score_text());
    if let Some(level) = &analysis.level {
        let _ = write!(line, " ({level})");
    }
    let _ = write!(line, "  Tiempo estimado de descifrado: {}", analysis.crack_time);
    line
}

fn slider_line(value: u32) -> String {
    let span = MAX_PASSWORD_LENGTH - MIN_PASSWORD_LENGTH;
    let position = (value.clamp(MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH) - MIN_PASSWORD_LENGTH)
        * (SLIDER_WIDTH - 1)
        / span;

    (0..SLIDER_WIDTH)
        .map(|cell| if cell == position { "●" } else { "─" })
        .collect()
}

/// Full page as text. `ansi` enables colours and the clear-screen prefix.
pub fn render_page(page: &PageSnapshot, theme: Theme, ansi: bool) -> String {
    let mut text = String::new();
    if ansi {
        text.push_str(CLEAR_SCREEN);
    }

    let title = "Generador de contraseñas";
    let title = if ansi {
        Painted {
            text: title,
            color: TITLE_COLOR,
        }
        .to_string()
    } else {
        title.to_string()
    };
    let _ = writeln!(text, "{title}    [{}] tema {}", theme.icon(), theme);
    let _ = writeln!(text);

    let _ = writeln!(
        text,
        "Longitud: {:>2}  {}  ({MIN_PASSWORD_LENGTH}-{MAX_PASSWORD_LENGTH})",
        page.length_text,
        slider_line(page.slider_value)
    );

    let classes = CharacterClass::ALL
        .iter()
        .map(|class| {
            let mark = if page.classes.get(*class) { "x" } else { " " };
            format!("[{mark}] {}", class_label(*class))
        })
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(text, "{classes}");
    let _ = writeln!(text, "Estilo: {}", page.style);
    let _ = writeln!(text);

    let copy_marker = if page.copy_pulse { "  ✓" } else { "" };
    let _ = writeln!(
        text,
        "Contraseña: {}{copy_marker}",
        page.password_field.text()
    );

    if let Some(meter) = &page.meter {
        let _ = writeln!(text, "Fuerza:     {}", meter_line(meter, ansi));
    }

    if let Some(analysis) = &page.analysis {
        let _ = writeln!(text, "{}", analysis_line(analysis));
    }

    if let Some(toast) = &page.toast {
        let _ = writeln!(text);
        let _ = writeln!(text, "» {}", toast.message);
    }

    let _ = writeln!(text);
    let _ = write!(text, "> ");
    text
}

/// Paints every frame to a writer.
pub struct TerminalRenderer<W: Write + Send> {
    out: W,
    ansi: bool,
}

impl<W: Write + Send> TerminalRenderer<W> {
    pub fn new(out: W, ansi: bool) -> Self {
        Self { out, ansi }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalRenderer<Stdout> {
    pub fn for_stdout() -> Self {
        let out = stdout();
        let ansi = out.is_terminal();
        Self::new(out, ansi)
    }
}

impl<W: Write + Send> PageRenderer for TerminalRenderer<W> {
    fn render(&mut self, page: &PageSnapshot, theme: Theme) {
        let frame = render_page(page, theme, self.ansi);
        if let Err(e) = self
            .out
            .write_all(frame.as_bytes())
            .and_then(|()| self.out.flush())
        {
            error!("Failed to paint page: {}", e);
        }
    }
}
