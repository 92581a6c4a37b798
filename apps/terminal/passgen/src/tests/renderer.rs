// Unit tests for terminal rendering

use crate::renderer::{TerminalRenderer, hex_color, meter_line, paint, render_page};

use client_core::input::InputSynchronizer;
use client_core::page::PasswordPage;
use client_core::session::PageRenderer;
use client_core::strength::{MeterProfile, present};
use client_core::theme::Theme;

use common::RedactedPassword;
use fern::colors::Color;
use models::{CharacterClass, GenerationResult, Strength};

fn strength(score: u32, level: &str) -> Strength {
    Strength {
        score,
        level: level.to_string(),
    }
}

#[test]
fn given_hex_colors_when_converted_then_truecolor() {
    assert_eq!(
        hex_color("#28a745"),
        Some(Color::TrueColor {
            r: 40,
            g: 167,
            b: 69
        })
    );
    assert_eq!(hex_color("28a745"), None);
    assert_eq!(hex_color("#zzzzzz"), None);
}

/// **VALUE**: Verifies painted text goes through the terminal colour codes fern uses.
///
/// **BUG THIS CATCHES**: Would catch a hand-built escape that ignores the terminal's
/// truecolor support, or a missing reset that bleeds colour into the next line.
#[test]
fn given_ansi_when_painting_then_wrapped_in_color_and_reset() {
    let code = Color::TrueColor {
        r: 220,
        g: 53,
        b: 69,
    }
    .to_fg_str();

    let painted = paint("Muy débil", "#dc3545", true);

    assert_eq!(painted, format!("\x1B[{code}mMuy débil\x1B[0m"));
    assert_eq!(paint("Muy débil", "#dc3545", false), "Muy débil");
    assert_eq!(paint("Muy débil", "red", true), "Muy débil");
}

#[test]
fn given_segmented_meter_when_rendered_plain_then_three_bars_lit() {
    let meter = present(MeterProfile::Segmented, &strength(82, "Fuerte"));

    let line = meter_line(&meter, false);

    assert_eq!(line, "██ ██ ██ ░░  Fuerte");
}

#[test]
fn given_continuous_meter_when_rendered_plain_then_width_matches_percent() {
    let meter = present(MeterProfile::Continuous, &strength(35, "Débil"));

    let line = meter_line(&meter, false);

    assert_eq!(line, format!("{}{}  Débil", "█".repeat(5), "░".repeat(15)));
}

#[test]
fn given_colored_meter_when_rendered_then_label_uses_level_color() {
    let meter = present(MeterProfile::Segmented, &strength(30, "Muy débil"));

    let line = meter_line(&meter, true);

    assert!(line.contains(&paint("Muy débil", "#dc3545", true)));
    assert!(line.ends_with("\x1B[0m"));
}

/// **VALUE**: Verifies the plain page shows every control and the password.
///
/// **WHY THIS MATTERS**: Without colours (redirected output) the page must still
/// carry the full state and no escape codes.
#[test]
fn given_page_with_password_when_rendered_plain_then_all_controls_listed() {
    // GIVEN: A page with a generated password and one class disabled
    let mut page = PasswordPage::new(MeterProfile::Segmented, InputSynchronizer::default());
    page.set_class(CharacterClass::Numbers, false);
    let token = page.generate().generation.unwrap().token;
    page.finish_generation(
        token,
        Ok(GenerationResult {
            password: RedactedPassword::from("Ab12!xyz"),
            strength: strength(82, "Fuerte"),
        }),
    );

    // WHEN: Rendering without ANSI
    let text = render_page(&page.snapshot(), Theme::Light, false);

    // THEN: Controls, password and meter are present
    assert!(text.contains("Longitud: 12"));
    assert!(text.contains("[x] Mayúsculas"));
    assert!(text.contains("[ ] Números"));
    assert!(text.contains("Estilo: standard"));
    assert!(text.contains("Contraseña: Ab12!xyz"));
    assert!(text.contains("Fuerte"));
    assert!(text.contains("🌙"));
    assert!(!text.contains('\x1b'));
}

#[test]
fn given_renderer_over_buffer_when_rendering_then_frame_written() {
    let page = PasswordPage::new(MeterProfile::Segmented, InputSynchronizer::default());
    let mut renderer = TerminalRenderer::new(Vec::new(), false);

    renderer.render(&page.snapshot(), Theme::Dark);

    let written = String::from_utf8(renderer.into_inner()).unwrap();
    assert!(written.contains("☀️"));
    assert!(written.ends_with("> "));
}
