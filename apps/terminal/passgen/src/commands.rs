//! Interactive command lines mapped onto page events.

use crate::error::PassgenError;

use client_core::session::PageEvent;

use models::{CharacterClass, GenerationStyle};

use std::str::FromStr;

pub const HELP_TEXT: &str = "\
Comandos:
  g | generate | r | refresh    generar una contraseña nueva
  l <n> | length <n>            escribir la longitud (4-50)
  s <n> | slider <n>            mover el control deslizante
  + | -                         aumentar / disminuir la longitud
  on <clase> | off <clase>      uppercase, lowercase, numbers, special
  style <estilo>                standard, easy-to-read, easy-to-pronounce
  c | copy                      copiar la contraseña
  t | theme                     cambiar tema claro/oscuro
  h | help | ?                  esta ayuda
  q | quit | exit               salir";

/// What one input line asks for.
#[derive(Debug)]
pub enum CommandLine {
    Event(PageEvent),
    Help,
    Quit,
    Empty,
}

/// Parse one line typed at the prompt.
///
/// # Errors
/// Returns [`PassgenError::Input`] for unknown commands or bad arguments.
pub fn parse_command(line: &str) -> Result<CommandLine, PassgenError> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(CommandLine::Empty);
    };
    let argument = words.next();

    let event = match command.to_lowercase().as_str() {
        "g" | "generate" | "r" | "refresh" => PageEvent::Generate,
        "l" | "length" => PageEvent::LengthText(argument.unwrap_or_default().to_string()),
        "s" | "slider" => {
            let value = required(command, argument)?;
            let value = value
                .parse::<i64>()
                .map_err(|e| PassgenError::input(format!("Invalid slider value {value:?}: {e}")))?;
            PageEvent::Slider(value)
        }
        "+" => PageEvent::IncreaseLength,
        "-" => PageEvent::DecreaseLength,
        "on" | "off" => {
            let class = CharacterClass::from_str(required(command, argument)?)
                .map_err(|e| PassgenError::input(e.to_string()))?;
            PageEvent::SetClass(class, command.eq_ignore_ascii_case("on"))
        }
        "style" => {
            let style = GenerationStyle::from_str(required(command, argument)?)
                .map_err(|e| PassgenError::input(e.to_string()))?;
            PageEvent::SetStyle(style)
        }
        "c" | "copy" => PageEvent::Copy,
        "t" | "theme" => PageEvent::ToggleTheme,
        "h" | "help" | "?" => return Ok(CommandLine::Help),
        "q" | "quit" | "exit" => return Ok(CommandLine::Quit),
        other => {
            return Err(PassgenError::input(format!(
                "Unknown command {other:?}, type 'help'"
            )));
        }
    };

    Ok(CommandLine::Event(event))
}

fn required<'a>(command: &str, argument: Option<&'a str>) -> Result<&'a str, PassgenError> {
    argument.ok_or_else(|| PassgenError::input(format!("'{command}' needs an argument")))
}
