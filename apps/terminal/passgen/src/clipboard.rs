//! Terminal clipboard via the OSC 52 escape sequence.
//!
//! Most terminal emulators (and tmux with `set-clipboard on`) copy the
//! base64 payload of `ESC ] 52 ; c ; <data> BEL` into the system clipboard,
//! which also works over SSH.

use client_core::clipboard::Clipboard;
use client_core::error::ClipboardError;

use common::ErrorLocation;

use std::io::{IsTerminal, Stdout, Write, stdout};
use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const OSC52_PREFIX: &str = "\x1b]52;c;";
const OSC52_TERMINATOR: &str = "\x07";

/// Build the escape sequence that puts `text` on the clipboard.
pub fn osc52_sequence(text: &str) -> String {
    format!("{OSC52_PREFIX}{}{OSC52_TERMINATOR}", STANDARD.encode(text))
}

pub struct Osc52Clipboard<W: Write + Send> {
    writer: W,
    enabled: bool,
}

impl<W: Write + Send> Osc52Clipboard<W> {
    /// `enabled` is false when the writer is not a terminal.
    pub fn new(writer: W, enabled: bool) -> Self {
        Self { writer, enabled }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl Osc52Clipboard<Stdout> {
    pub fn for_stdout() -> Self {
        let out = stdout();
        let enabled = out.is_terminal();
        Self::new(out, enabled)
    }
}

impl<W: Write + Send> Clipboard for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if !self.enabled {
            return Err(ClipboardError::Unavailable {
                message: String::from("stdout is not a terminal"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.writer.write_all(osc52_sequence(text).as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
