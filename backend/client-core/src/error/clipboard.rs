use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ClipboardError {
    #[error("Clipboard Unavailable Error: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Clipboard Write Error: {message} {location}")]
    Write {
        message: String,
        location: ErrorLocation,
    },
}

impl From<std::io::Error> for ClipboardError {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        ClipboardError::Write {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
