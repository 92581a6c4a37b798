use client_core::error::CoreError;

use common::ErrorLocation;

use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the `passgen` binary.
///
/// Printed as text, or as JSON with `--json`, so they keep structured
/// information and location tracking.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum PassgenError {
    /// Error from this App
    #[error("Passgen Error: {message} {location}")]
    Passgen {
        message: String,
        location: ErrorLocation,
    },

    /// Error from client-core operations (config, generator API, preferences, ...)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// Unrecognised interactive command
    #[error("Input Error: {message} {location}")]
    Input {
        message: String,
        location: ErrorLocation,
    },
}

impl PassgenError {
    #[track_caller]
    pub fn input(message: impl Into<String>) -> Self {
        PassgenError::Input {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for PassgenError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        PassgenError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
