use std::path::PathBuf;

use common::ErrorLocation;
use thiserror::Error;

/// Failures of the persisted preference store (theme key).
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Preference Read Error: {path}: {source} {location}")]
    Read {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Preference Parse Error: {path}: {reason} {location}")]
    Parse {
        location: ErrorLocation,
        path: PathBuf,
        reason: String,
    },

    #[error("Preference Write Error: {path}: {source} {location}")]
    Write {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
