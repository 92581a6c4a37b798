//! Platform-aware detection of the passgen config directory.
//!
//! Lookup order:
//! 1. PASSGEN_CONFIG_DIR environment variable (explicit override)
//! 2. Platform config directory via `dirs` crate
//! 3. `$HOME/.config/passgen`
//!
//! Returns Result, never silently falls back to a wrong path.

use crate::PASSGEN_APP_NAME;
use crate::error::PathError;

use std::env;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

pub const CONFIG_DIR_ENV_VAR: &str = "PASSGEN_CONFIG_DIR";
const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Resolved passgen directories.
#[derive(Debug, Clone)]
pub struct PassgenPaths {
    /// Holds config.json, preferences.json and passgen.log.
    pub config_dir: PathBuf,
    pub source: PathSource,
}

impl PassgenPaths {
    /// File backing the persisted preferences (the theme key).
    pub fn preferences_file(&self) -> PathBuf {
        self.config_dir.join(PREFERENCES_FILE_NAME)
    }
}

/// How the path was determined (for logging).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    EnvVar,
    PlatformDefault,
    HomeFallback,
}

impl std::fmt::Display for PathSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSource::EnvVar => write!(f, "{CONFIG_DIR_ENV_VAR}"),
            PathSource::PlatformDefault => write!(f, "platform default"),
            PathSource::HomeFallback => write!(f, "HOME fallback"),
        }
    }
}

/// Detect the passgen config directory.
///
/// # Errors
/// Returns [`PathError::Detection`] if no candidate can be determined.
pub fn detect_passgen_paths() -> Result<PassgenPaths, PathError> {
    if let Ok(custom_dir) = env::var(CONFIG_DIR_ENV_VAR) {
        let config_dir = PathBuf::from(&custom_dir);
        info!("Using {CONFIG_DIR_ENV_VAR} override: {:?}", config_dir);

        return Ok(PassgenPaths {
            config_dir,
            source: PathSource::EnvVar,
        });
    }

    if let Some(base) = dirs::config_dir() {
        let config_dir = base.join(PASSGEN_APP_NAME);
        debug!("Platform config dir: {:?}", config_dir);

        return Ok(PassgenPaths {
            config_dir,
            source: PathSource::PlatformDefault,
        });
    }

    if let Ok(home) = env::var("HOME") {
        let config_dir = PathBuf::from(home).join(".config").join(PASSGEN_APP_NAME);
        warn!("Using HOME fallback path: {:?}", config_dir);

        return Ok(PassgenPaths {
            config_dir,
            source: PathSource::HomeFallback,
        });
    }

    Err(PathError::detection(format!(
        "Cannot determine passgen config directory. Set {CONFIG_DIR_ENV_VAR} environment variable."
    )))
}

/// Load `.env` from the working directory or next to the executable.
///
/// Returns the file that was loaded, if any.
pub fn load_dotenv() -> Option<PathBuf> {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded .env from: {:?}", path);
        return Some(path);
    }

    let exe_path = env::current_exe().ok()?;
    let env_path = exe_path.parent().map(|dir: &Path| dir.join(".env"))?;

    if !env_path.exists() {
        return None;
    }

    match dotenvy::from_path(&env_path) {
        Ok(_) => {
            info!("Loaded .env from: {:?}", env_path);
            Some(env_path)
        }
        Err(e) => {
            warn!("Failed to parse .env at {:?}: {}", env_path, e);
            None
        }
    }
}
