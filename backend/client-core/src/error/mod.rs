pub mod clipboard;
pub mod config;
pub mod generator_client;
pub mod paths;
pub mod preferences;
pub mod session;

pub use clipboard::ClipboardError;
pub use config::ConfigError;
pub use generator_client::GeneratorClientError;
pub use paths::PathError;
pub use preferences::PreferenceError;
pub use session::SessionError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    GeneratorClient(#[from] GeneratorClientError),

    #[error(transparent)]
    Preference(#[from] PreferenceError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Model(#[from] models::ModelError),
}
