use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum SessionError {
    #[error("Session Closed Error: {message} {location}")]
    Closed {
        message: String,
        location: ErrorLocation,
    },
}

impl SessionError {
    #[track_caller]
    pub fn closed(message: impl Into<String>) -> Self {
        SessionError::Closed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
