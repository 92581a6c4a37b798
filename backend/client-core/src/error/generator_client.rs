//! Error types for the generator API client.
//!
//! - HTTP status codes stored directly (not parsed from strings)
//! - Network failures keep their timeout/connect classification
//! - All errors include ErrorLocation for debugging

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum GeneratorClientError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("Network Error: {message} {location}")]
    Network {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server Error: HTTP {status} - {message} {location}")]
    Server {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },
}

impl GeneratorClientError {
    /// Create from a non-2xx response.
    #[track_caller]
    pub fn from_http_response(status_code: u16, body: impl Into<String>) -> Self {
        GeneratorClientError::Server {
            status: HttpStatusCode(status_code),
            message: body.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Get HTTP status code if the server answered.
    pub fn status_code(&self) -> Option<HttpStatusCode> {
        match self {
            GeneratorClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short category string for log lines.
    pub fn error_category(&self) -> &'static str {
        match self {
            GeneratorClientError::Server { status, .. } if status.is_client_error() => {
                "client_error"
            }
            GeneratorClientError::Server { status, .. } if status.is_server_error() => {
                "server_error"
            }
            GeneratorClientError::Server { .. } => "unexpected_status",
            GeneratorClientError::Network { is_timeout: true, .. } => "timeout",
            GeneratorClientError::Network {
                is_connection: true,
                ..
            } => "connection",
            GeneratorClientError::Network { .. } => "network",
            GeneratorClientError::Http { .. } => "http",
            GeneratorClientError::Json { .. } => "json",
            GeneratorClientError::UrlParse { .. } => "url",
        }
    }
}

impl From<url::ParseError> for GeneratorClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        GeneratorClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for GeneratorClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        let is_timeout = error.is_timeout();
        let is_connection = error.is_connect();

        if is_timeout || is_connection || error.is_request() {
            return GeneratorClientError::Network {
                message: error.to_string(),
                is_timeout,
                is_connection,
                location: ErrorLocation::from(Location::caller()),
            };
        }

        if error.is_decode() {
            return GeneratorClientError::Json {
                message: error.to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        GeneratorClientError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for GeneratorClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        GeneratorClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
