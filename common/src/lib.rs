//! Shared building blocks for the passgen workspace.
//!
//! ## Architecture
//!
//! - **common** (this crate): error location tracking, HTTP status helpers,
//!   secret-handling wrappers
//! - **models**: request/response shapes exchanged with the generator API
//! - **client-core**: page behaviour (input sync, client, presenter, theme)
//! - **passgen**: terminal front end wiring everything together

pub mod error;
pub mod http_status;
pub mod redacted_password;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_password::RedactedPassword;
