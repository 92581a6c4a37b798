pub mod analysis;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod generator_client;
pub mod input;
pub mod notification;
pub mod page;
pub mod paths;
pub mod session;
pub mod strength;
pub mod theme;

#[cfg(test)]
mod tests;

pub const PASSGEN_APP_NAME: &str = "passgen";
pub const DEFAULT_SERVER_HOSTNAME: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 5000;
pub const DEFAULT_SERVER_BASE_URL: &str =
    const_format::concatcp!("http://", DEFAULT_SERVER_HOSTNAME, ":", DEFAULT_SERVER_PORT);
