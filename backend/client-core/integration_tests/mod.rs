mod error {
    mod config;
    mod generator_client;
    mod session;
}
mod generator_client;
mod session;
mod session_tests {
    pub mod helpers;
}
