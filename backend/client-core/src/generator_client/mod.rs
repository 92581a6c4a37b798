//! HTTP client for the password generator API.

use crate::error::generator_client::GeneratorClientError;

use models::{AnalysisResult, GenerationRequest, GenerationResult};

use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

const GENERATE_PASSWORD_ENDPOINT: &str = "api/generate-password";
const CHECK_PASSWORD_ENDPOINT: &str = "api/check-password";

#[derive(Serialize)]
struct CheckPasswordBody<'a> {
    password: &'a str,
}

/// Client for `POST /api/generate-password` and `POST /api/check-password`.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct GeneratorClient {
    base_url: Url,
    client: Client,
}

impl GeneratorClient {
    /// Create a client rooted at `base_url_str`.
    ///
    /// A path on the base URL is kept: `http://host/tools` resolves the
    /// generator at `http://host/tools/api/generate-password`.
    pub fn new(base_url_str: &str, timeout: Option<Duration>) -> Result<Self, GeneratorClientError> {
        let mut base_url = Url::parse(base_url_str)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Ask the server for a new password and its strength.
    ///
    /// # Errors
    /// Returns [`GeneratorClientError::Server`] for any non-2xx status.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GeneratorClientError> {
        debug!(
            "Requesting password: length={}, style={}, classes={}",
            request.length,
            request.style,
            request.classes.enabled_count()
        );
        self.post_json(GENERATE_PASSWORD_ENDPOINT, request).await
    }

    /// Ask the server to score an existing password.
    pub async fn check(&self, password: &str) -> Result<AnalysisResult, GeneratorClientError> {
        debug!("Requesting analysis for {} character password", password.chars().count());
        self.post_json(CHECK_PASSWORD_ENDPOINT, &CheckPasswordBody { password })
            .await
    }

    async fn post_json<B, R>(&self, endpoint: &str, body: &B) -> Result<R, GeneratorClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.base_url.join(endpoint)?;

        let response = self.client.post(url).json(body).send().await?;

        if !response.status().is_success() {
            return Err(GeneratorClientError::from_http_response(
                response.status().as_u16(),
                response.text().await.unwrap_or_default(),
            ));
        }

        let json: Value = response.json().await?;
        let parsed: R = serde_json::from_value(json)?;

        Ok(parsed)
    }
}
