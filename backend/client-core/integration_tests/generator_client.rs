//! Generator API client against a mock HTTP server.

use client_core::error::GeneratorClientError;
use client_core::generator_client::GeneratorClient;

use common::HttpStatusCode;
use models::{CharacterClass, GenerationRequestBuilder, GenerationStyle};

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies the wire shape of the generate request and the parsed result.
///
/// **WHY THIS MATTERS**: The server reads flat fields (`length`, `type`, one bool
/// per class). A nested or renamed field silently falls back to server defaults.
///
/// **BUG THIS CATCHES**: Would catch a lost `#[serde(flatten)]` on the class
/// flags or a lost `rename = "type"` on the style.
#[tokio::test]
async fn given_generation_request_when_sent_then_flat_json_body_and_parsed_result() {
    // GIVEN: A server expecting the exact body
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate-password"))
        .and(body_json(json!({
            "length": 16,
            "type": "easy-to-read",
            "uppercase": true,
            "lowercase": true,
            "numbers": false,
            "special": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "password": "Ab12!xyz",
            "strength": { "score": 82, "level": "Fuerte" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeneratorClient::new(&server.uri(), None).unwrap();
    let request = GenerationRequestBuilder::default()
        .with_length(16)
        .with_style(GenerationStyle::EasyToRead)
        .with_class(CharacterClass::Numbers, false)
        .build()
        .unwrap();

    // WHEN: Generating
    let result = client.generate(&request).await.unwrap();

    // THEN: Password and strength parsed
    assert_eq!(result.password.as_str(), "Ab12!xyz");
    assert_eq!(result.strength.score, 82);
    assert_eq!(result.strength.level, "Fuerte");
}

/// **VALUE**: Verifies non-2xx responses become `Server` errors with the status.
///
/// **WHY THIS MATTERS**: The page decides between the error placeholder and a
/// password on this result; a 500 body must never be parsed as a password.
#[tokio::test]
async fn given_server_returns_500_when_generating_then_server_error_with_status() {
    // GIVEN: A failing server
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate-password"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = GeneratorClient::new(&server.uri(), None).unwrap();
    let request = GenerationRequestBuilder::default().with_length(12).build().unwrap();

    // WHEN: Generating
    let err = client.generate(&request).await.unwrap_err();

    // THEN: Server error with status and body
    assert_eq!(err.status_code(), Some(HttpStatusCode(500)));
    assert_eq!(err.error_category(), "server_error");
    assert!(format!("{}", err).contains("Internal Server Error"));
}

#[tokio::test]
async fn given_malformed_body_when_generating_then_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate-password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": "nope" })))
        .mount(&server)
        .await;

    let client = GeneratorClient::new(&server.uri(), None).unwrap();
    let request = GenerationRequestBuilder::default().with_length(12).build().unwrap();

    let err = client.generate(&request).await.unwrap_err();

    assert!(matches!(err, GeneratorClientError::Json { .. }));
}

#[tokio::test]
async fn given_password_when_checked_then_body_has_password_and_level_is_optional() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/check-password"))
        .and(body_json(json!({ "password": "Ab12!xyz" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "strength": { "score": 82 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeneratorClient::new(&server.uri(), None).unwrap();

    let analysis = client.check("Ab12!xyz").await.unwrap();

    assert_eq!(analysis.strength.score, 82);
    assert_eq!(analysis.strength.level, None);
}

/// **VALUE**: Verifies a base URL with a path prefix is preserved.
///
/// **BUG THIS CATCHES**: Would catch `Url::join` replacing the last path
/// segment when the trailing slash is missing.
#[tokio::test]
async fn given_base_url_with_path_when_generating_then_prefix_kept() {
    // GIVEN: Generator mounted under /tools
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tools/api/generate-password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "password": "prefixed",
            "strength": { "score": 40, "level": "Media" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Client rooted at /tools without trailing slash
    let client = GeneratorClient::new(&format!("{}/tools", server.uri()), None).unwrap();
    let request = GenerationRequestBuilder::default().with_length(12).build().unwrap();
    let result = client.generate(&request).await.unwrap();

    // THEN: Prefix kept
    assert_eq!(result.password.as_str(), "prefixed");
    assert_eq!(client.base_url().path(), "/tools/");
}

#[tokio::test]
async fn given_short_timeout_and_slow_server_when_generating_then_timeout_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate-password"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "password": "late",
                    "strength": { "score": 40, "level": "Media" }
                }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client =
        GeneratorClient::new(&server.uri(), Some(Duration::from_millis(100))).unwrap();
    let request = GenerationRequestBuilder::default().with_length(12).build().unwrap();

    let err = client.generate(&request).await.unwrap_err();

    assert_eq!(err.error_category(), "timeout");
}

#[test]
fn given_invalid_base_url_when_creating_client_then_url_parse_error() {
    let result = GeneratorClient::new("not a url", None);

    assert!(matches!(result, Err(GeneratorClientError::UrlParse { .. })));
}
