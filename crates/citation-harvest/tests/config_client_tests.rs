//! Configuration and client tests.
//!
//! Tests actual behavior, not constants.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use citation_harvest::config::{Config, api, fields};
use citation_harvest::{ClientError, HarvestContext, OpenAlexClient, SemanticScholarClient};

// =============================================================================
// Config Behavior Tests
// =============================================================================

#[test]
fn test_config_default_has_no_api_key() {
    let config = Config::default();
    assert!(!config.has_api_key());
}

#[test]
fn test_config_with_api_key() {
    let config = Config::new(Some("test-key".to_string()));
    assert!(config.has_api_key());
    assert_eq!(config.api_key.as_deref(), Some("test-key"));
}

#[test]
fn test_config_keeps_fixed_page_delay_with_key() {
    let config = Config::new(Some("test-key".to_string()));
    assert_eq!(config.page_delay, Duration::from_millis(200));
}

// =============================================================================
// Client Behavior Tests
// =============================================================================

#[test]
fn test_client_creation_succeeds() {
    let config = Config::default();
    assert!(OpenAlexClient::new(&config).is_ok());
    assert!(SemanticScholarClient::new(&config).is_ok());
}

#[test]
fn test_client_rejects_invalid_api_key_header() {
    let config = Config::new(Some("bad\nkey".to_string()));
    assert!(SemanticScholarClient::new(&config).is_err());
}

#[test]
fn test_client_reports_api_key_status() {
    let client = SemanticScholarClient::new(&Config::new(Some("key".to_string()))).unwrap();
    assert!(client.has_api_key());

    let client_no_key = SemanticScholarClient::new(&Config::default()).unwrap();
    assert!(!client_no_key.has_api_key());
}

#[test]
fn test_client_debug_hides_api_key() {
    let config = Config::new(Some("super-secret-key".to_string()));
    let client = SemanticScholarClient::new(&config).unwrap();
    let debug = format!("{client:?}");
    assert!(!debug.contains("super-secret-key"));
    assert!(debug.contains("has_api_key"));
}

#[test]
fn test_client_carries_page_delay() {
    let mut config = Config::for_testing("http://127.0.0.1:1");
    config.page_delay = Duration::from_millis(75);
    let client = SemanticScholarClient::new(&config).unwrap();
    assert_eq!(client.page_delay(), Duration::from_millis(75));
}

#[test]
fn test_harvest_context_from_config() {
    let config = Config::for_testing("http://127.0.0.1:1");
    let ctx = HarvestContext::from_config(&config).unwrap();
    let cloned = ctx.clone();
    assert!(!cloned.semantic_scholar.has_api_key());
}

// =============================================================================
// Request Headers and Status Mapping
// =============================================================================

const LOOKUP_PATH: &str = "/graph/v1/paper/DOI:10.1/example";

async fn lookup_with_status(template: ResponseTemplate) -> ClientError {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LOOKUP_PATH))
        .respond_with(template)
        .mount(&mock_server)
        .await;

    let client = SemanticScholarClient::new(&Config::for_testing(&mock_server.uri())).unwrap();
    client.get_paper_by_doi("10.1/example", fields::PAPER_ID).await.unwrap_err()
}

#[tokio::test]
async fn test_api_key_and_default_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LOOKUP_PATH))
        .and(header("x-api-key", "test-key"))
        .and(header("accept", "application/json"))
        .and(header("user-agent", api::USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"paperId": "P1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = Config::for_testing(&mock_server.uri());
    config.api_key = Some("test-key".to_string());
    let client = SemanticScholarClient::new(&config).unwrap();

    let paper = client.get_paper_by_doi("10.1/example", fields::PAPER_ID).await.unwrap();
    assert_eq!(paper.id(), Some("P1"));
}

#[tokio::test]
async fn test_not_found_maps_to_not_found() {
    let err = lookup_with_status(ResponseTemplate::new(404).set_body_string("Paper not found")).await;
    assert!(matches!(err, ClientError::NotFound { .. }));
}

#[tokio::test]
async fn test_too_many_requests_maps_to_rate_limited() {
    let err = lookup_with_status(ResponseTemplate::new(429).insert_header("Retry-After", "7")).await;
    assert!(matches!(err, ClientError::RateLimited));
}

#[tokio::test]
async fn test_server_error_keeps_status() {
    let err = lookup_with_status(ResponseTemplate::new(503).set_body_string("down")).await;
    assert!(matches!(err, ClientError::Server { status: 503, .. }));
    assert!(err.to_string().contains("down"));
}

#[tokio::test]
async fn test_unexpected_status() {
    let err = lookup_with_status(ResponseTemplate::new(403).set_body_string("forbidden")).await;
    assert!(matches!(err, ClientError::UnexpectedStatus { status: 403, .. }));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let err = lookup_with_status(ResponseTemplate::new(200).set_body_json(json!([1, 2, 3]))).await;
    assert!(matches!(err, ClientError::Parse(_)));
}

#[tokio::test]
async fn test_slow_response_is_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LOOKUP_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"paperId": "P1"}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let mut config = Config::for_testing(&mock_server.uri());
    config.request_timeout = Duration::from_millis(200);
    let client = SemanticScholarClient::new(&config).unwrap();

    let err = client.get_paper_by_doi("10.1/example", fields::PAPER_ID).await.unwrap_err();
    assert!(matches!(err, ClientError::Timeout(d) if d == Duration::from_millis(200)));
}
