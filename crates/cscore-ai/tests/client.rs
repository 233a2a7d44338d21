//! Integration tests for `InsightClient` using wiremock HTTP mocks.

use cscore_ai::{InsightClient, InsightError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> InsightClient {
    InsightClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn trend_relevance_returns_parsed_score() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "ok",
        "data": {
            "score": 8.5,
            "feedback": "Captions track current formats well"
        }
    });

    Mock::given(method("POST"))
        .and(path("/trend-relevance"))
        .and(header("x-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let trend = client
        .trend_relevance(&["spring haul".to_string()])
        .await
        .expect("should parse trend relevance");

    assert!((trend.score - 8.5).abs() < 1e-9);
    assert_eq!(trend.feedback, "Captions track current formats well");
}

#[tokio::test]
async fn niches_returns_primary_and_secondary() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "ok",
        "data": {
            "primary": "fitness",
            "secondary": ["food", "travel"]
        }
    });

    Mock::given(method("POST"))
        .and(path("/niches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let niches = client
        .niches(&["leg day".to_string()])
        .await
        .expect("should parse niches");

    assert_eq!(niches.primary, "fitness");
    assert_eq!(niches.secondary, vec!["food", "travel"]);
}

#[tokio::test]
async fn visual_quality_returns_three_axes() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "ok",
        "data": {
            "lighting": 9.0,
            "editing": 8.0,
            "aesthetics": 7.0
        }
    });

    Mock::given(method("POST"))
        .and(path("/visual-quality"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let vq = client
        .visual_quality(&["https://cdn.example/1.jpg".to_string()])
        .await
        .expect("should parse visual quality");

    assert!((vq.average() - 8.0).abs() < 1e-9);
}

#[tokio::test]
async fn api_error_envelope_surfaces_as_api_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "error",
        "error": "monthly quota exhausted"
    });

    Mock::given(method("POST"))
        .and(path("/trend-relevance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.trend_relevance(&["caption".to_string()]).await;

    assert!(
        matches!(result, Err(InsightError::Api(ref msg)) if msg == "monthly quota exhausted"),
        "expected Api error, got: {result:?}"
    );
}

#[tokio::test]
async fn http_500_surfaces_as_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/hashtags"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.hashtags(&["#ad".to_string()]).await;

    assert!(
        matches!(result, Err(InsightError::Http(_))),
        "expected Http error, got: {result:?}"
    );
}

#[tokio::test]
async fn malformed_body_surfaces_as_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/consistency"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .consistency(&["https://cdn.example/1.jpg".to_string()])
        .await;

    assert!(
        matches!(result, Err(InsightError::Deserialize { .. })),
        "expected Deserialize error, got: {result:?}"
    );
}

#[tokio::test]
async fn mismatched_payload_surfaces_as_deserialize_error() {
    let server = MockServer::start().await;

    // Valid envelope, wrong payload shape for a consistency score.
    let body = serde_json::json!({
        "status": "ok",
        "data": { "unexpected": true }
    });

    Mock::given(method("POST"))
        .and(path("/consistency"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client
        .consistency(&["https://cdn.example/1.jpg".to_string()])
        .await;

    assert!(
        matches!(result, Err(InsightError::Deserialize { .. })),
        "expected Deserialize error, got: {result:?}"
    );
}

#[tokio::test]
async fn health_up_reports_available() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert!(client.health().await);
}

#[tokio::test]
async fn health_down_reports_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert!(!client.health().await);
}
