//! Photo provider against a real HTTP server (wiremock) through reqwest.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::page_json;
use marsdeck::adapters::ReqwestHttpClient;
use marsdeck::config::DeckConfig;
use marsdeck::error::FetchError;
use marsdeck::provider::{probe_image, ApiPhotoSource, RetryPolicy};
use marsdeck::traits::PhotoSource;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fast_retry() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        initial_backoff: Duration::from_millis(10),
        max_backoff: Duration::from_millis(20),
        multiplier: 2.0,
    }
}

fn source_for(server: &MockServer, config: DeckConfig) -> ApiPhotoSource<ReqwestHttpClient> {
    let config = config.with_api_base_url(server.uri());
    let client = Arc::new(ReqwestHttpClient::with_timeout(Duration::from_secs(5)));
    ApiPhotoSource::new(client, &config)
}

#[tokio::test]
async fn test_fetch_page_with_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photos"))
        .and(query_param("page", "2"))
        .and(query_param("sol", "1000"))
        .and(query_param("api_key", "DEMO_KEY"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_json(&[102693, 102694])))
        .expect(1)
        .mount(&server)
        .await;

    let source = source_for(&server, DeckConfig::default());
    let photos = source.fetch_photos(2).await.expect("page 2");

    assert_eq!(photos.len(), 2);
    assert_eq!(photos[0].id, 102693);
    assert_eq!(photos[0].image_url, "https://mars.example.com/102693.jpg");
}

#[tokio::test]
async fn test_server_error_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photos"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/photos"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_json(&[7])))
        .mount(&server)
        .await;

    let source = source_for(&server, DeckConfig::default().with_retry(fast_retry()));
    let photos = source.fetch_photos(1).await.expect("retried page");

    assert_eq!(photos.iter().map(|p| p.id).collect::<Vec<_>>(), vec![7]);
}

#[tokio::test]
async fn test_client_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photos"))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key invalid"))
        .expect(1)
        .mount(&server)
        .await;

    let source = source_for(&server, DeckConfig::default().with_retry(fast_retry()));
    let err = source.fetch_photos(1).await.unwrap_err();

    assert!(matches!(err, FetchError::HttpStatus { status: 403, .. }));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_malformed_payload_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let source = source_for(&server, DeckConfig::default().with_retry(fast_retry()));
    let err = source.fetch_photos(1).await.unwrap_err();

    assert!(matches!(err, FetchError::Parse { .. }));
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(page_json(&[1]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = DeckConfig::default()
        .with_retry(RetryPolicy::none())
        .with_fetch_timeout(Duration::from_millis(100));
    let source = source_for(&server, config);
    let err = source.fetch_photos(1).await.unwrap_err();

    assert!(matches!(err, FetchError::Timeout { page: 1, .. }));
}

#[tokio::test]
async fn test_probe_image() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ok.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFFu8; 512]))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/missing.jpg"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = ReqwestHttpClient::new();
    assert_eq!(probe_image(&client, &format!("{}/ok.jpg", server.uri())).await, Ok(512));
    assert!(probe_image(&client, &format!("{}/missing.jpg", server.uri()))
        .await
        .is_err());
}
