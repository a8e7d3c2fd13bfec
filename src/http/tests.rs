//! Tests for the HTTP client module

use super::*;
use crate::error::Error;
use crate::types::{ApiResponse, FetchRequest, Item, Pagination};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use test_case::test_case;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helpers
// ============================================================================

fn alpha_beta_body() -> serde_json::Value {
    json!({
        "items": [{"id": 1, "name": "Alpha"}, {"id": 2, "name": "Beta"}],
        "pagination": {"next": 20, "previous": null, "limit": 20}
    })
}

fn client_for(server: &MockServer) -> ItemsClient {
    let config = ClientConfig::builder().base_url(server.uri()).build();
    ItemsClient::with_config(config).unwrap()
}

/// Captures formatted log lines emitted on the current thread
#[derive(Clone, Default)]
struct LogBuffer {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    fn lines(&self) -> Vec<String> {
        let bytes = self.buffer.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

struct LogWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogBuffer {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            buffer: self.buffer.clone(),
        }
    }
}

fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .without_time()
        .with_env_filter(tracing_subscriber::EnvFilter::new("item_fetcher=trace"))
        .with_writer(logs.clone())
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}

/// Address with nothing listening on it
fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api/items")
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_client_config_default() {
    let config = ClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.base_url.is_none());
    assert!(config.user_agent.starts_with("item-fetcher/"));
}

#[test]
fn test_client_config_builder() {
    let config = ClientConfig::builder()
        .base_url("https://api.example.com")
        .timeout(Duration::from_secs(5))
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, Some("https://api.example.com".to_string()));
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_invalid_base_url_rejected() {
    let config = ClientConfig::builder().base_url("not a url").build();
    let err = ItemsClient::with_config(config).unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

// ============================================================================
// URL resolution
// ============================================================================

#[test_case("/api/items", "https://shop.example.com/api/items" ; "absolute path")]
#[test_case("items", "https://shop.example.com/v1/items" ; "relative path")]
#[test_case("https://other.example.com/x", "https://other.example.com/x" ; "absolute url")]
fn test_resolve_url(input: &str, expected: &str) {
    let client = ItemsClient::from_client(
        reqwest::Client::new(),
        Some("https://shop.example.com/v1/"),
    )
    .unwrap();
    assert_eq!(client.resolve_url(input).unwrap().as_str(), expected);
}

#[test]
fn test_base_url_accessor() {
    let client = ItemsClient::from_client(
        reqwest::Client::new(),
        Some("https://shop.example.com/v1/"),
    )
    .unwrap();
    assert_eq!(
        client.base_url().map(Url::as_str),
        Some("https://shop.example.com/v1/")
    );
    assert!(ItemsClient::new().unwrap().base_url().is_none());
}

#[test]
fn test_resolve_relative_without_base() {
    let client = ItemsClient::new().unwrap();
    let err = client.resolve_url("/api/items").unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidUrl(url::ParseError::RelativeUrlWithoutBase)
    ));
}

// ============================================================================
// fetch_items
// ============================================================================

#[tokio::test]
async fn test_fetch_items_returns_body_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items"))
        .and(query_param("cursor", "0"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(alpha_beta_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = fetch_items(&client, &FetchRequest::new("/api/items", 20, 0))
        .await
        .unwrap();

    assert_eq!(
        response,
        ApiResponse::new(
            vec![Item::new(1, "Alpha"), Item::new(2, "Beta")],
            Pagination::new(Some(20), None, 20),
        )
    );
    assert_eq!(serde_json::to_value(&response).unwrap(), alpha_beta_body());
}

#[tokio::test]
async fn test_fetch_items_keeps_unknown_keys() {
    let mock_server = MockServer::start().await;
    let body = json!({
        "items": [{"group": "g", "id": 1, "name": "Alpha"}],
        "pagination": {"limit": 20, "next": 20, "previous": null, "total": 99}
    });

    Mock::given(method("GET"))
        .and(path("/api/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .fetch_items(&FetchRequest::first_page("/api/items", 20))
        .await
        .unwrap();

    assert_eq!(response.pagination.extra["total"], 99);
    assert_eq!(serde_json::to_value(&response).unwrap(), body);
}

#[tokio::test]
async fn test_fetch_items_sends_only_cursor_and_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(alpha_beta_body()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .fetch_items(&FetchRequest::new("/api/items", 50, 150))
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let params: Vec<(String, String)> = requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        params,
        vec![
            ("cursor".to_string(), "150".to_string()),
            ("limit".to_string(), "50".to_string()),
        ]
    );
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_fetch_items_forwards_negative_cursor() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items"))
        .and(query_param("cursor", "-5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(alpha_beta_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(client
        .fetch_items(&FetchRequest::new("/api/items", 20, -5))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_fetch_items_absolute_url_without_base() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/options"))
        .respond_with(ResponseTemplate::new(200).set_body_json(alpha_beta_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ItemsClient::new().unwrap();
    let url = format!("{}/options", mock_server.uri());
    let response = client
        .fetch_items(&FetchRequest::first_page(url, 20))
        .await
        .unwrap();
    assert_eq!(response.len(), 2);
}

#[tokio::test]
async fn test_fetch_items_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .fetch_items(&FetchRequest::new("/api/items", 20, 0))
        .await
        .unwrap_err();

    assert!(err.is_fetch_failure());
    assert_eq!(err.status(), Some(500));
}

#[test_case(404 ; "not found")]
#[test_case(400 ; "bad request")]
#[test_case(503 ; "unavailable")]
#[tokio::test]
async fn test_fetch_items_non_success_status(status: u16) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status).set_body_json(alpha_beta_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .fetch_items(&FetchRequest::new("/api/items", 20, 0))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(status));
}

#[tokio::test]
async fn test_fetch_items_invalid_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .fetch_items(&FetchRequest::new("/api/items", 20, 0))
        .await
        .unwrap_err();

    assert!(err.as_fetch().unwrap().is_decode());
}

#[tokio::test]
async fn test_fetch_items_shape_mismatch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .fetch_items(&FetchRequest::new("/api/items", 20, 0))
        .await
        .unwrap_err();

    assert!(err.is_fetch_failure());
    assert!(err.as_fetch().unwrap().is_decode());
}

#[tokio::test]
async fn test_fetch_items_connection_refused() {
    let client = ItemsClient::new().unwrap();
    let err = client
        .fetch_items(&FetchRequest::first_page(refused_url(), 20))
        .await
        .unwrap_err();

    let transport = err.as_fetch().unwrap();
    assert!(transport.is_connect());
    assert!(transport.status().is_none());
}

// ============================================================================
// Logging
// ============================================================================

#[tokio::test]
async fn test_failure_logs_exactly_once() {
    let (logs, _guard) = capture_logs();

    let client = ItemsClient::new().unwrap();
    let result = client
        .fetch_items(&FetchRequest::first_page(refused_url(), 20))
        .await;
    assert!(result.is_err());

    let lines = logs.lines();
    assert_eq!(lines.len(), 1, "unexpected log lines: {lines:?}");
    assert!(lines[0].contains("ERROR"));
    assert!(lines[0].contains("Error fetching items"));
}

#[tokio::test]
async fn test_status_failure_logs_exactly_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let (logs, _guard) = capture_logs();
    let client = client_for(&mock_server);
    let _ = client
        .fetch_items(&FetchRequest::new("/api/items", 20, 0))
        .await;

    let errors: Vec<String> = logs
        .lines()
        .into_iter()
        .filter(|l| l.contains("ERROR"))
        .collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("500"));
}

#[tokio::test]
async fn test_invalid_url_logged_before_sending() {
    let (logs, _guard) = capture_logs();

    let client = ItemsClient::new().unwrap();
    let err = client
        .fetch_items(&FetchRequest::new("/api/items", 20, 0))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidUrl(_)));
    assert_eq!(logs.lines().len(), 1);
}

#[tokio::test]
async fn test_success_logs_no_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(alpha_beta_body()))
        .mount(&mock_server)
        .await;

    let (logs, _guard) = capture_logs();
    let client = client_for(&mock_server);
    client
        .fetch_items(&FetchRequest::new("/api/items", 20, 0))
        .await
        .unwrap();

    assert!(logs.lines().iter().all(|l| !l.contains("ERROR")));
}
