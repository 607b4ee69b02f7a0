//! Fetch tests against a local mock server.

use serde_json::json;
use sheetsync_core::SyncError;
use sheetsync_http::{fetch_json, FetchParams, HttpClient, HttpMethod};
use std::collections::HashMap;
use tokio::runtime::Runtime;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a mock server on its own runtime.
///
/// The blocking client must not run inside an async runtime, so the server
/// lives on background worker threads and requests are issued from the test
/// thread. The returned runtime keeps the server alive.
fn serve(mock: Mock) -> (Runtime, MockServer) {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;
        mock.mount(&server).await;
        server
    });
    (rt, server)
}

#[test]
fn test_fetch_json_returns_payload() {
    let mock = Mock::given(method("GET"))
        .and(path("/data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rows": [1, 2]})));
    let (_rt, server) = serve(mock);

    let client = HttpClient::new().unwrap();
    let url = format!("{}/data", server.uri());
    let value = fetch_json(&client, &url, &FetchParams::default()).unwrap();

    assert_eq!(value, Some(json!({"rows": [1, 2]})));
}

#[test]
fn test_fetch_json_sends_method_headers_and_body() {
    let mock = Mock::given(method("POST"))
        .and(path("/ingest"))
        .and(header("x-api-key", "secret"))
        .and(body_string(r#"{"a":1}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})));
    let (_rt, server) = serve(mock);

    let mut headers = HashMap::new();
    headers.insert("x-api-key".to_string(), "secret".to_string());
    let params = FetchParams {
        method: HttpMethod::Post,
        headers,
        body: Some(r#"{"a":1}"#.to_string()),
        ..FetchParams::default()
    };

    let client = HttpClient::new().unwrap();
    let url = format!("{}/ingest", server.uri());
    let value = fetch_json(&client, &url, &params).unwrap();

    assert_eq!(value, Some(json!({"ok": true})));
}

#[test]
fn test_fetch_json_non_success_status_is_transport_error() {
    let mock = Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500));
    let (_rt, server) = serve(mock);

    let client = HttpClient::new().unwrap();
    let url = format!("{}/broken", server.uri());
    let err = fetch_json(&client, &url, &FetchParams::default()).unwrap_err();

    assert!(matches!(err, SyncError::Http(_)));
    assert!(err.to_string().contains("500"));
}

#[test]
fn test_fetch_json_muted_status_exposes_error_envelope() {
    let body = json!({"error": {"message": "bad request"}});
    let mock = Mock::given(method("GET"))
        .and(path("/envelope"))
        .respond_with(ResponseTemplate::new(400).set_body_json(body));
    let (_rt, server) = serve(mock);

    let params = FetchParams {
        mute_http_errors: true,
        ..FetchParams::default()
    };

    let client = HttpClient::new().unwrap();
    let url = format!("{}/envelope", server.uri());
    let err = fetch_json(&client, &url, &params).unwrap_err();

    assert!(matches!(err, SyncError::Api(_)));
    assert_eq!(err.to_string(), "bad request");
}

#[test]
fn test_fetch_json_html_body_yields_none() {
    let mock = Mock::given(method("GET"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>sign in</html>"));
    let (_rt, server) = serve(mock);

    let client = HttpClient::new().unwrap();
    let url = format!("{}/login", server.uri());
    let value = fetch_json(&client, &url, &FetchParams::default()).unwrap();

    assert_eq!(value, None);
}
