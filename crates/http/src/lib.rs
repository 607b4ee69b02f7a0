//! # sheetsync-http
//!
//! Blocking HTTP client and JSON envelope handling.
//!
//! [`fetch_json`] performs one request, parses the body as JSON, and splits
//! the conventional `{"error": ...}` envelope from ordinary payloads. No
//! retries, no pagination.

use reqwest::blocking::Client;
use serde_json::Value as JsonValue;
use sheetsync_core::{SyncError, SyncResult};
use std::collections::HashMap;
use std::time::Duration;

/// Options for HTTP requests.
#[derive(Debug, Clone, Default)]
pub struct FetchParams {
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
    pub timeout_secs: Option<u64>,
    /// When set, a non-success status still returns the body so the caller
    /// can inspect the error envelope instead of failing at the transport.
    pub mute_http_errors: bool,
}

/// HTTP methods.
#[derive(Debug, Clone, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

/// A blocking HTTP transport returning response bodies as text.
///
/// [`HttpClient`] is the real implementation; tests substitute canned bodies.
pub trait HttpTransport {
    /// Perform one request and return the response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, or on a non-success status
    /// unless `params.mute_http_errors` is set.
    fn fetch(&self, url: &str, params: &FetchParams) -> SyncResult<String>;
}

/// HTTP client for endpoint fetching.
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Constructs a new `HttpClient`.
    ///
    /// The created client uses a 30-second default timeout and is configured
    /// to bypass system proxy lookup.
    ///
    /// # Errors
    ///
    /// Returns an `Http` error if building the underlying client fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use sheetsync_http::HttpClient;
    /// let client = HttpClient::new().expect("failed to create HttpClient");
    /// ```
    pub fn new() -> SyncResult<Self> {
        Self::with_timeout(30)
    }

    /// Constructs an `HttpClient` with a custom default timeout in seconds.
    ///
    /// # Errors
    ///
    /// Returns an `Http` error if building the underlying client fails.
    pub fn with_timeout(timeout_secs: u64) -> SyncResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            // Disable system proxy lookup to avoid macOS system-configuration issues
            .no_proxy()
            .build()
            .map_err(|e| SyncError::Http(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new().expect("Failed to create HTTP client")
    }
}

impl HttpTransport for HttpClient {
    fn fetch(&self, url: &str, params: &FetchParams) -> SyncResult<String> {
        let mut request = match params.method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Put => self.client.put(url),
            HttpMethod::Delete => self.client.delete(url),
            HttpMethod::Patch => self.client.patch(url),
        };

        // Add headers
        for (key, value) in &params.headers {
            request = request.header(key, value);
        }

        // Add body if present
        if let Some(body) = &params.body {
            request = request.body(body.clone());
        }

        // Set timeout if specified
        if let Some(timeout) = params.timeout_secs {
            request = request.timeout(Duration::from_secs(timeout));
        }

        let response = request.send().map_err(|e| SyncError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() && !params.mute_http_errors {
            return Err(SyncError::Http(format!(
                "HTTP {} - {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response.text().map_err(|e| SyncError::Http(e.to_string()))
    }
}

/// A parsed response body, split into payload or error envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// An ordinary payload, returned to the caller as-is.
    Payload(JsonValue),
    /// The error descriptor found under a truthy `error` field.
    Error(JsonValue),
}

impl Envelope {
    /// Classify a parsed body.
    ///
    /// The `error` field counts only when truthy under JSON rules; `null`,
    /// `false`, `0`, and `""` mark the body as a payload, as does any
    /// non-object body.
    #[must_use]
    pub fn from_value(value: JsonValue) -> Envelope {
        match value.get("error") {
            Some(descriptor) if is_truthy(descriptor) => Envelope::Error(descriptor.clone()),
            _ => Envelope::Payload(value),
        }
    }
}

fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64() != Some(0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}

fn pretty(value: &JsonValue) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Message for an error descriptor: its truthy scalar `message` field
/// rendered as text, else the whole descriptor pretty-printed.
fn error_message(descriptor: &JsonValue) -> String {
    match descriptor.get("message") {
        Some(JsonValue::String(s)) if !s.is_empty() => s.clone(),
        Some(m @ (JsonValue::Bool(_) | JsonValue::Number(_))) if is_truthy(m) => m.to_string(),
        _ => pretty(descriptor),
    }
}

/// Fetch a URL and parse the response body as JSON.
///
/// Returns the parsed value, whatever its JSON type. A body that is not
/// valid JSON is logged and yields `Ok(None)`; an error envelope is logged
/// and raised as an `Api` failure whose message is the descriptor's
/// `message` field (else the descriptor itself, serialized).
///
/// # Errors
///
/// Returns a transport error from the underlying fetch, or an `Api` error
/// when the body carries an error envelope.
pub fn fetch_json<T>(transport: &T, url: &str, params: &FetchParams) -> SyncResult<Option<JsonValue>>
where
    T: HttpTransport + ?Sized,
{
    let body = transport.fetch(url, params)?;

    let Ok(value) = serde_json::from_str::<JsonValue>(&body) else {
        tracing::warn!("response is not valid JSON:\n{body}");
        return Ok(None);
    };

    match Envelope::from_value(value) {
        Envelope::Error(descriptor) => {
            tracing::error!("endpoint returned an error:\n{}", pretty(&descriptor));
            Err(SyncError::Api(error_message(&descriptor)))
        }
        Envelope::Payload(value) => Ok(Some(value)),
    }
}
