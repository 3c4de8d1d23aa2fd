//! HTTP client wrapper: the single egress point for backend REST calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request gets a cache-busting `_t` query parameter and, once a
//! session is established, the default bearer header. The session layer
//! owns the refresh-and-replay protocol; this layer performs exactly one
//! wire exchange per `send` call.
//!
//! Client-side (hydrate): real HTTP via `gloo-net` with a fixed 10s
//! timeout. Server-side (SSR): the transport reports a network error, since
//! these endpoints are only meaningful in the browser.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::cell::RefCell;

/// Compile-time override for the backend base URL.
pub const BASE_URL_ENV: Option<&str> = option_env!("FACEMATCH_API_URL");

/// Fallback backend base URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000/api";

/// Fixed per-request timeout.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// HTTP methods used by the REST contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A request description. Built once by the caller and never mutated by the
/// transport or the retry logic; replay re-sends the same value.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Backend path relative to the base URL, e.g. `/auth/login`.
    pub path: String,
    /// JSON body for POST/PUT/DELETE requests.
    pub body: Option<serde_json::Value>,
    /// Extra query parameters, appended before the cache buster.
    pub params: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None, params: Vec::new() }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self { method: Method::Post, path: path.into(), body: None, params: Vec::new() }
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self { method: Method::Put, path: path.into(), body: None, params: Vec::new() }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: Method::Delete, path: path.into(), body: None, params: Vec::new() }
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }
}

/// A decoded HTTP response. Non-2xx statuses still come back as responses
/// from the transport; `HttpClient::send` turns them into [`ApiError`].
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    /// Parsed JSON body, `Null` when empty or not JSON.
    pub body: serde_json::Value,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Human-readable message supplied by the backend, when present.
    pub fn server_message(&self) -> Option<String> {
        server_message(&self.body)
    }
}

/// Errors surfaced by the HTTP layer and the session protocol on top of it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response was received at all.
    #[error("network error: {0}")]
    Network(String),
    /// The 10-second request deadline elapsed.
    #[error("request timed out")]
    Timeout,
    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// Authorization could not be restored; the session has ended.
    #[error("session expired")]
    SessionExpired,
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }

    /// Message suitable for display near the point of interaction: the
    /// backend's own text when it sent one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// A fully prepared wire request handed to the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    /// Absolute URL including query string and cache buster.
    pub url: String,
    pub body: Option<serde_json::Value>,
    /// `Authorization` header value, when a session is established.
    pub bearer: Option<String>,
}

/// One HTTP exchange. Implementations must not retry; the session layer
/// owns the single refresh-and-replay allowance.
pub trait Transport {
    async fn perform(&self, request: &PreparedRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport> Transport for std::rc::Rc<T> {
    async fn perform(&self, request: &PreparedRequest) -> Result<HttpResponse, ApiError> {
        (**self).perform(request).await
    }
}

/// Browser transport backed by `gloo-net`, racing each request against the
/// fixed timeout.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[cfg(feature = "hydrate")]
impl Transport for FetchTransport {
    async fn perform(&self, request: &PreparedRequest) -> Result<HttpResponse, ApiError> {
        let exchange = async {
            let builder = match request.method {
                Method::Get => gloo_net::http::Request::get(&request.url),
                Method::Post => gloo_net::http::Request::post(&request.url),
                Method::Put => gloo_net::http::Request::put(&request.url),
                Method::Delete => gloo_net::http::Request::delete(&request.url),
            };
            let builder = match &request.bearer {
                Some(bearer) => builder.header("Authorization", bearer),
                None => builder,
            };
            let outgoing = match &request.body {
                Some(body) => builder.json(body).map_err(|e| ApiError::Network(e.to_string()))?,
                None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
            };
            let response = outgoing.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = response.status();
            let body = match response.text().await {
                Ok(text) => serde_json::from_str(&text).unwrap_or(serde_json::Value::Null),
                Err(_) => serde_json::Value::Null,
            };
            Ok(HttpResponse { status, body })
        };
        futures::pin_mut!(exchange);
        let deadline = gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS);
        match futures::future::select(exchange, deadline).await {
            futures::future::Either::Left((result, _)) => result,
            futures::future::Either::Right(((), _)) => Err(ApiError::Timeout),
        }
    }
}

/// Non-browser fallback: the backend is unreachable during SSR, so every
/// exchange degrades to a network error the callers already handle.
#[cfg(not(feature = "hydrate"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineTransport;

#[cfg(not(feature = "hydrate"))]
impl Transport for OfflineTransport {
    async fn perform(&self, _request: &PreparedRequest) -> Result<HttpResponse, ApiError> {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Transport selected by the build: real fetch in the browser, the offline
/// stub everywhere else.
#[cfg(feature = "hydrate")]
pub type DefaultTransport = FetchTransport;
#[cfg(not(feature = "hydrate"))]
pub type DefaultTransport = OfflineTransport;

/// Configured HTTP client: base URL, transport, and the default bearer
/// token applied to every subsequent request.
#[derive(Debug)]
pub struct HttpClient<T: Transport> {
    base_url: String,
    transport: T,
    auth: RefCell<Option<String>>,
}

impl<T: Transport> HttpClient<T> {
    /// Client against the environment-provided base URL (or the local
    /// default).
    pub fn new(transport: T) -> Self {
        Self::with_base_url(transport, BASE_URL_ENV.unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn with_base_url(transport: T, base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), transport, auth: RefCell::new(None) }
    }

    /// Set or clear the default bearer token. `None` removes the header
    /// from all subsequent requests.
    pub fn set_auth_token(&self, token: Option<String>) {
        *self.auth.borrow_mut() = token;
    }

    /// Currently configured bearer token, if any.
    pub fn auth_token(&self) -> Option<String> {
        self.auth.borrow().clone()
    }

    /// Perform one request. Non-2xx statuses become [`ApiError::Status`]
    /// with the backend's message attached when it sent one.
    pub async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = build_url(&self.base_url, &request.path, &request.params, cache_bust_stamp());
        let prepared = PreparedRequest {
            method: request.method,
            url,
            body: request.body.clone(),
            bearer: self.auth.borrow().as_deref().map(bearer_value),
        };
        let response = self.transport.perform(&prepared).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status { status: response.status, message: response.server_message() })
        }
    }
}

/// Join base URL, path, caller parameters, and the cache buster into the
/// final request URL.
fn build_url(base_url: &str, path: &str, params: &[(String, String)], stamp: u64) -> String {
    let mut url = format!("{}{path}", base_url.trim_end_matches('/'));
    let mut separator = if url.contains('?') { '&' } else { '?' };
    for (key, value) in params {
        url.push(separator);
        url.push_str(key);
        url.push('=');
        url.push_str(value);
        separator = '&';
    }
    url.push(separator);
    url.push_str("_t=");
    url.push_str(&stamp.to_string());
    url
}

/// `Authorization` header value for a raw token.
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Extract the backend's human-readable message from an error body. The
/// backend uses `error` for failures; `message` is accepted as a fallback.
fn server_message(body: &serde_json::Value) -> Option<String> {
    body.get("error")
        .and_then(serde_json::Value::as_str)
        .or_else(|| body.get("message").and_then(serde_json::Value::as_str))
        .map(str::to_owned)
}

/// Milliseconds since the Unix epoch, used as the cache-busting value.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn cache_bust_stamp() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis() as u64)
    }
}
