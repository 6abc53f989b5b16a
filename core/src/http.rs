//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. `PropertyClient` builds
//! `HttpRequest` values and parses `HttpResponse` values without touching the
//! network; whoever executes the round-trip (a `Transport` implementation on
//! the Rust side, or a mobile host across the C ABI) owns the I/O.
//!
//! All fields use owned types so values can cross FFI boundaries without
//! lifetime concerns.

/// HTTP method for a request. The listing API is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the executor after running an `HttpRequest`, then passed
/// to `PropertyClient::parse_*` methods. Non-2xx statuses are carried here
/// as data, not as errors.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Shorthand for a response without headers.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}
