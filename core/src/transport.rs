//! Executors for `HttpRequest` values.
//!
//! # Design
//! A `Transport` runs one request to completion and hands the response back
//! as data. It blocks; the repository calls it from tokio's
//! blocking pool, so the async side never waits on a socket. Status codes are
//! not interpreted here; `PropertyClient::parse_*` does that.

use std::time::Duration;

use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

pub trait Transport: Send + Sync + 'static {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Settings for `UreqTransport`.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Upper bound for the whole round-trip, connect included.
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }
}

/// `Transport` backed by a shared `ureq` agent.
///
/// 4xx/5xx responses are returned as data rather than `Err`, letting the
/// client handle status interpretation.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(config: &TransportConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(config.timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(&TransportConfig::default())
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), path = %request.path, "executing request");

        let mut builder = match request.method {
            HttpMethod::Get => self.agent.get(&request.path),
        };
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        let mut response = builder
            .call()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.as_str().to_string(), v.to_str().unwrap_or_default().to_string()))
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        debug!(status, bytes = body.len(), "response received");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
