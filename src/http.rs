//! HTTP client abstraction for testability.

use std::future::Future;
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Errors surfaced by HTTP clients.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HttpError {
    /// The request produced no response: connect, timeout, or read failure
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status {
        status: u16,
        url: String,
        /// Response body, kept for error reporting
        body: String,
    },
}

impl HttpError {
    /// The HTTP status code, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Transport(_) => None,
            HttpError::Status { status, .. } => Some(*status),
        }
    }

    /// The raw response body, when the server produced one.
    pub fn body(&self) -> Option<&str> {
        match self {
            HttpError::Transport(_) => None,
            HttpError::Status { body, .. } => Some(body),
        }
    }
}

/// Trait for asynchronous HTTP GET operations.
///
/// This abstraction allows for dependency injection and easier testing
/// by enabling mock HTTP clients in tests. Every widget that talks to a
/// service endpoint is generic over it.
pub trait HttpClient: Send + Sync {
    /// Performs an async HTTP GET request.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    ///
    /// # Returns
    ///
    /// The response body as text for success statuses. A non-success status
    /// becomes [`HttpError::Status`] carrying the status code and body; a
    /// request that never produced a response becomes
    /// [`HttpError::Transport`].
    fn get(&self, url: &str) -> impl Future<Output = Result<String, HttpError>> + Send;
}

/// Real HTTP client implementation using reqwest.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

/// User-Agent string sent with every request, identifying this library.
const DEFAULT_USER_AGENT: &str = concat!("aquamap/", env!("CARGO_PKG_VERSION"));

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

impl ReqwestClient {
    /// Creates a new ReqwestClient with default configuration.
    pub fn new() -> Result<Self, HttpError> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a new ReqwestClient with a custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|e| HttpError::Transport(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new().expect("Failed to create default HTTP client")
    }
}

impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<String, HttpError> {
        trace!(url = url, "HTTP GET request starting");

        let response = match self.client.get(url).send().await {
            Ok(resp) => {
                debug!(
                    url = url,
                    status = resp.status().as_u16(),
                    "HTTP response received"
                );
                resp
            }
            Err(e) => {
                warn!(
                    url = url,
                    error = %e,
                    is_connect = e.is_connect(),
                    is_timeout = e.is_timeout(),
                    "HTTP request failed"
                );
                return Err(HttpError::Transport(e.to_string()));
            }
        };

        let status = response.status().as_u16();
        let success = response.status().is_success();

        // The body is read either way; error responses keep it for reporting.
        let body = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!(url = url, error = %e, "failed to read response body");
                return Err(HttpError::Transport(format!(
                    "failed to read response: {}",
                    e
                )));
            }
        };

        if !success {
            warn!(url = url, status = status, "HTTP error status");
            return Err(HttpError::Status {
                status,
                url: url.to_string(),
                body,
            });
        }

        trace!(url = url, bytes = body.len(), "HTTP response body read");
        Ok(body)
    }
}
