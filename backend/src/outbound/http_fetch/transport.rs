//! Single-attempt HTTP GET transport.
//!
//! The transport performs exactly one request and reports what came back.
//! Timeouts and retries belong to [`super::ResilientFetcher`].

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

/// User agent sent with every upstream request.
pub const DEFAULT_USER_AGENT: &str = "nsw-address-lookup";

/// Raw outcome of one GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedResponse {
    /// HTTP status returned by the server.
    pub status: StatusCode,
    /// Undecoded response body.
    pub body: Vec<u8>,
}

impl FetchedResponse {
    /// Build a response from a status and body.
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Canonical reason phrase for the status, or an empty string.
    pub fn reason(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or_default()
    }
}

/// Failures raised before a response was received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request exceeded a transport-level deadline.
    #[error("request timed out: {message}")]
    Timeout { message: String },
    /// Connection, TLS, or protocol failure.
    #[error("request failed: {message}")]
    Failed { message: String },
}

/// One-shot HTTP GET.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a GET for `url` and collect the full body.
    async fn get(&self, url: &Url) -> Result<FetchedResponse, TransportError>;
}

/// Reqwest-backed transport sending JSON `Accept` and a fixed user agent.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with the default identity headers.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new() -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<FetchedResponse, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        Ok(FetchedResponse::new(status, body.to_vec()))
    }
}

fn map_transport_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout {
            message: error.to_string(),
        }
    } else {
        TransportError::Failed {
            message: error.to_string(),
        }
    }
}
