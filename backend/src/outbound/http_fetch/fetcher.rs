//! Timeout and retry policy around an [`HttpTransport`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use thiserror::Error;
use tracing::{debug, warn};

use super::transport::{FetchedResponse, HttpTransport, TransportError};

/// Fixed delay between attempts.
pub const RETRY_BACKOFF: Duration = Duration::from_millis(300);

const DEFAULT_TIMEOUT: Duration = Duration::from_millis(8_000);
const DEFAULT_RETRY_ATTEMPTS: u32 = 1;

/// Per-fetch timeout and retry budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchConfig {
    /// Deadline applied to each attempt separately.
    pub timeout: Duration,
    /// Retries allowed after the first attempt.
    pub retry_attempts: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
        }
    }
}

/// Failures returned by [`ResilientFetcher::fetch`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Every attempt exceeded its deadline.
    #[error("request to {url} timed out after {attempts} attempt(s)")]
    TimedOut { url: String, attempts: u32 },
    /// A non-retryable transport failure.
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
}

/// Async sleeping abstraction so tests can skip the retry backoff.
#[async_trait]
pub trait RetrySleeper: Send + Sync {
    /// Suspend execution for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Tokio-based sleeper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl RetrySleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Outcome of one attempt, classified for the retry loop.
enum Attempt {
    Done(FetchedResponse),
    Transient(FetchedResponse),
    TimedOut,
    Fatal(String),
}

/// GET with a per-attempt deadline and bounded retry on transient failure.
///
/// Status 429 and 500 and timeouts are transient. When the budget runs out
/// on a transient status, that response is returned as-is; the caller
/// decides what it means.
#[derive(Clone)]
pub struct ResilientFetcher {
    transport: Arc<dyn HttpTransport>,
    sleeper: Arc<dyn RetrySleeper>,
    config: FetchConfig,
}

impl ResilientFetcher {
    /// Build a fetcher using the Tokio sleeper.
    pub fn new(transport: Arc<dyn HttpTransport>, config: FetchConfig) -> Self {
        Self::with_sleeper(transport, Arc::new(TokioSleeper), config)
    }

    /// Build a fetcher with an explicit sleeper.
    pub fn with_sleeper(
        transport: Arc<dyn HttpTransport>,
        sleeper: Arc<dyn RetrySleeper>,
        config: FetchConfig,
    ) -> Self {
        Self {
            transport,
            sleeper,
            config,
        }
    }

    /// Fetch `url`, retrying transient failures within the configured budget.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::TimedOut`] when the final attempt times out and
    /// [`FetchError::Transport`] immediately on any other transport failure.
    pub async fn fetch(&self, url: &Url) -> Result<FetchedResponse, FetchError> {
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            debug!(url = %url, attempt, "fetching");
            let can_retry = attempt <= self.config.retry_attempts;

            match self.attempt(url).await {
                Attempt::Done(response) => return Ok(response),
                Attempt::Transient(response) if !can_retry => return Ok(response),
                Attempt::Transient(response) => {
                    warn!(
                        url = %url,
                        attempt,
                        status = response.status.as_u16(),
                        "transient status; retrying"
                    );
                }
                Attempt::TimedOut if !can_retry => {
                    return Err(FetchError::TimedOut {
                        url: url.to_string(),
                        attempts: attempt,
                    });
                }
                Attempt::TimedOut => {
                    warn!(
                        url = %url,
                        attempt,
                        timeout_ms = self.timeout_ms(),
                        "request timed out; retrying"
                    );
                }
                Attempt::Fatal(message) => {
                    return Err(FetchError::Transport {
                        url: url.to_string(),
                        message,
                    });
                }
            }

            self.sleeper.sleep(RETRY_BACKOFF).await;
        }
    }

    async fn attempt(&self, url: &Url) -> Attempt {
        let request = self.transport.get(url);
        match tokio::time::timeout(self.config.timeout, request).await {
            Err(_elapsed) => Attempt::TimedOut,
            Ok(Err(TransportError::Timeout { .. })) => Attempt::TimedOut,
            Ok(Err(TransportError::Failed { message })) => Attempt::Fatal(message),
            Ok(Ok(response)) if is_transient(response.status) => Attempt::Transient(response),
            Ok(Ok(response)) => Attempt::Done(response),
        }
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.config.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

fn is_transient(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS | StatusCode::INTERNAL_SERVER_ERROR
    )
}
