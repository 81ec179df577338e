//! Resilient outbound HTTP access.
//!
//! [`ReqwestTransport`] performs single GET requests; [`ResilientFetcher`]
//! layers the per-attempt deadline and bounded retry on top.

mod fetcher;
mod transport;

pub use fetcher::{
    FetchConfig, FetchError, RETRY_BACKOFF, ResilientFetcher, RetrySleeper, TokioSleeper,
};
pub use transport::{
    DEFAULT_USER_AGENT, FetchedResponse, HttpTransport, ReqwestTransport, TransportError,
};
