//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `ADDRESS_LOOKUP_*` environment variables, or
//! a configuration file. Unset values fall back to the NSW Spatial Services
//! endpoints and the defaults below.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::outbound::cache::DEFAULT_CACHE_CAPACITY;
use crate::outbound::http_fetch::FetchConfig;
use crate::outbound::nsw_spatial::NswSpatialEndpoints;

const DEFAULT_GEOCODING_URL: &str = "https://portal.spatial.nsw.gov.au/server/rest/services/NSW_Geocoded_Addressing_Theme/FeatureServer/1/query";
const DEFAULT_DISTRICT_URL: &str = "https://portal.spatial.nsw.gov.au/server/rest/services/NSW_Administrative_Boundaries_Theme/FeatureServer/4/query";
const DEFAULT_SUBURB_URL: &str = "https://portal.spatial.nsw.gov.au/server/rest/services/NSW_Administrative_Boundaries_Theme/FeatureServer/2/query";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Errors raised while turning settings into runtime values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// A configured endpoint is not an absolute URL.
    #[error("{setting} is not a valid URL ({value}): {message}")]
    InvalidUrl {
        setting: &'static str,
        value: String,
        message: String,
    },
    /// The bind address is not a socket address.
    #[error("bind_address is not a valid socket address ({value}): {message}")]
    InvalidBindAddress { value: String, message: String },
}

/// Configuration values for the address lookup service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ADDRESS_LOOKUP")]
pub struct AddressLookupSettings {
    /// Geocoded addressing query endpoint.
    pub geocoding_url: Option<String>,
    /// State electoral district boundary query endpoint.
    pub district_url: Option<String>,
    /// Suburb boundary query endpoint.
    pub suburb_url: Option<String>,
    /// Per-attempt upstream timeout in milliseconds.
    #[ortho_config(default = 8000)]
    pub http_timeout_ms: u64,
    /// Retries after the first upstream attempt.
    #[ortho_config(default = 1)]
    pub http_retry_attempts: u32,
    /// Maximum number of cached locations.
    pub cache_capacity: Option<usize>,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: Option<String>,
    /// Socket address the HTTP server binds to.
    pub bind_address: Option<String>,
}

impl AddressLookupSettings {
    /// Resolve the three feature server endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidUrl`] for the first endpoint that
    /// does not parse.
    pub fn endpoints(&self) -> Result<NswSpatialEndpoints, SettingsError> {
        Ok(NswSpatialEndpoints {
            geocoding: parse_url(
                "geocoding_url",
                self.geocoding_url.as_deref(),
                DEFAULT_GEOCODING_URL,
            )?,
            district: parse_url(
                "district_url",
                self.district_url.as_deref(),
                DEFAULT_DISTRICT_URL,
            )?,
            suburb: parse_url(
                "suburb_url",
                self.suburb_url.as_deref(),
                DEFAULT_SUBURB_URL,
            )?,
        })
    }

    /// Timeout and retry budget for upstream calls.
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            timeout: Duration::from_millis(self.http_timeout_ms),
            retry_attempts: self.http_retry_attempts,
        }
    }

    /// Configured cache capacity, falling back to the default.
    pub fn cache_capacity(&self) -> usize {
        self.cache_capacity.unwrap_or(DEFAULT_CACHE_CAPACITY)
    }

    /// Configured log level, falling back to `info`.
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddress`] when the value does not
    /// parse as `host:port`.
    pub fn bind_address(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_address.as_deref().unwrap_or(DEFAULT_BIND_ADDRESS);
        raw.parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::InvalidBindAddress {
                value: raw.to_owned(),
                message: err.to_string(),
            })
    }
}

fn parse_url(
    setting: &'static str,
    configured: Option<&str>,
    fallback: &str,
) -> Result<Url, SettingsError> {
    let raw = configured.unwrap_or(fallback);
    Url::parse(raw).map_err(|err| SettingsError::InvalidUrl {
        setting,
        value: raw.to_owned(),
        message: err.to_string(),
    })
}
