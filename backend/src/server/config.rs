//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use address_lookup::outbound::cache::DEFAULT_CACHE_CAPACITY;
use address_lookup::outbound::http_fetch::FetchConfig;
use address_lookup::outbound::nsw_spatial::NswSpatialEndpoints;
use address_lookup::settings::{AddressLookupSettings, SettingsError};

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) endpoints: NswSpatialEndpoints,
    pub(crate) fetch_config: FetchConfig,
    pub(crate) cache_capacity: usize,
}

impl ServerConfig {
    /// Construct a server configuration with default fetch and cache settings.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, endpoints: NswSpatialEndpoints) -> Self {
        Self {
            bind_addr,
            endpoints,
            fetch_config: FetchConfig::default(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }

    /// Derive the server configuration from loaded settings.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when an endpoint or the bind address is invalid.
    pub fn from_settings(settings: &AddressLookupSettings) -> Result<Self, SettingsError> {
        Ok(Self::new(settings.bind_address()?, settings.endpoints()?)
            .with_fetch_config(settings.fetch_config())
            .with_cache_capacity(settings.cache_capacity()))
    }

    /// Override the upstream timeout and retry budget.
    #[must_use]
    pub fn with_fetch_config(mut self, fetch_config: FetchConfig) -> Self {
        self.fetch_config = fetch_config;
        self
    }

    /// Override the number of cached locations.
    #[must_use]
    pub fn with_cache_capacity(mut self, cache_capacity: usize) -> Self {
        self.cache_capacity = cache_capacity;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
