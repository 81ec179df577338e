//! Composition root for the address lookup pipeline.

use std::sync::Arc;

use actix_web::web;

use address_lookup::domain::{AddressResolver, CachedAddressLookup};
use address_lookup::inbound::http::state::HttpState;
use address_lookup::outbound::cache::LruLocationCache;
use address_lookup::outbound::http_fetch::{ReqwestTransport, ResilientFetcher};
use address_lookup::outbound::nsw_spatial::NswSpatialSource;

use super::ServerConfig;

/// Wire transport, fetcher, NSW adapter, resolver, and cache into HTTP state.
///
/// # Errors
///
/// Returns [`std::io::Error`] when the HTTP client cannot be constructed.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let transport = ReqwestTransport::new()
        .map_err(|err| std::io::Error::other(format!("http client construction failed: {err}")))?;
    let fetcher = ResilientFetcher::new(Arc::new(transport), config.fetch_config);
    let source = NswSpatialSource::new(fetcher, config.endpoints.clone());
    let resolver = AddressResolver::new(Arc::new(source));
    let cache = LruLocationCache::new(config.cache_capacity);
    let lookup = CachedAddressLookup::new(resolver, Arc::new(cache));
    Ok(web::Data::new(HttpState::new(Arc::new(lookup))))
}
