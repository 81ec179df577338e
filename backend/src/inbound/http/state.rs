//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AddressLookup, FixtureAddressLookup};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Address resolution use-case.
    pub address_lookup: Arc<dyn AddressLookup>,
}

impl HttpState {
    /// Build state from the address lookup port.
    pub fn new(address_lookup: Arc<dyn AddressLookup>) -> Self {
        Self { address_lookup }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(Arc::new(FixtureAddressLookup))
    }
}
