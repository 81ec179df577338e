//! Driving port for resolving an address into location data.
//!
//! Inbound adapters depend on this trait so HTTP handlers can be tested
//! without a live geospatial provider.

use async_trait::async_trait;

use crate::domain::{Error, LocationRecord, Point};

/// Resolve free-text addresses into [`LocationRecord`]s.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressLookup: Send + Sync {
    /// Resolve `address` to its coordinates, district, and suburb.
    async fn lookup(&self, address: &str) -> Result<LocationRecord, Error>;
}

/// Fixture implementation returning a fixed Bathurst record.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureAddressLookup;

#[async_trait]
impl AddressLookup for FixtureAddressLookup {
    async fn lookup(&self, _address: &str) -> Result<LocationRecord, Error> {
        Ok(LocationRecord {
            point: Point::new(149.567, -33.429),
            address: "346 PANORAMA AVENUE BATHURST".to_owned(),
            suburb_name: "BATHURST".to_owned(),
            state_electoral_district: "BATHURST".to_owned(),
            property_id: 1,
            principal_address_site_oid: 1,
        })
    }
}
