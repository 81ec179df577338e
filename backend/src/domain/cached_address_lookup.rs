//! Cache-fronted address lookup service.
//!
//! Reads the location cache by normalised address and only falls through to
//! the resolver on a miss. Successful resolutions are written back before
//! returning; failures are never cached.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{AddressKey, AddressLookup, LocationCache};
use crate::domain::{AddressResolver, Error, LocationRecord};

/// [`AddressLookup`] implementation combining a resolver and a cache.
#[derive(Clone)]
pub struct CachedAddressLookup {
    resolver: AddressResolver,
    cache: Arc<dyn LocationCache>,
}

impl CachedAddressLookup {
    /// Build the service from its resolver and cache.
    pub fn new(resolver: AddressResolver, cache: Arc<dyn LocationCache>) -> Self {
        Self { resolver, cache }
    }
}

#[async_trait]
impl AddressLookup for CachedAddressLookup {
    async fn lookup(&self, address: &str) -> Result<LocationRecord, Error> {
        let Ok(key) = AddressKey::new(address) else {
            return self.resolver.resolve(address).await;
        };

        if let Some(record) = self.cache.get(&key) {
            info!(address = %key, "address lookup served from cache");
            return Ok(record);
        }

        match self.resolver.resolve(address).await {
            Ok(record) => {
                info!(
                    address = %key,
                    district = %record.state_electoral_district,
                    suburb = %record.suburb_name,
                    "address resolved"
                );
                self.cache.put(key, record.clone());
                Ok(record)
            }
            Err(err) => {
                error!(address = %key, code = ?err.code(), error = %err, "address lookup failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for cache read-through and write-back.
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{GeospatialSourceError, MockGeospatialSource, MockLocationCache};
    use crate::domain::{GeocodeMatch, Point};
    use mockall::predicate::eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn record() -> LocationRecord {
        LocationRecord {
            point: Point::new(149.567, -33.429),
            address: "346 PANORAMA AVENUE BATHURST".to_owned(),
            suburb_name: "BATHURST".to_owned(),
            state_electoral_district: "BATHURST".to_owned(),
            property_id: 1,
            principal_address_site_oid: 2,
        }
    }

    fn bathurst_source() -> MockGeospatialSource {
        let mut source = MockGeospatialSource::new();
        source.expect_geocode().times(1).returning(|_| {
            Ok(GeocodeMatch {
                point: Point::new(149.567, -33.429),
                address: "346 PANORAMA AVENUE BATHURST".to_owned(),
                feature_id: 1,
                site_id: 2,
            })
        });
        source
            .expect_district_at()
            .times(1)
            .returning(|_| Ok("BATHURST".to_owned()));
        source
            .expect_suburb_at()
            .times(1)
            .returning(|_| Ok("BATHURST".to_owned()));
        source
    }

    fn service(source: MockGeospatialSource, cache: MockLocationCache) -> CachedAddressLookup {
        CachedAddressLookup::new(AddressResolver::new(Arc::new(source)), Arc::new(cache))
    }

    fn key(raw: &str) -> AddressKey {
        AddressKey::new(raw).expect("valid key")
    }

    #[rstest]
    #[tokio::test]
    async fn cache_hit_skips_resolver(record: LocationRecord) {
        let mut source = MockGeospatialSource::new();
        source.expect_geocode().never();
        let mut cache = MockLocationCache::new();
        let cached = record.clone();
        cache
            .expect_get()
            .with(eq(key("346 PANORAMA AVENUE BATHURST")))
            .times(1)
            .return_once(move |_| Some(cached));
        cache.expect_put().never();

        let found = service(source, cache)
            .lookup(" 346 panorama avenue bathurst ")
            .await
            .expect("cache hit");

        assert_eq!(found, record);
    }

    #[rstest]
    #[tokio::test]
    async fn cache_miss_resolves_and_writes_back(record: LocationRecord) {
        let mut cache = MockLocationCache::new();
        cache.expect_get().times(1).return_once(|_| None);
        let expected = record.clone();
        cache
            .expect_put()
            .withf(move |stored_key, stored| {
                stored_key.as_str() == "346 PANORAMA AVENUE BATHURST" && *stored == expected
            })
            .times(1)
            .return_const(());

        let found = service(bathurst_source(), cache)
            .lookup("346 Panorama Avenue Bathurst")
            .await
            .expect("resolution succeeds");

        assert_eq!(found, record);
    }

    #[rstest]
    #[tokio::test]
    async fn failures_are_not_cached() {
        let mut source = MockGeospatialSource::new();
        source.expect_geocode().times(1).return_once(|_| {
            Err(GeospatialSourceError::not_found(
                "No results found for address: 1 NOWHERE ROAD",
            ))
        });
        let mut cache = MockLocationCache::new();
        cache.expect_get().times(1).return_once(|_| None);
        cache.expect_put().never();

        let err = service(source, cache)
            .lookup("1 Nowhere Road")
            .await
            .expect_err("lookup fails");

        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn blank_address_bypasses_cache() {
        let mut source = MockGeospatialSource::new();
        source.expect_geocode().never();
        let mut cache = MockLocationCache::new();
        cache.expect_get().never();
        cache.expect_put().never();

        let err = service(source, cache)
            .lookup("  ")
            .await
            .expect_err("blank address fails");

        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}
