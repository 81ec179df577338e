//! Domain orchestration for resolving one address into a location record.
//!
//! The resolver geocodes first, then looks up the district and suburb
//! containing the geocoded point concurrently. Either boundary failing fails
//! the whole resolution; a partial record is never produced.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::debug;

use crate::domain::ports::GeospatialSource;
use crate::domain::{Error, LocationRecord, Point};

mod mapping;

use mapping::{map_join_error, map_source_error};

/// Boundary name produced by one of the concurrent lookups.
enum Boundary {
    District(String),
    Suburb(String),
}

/// Resolves addresses through a [`GeospatialSource`].
///
/// The resolver holds no state besides its source, so it is cheap to clone
/// and share between request handlers.
#[derive(Clone)]
pub struct AddressResolver {
    source: Arc<dyn GeospatialSource>,
}

impl AddressResolver {
    /// Build a resolver over the given geospatial source.
    pub fn new(source: Arc<dyn GeospatialSource>) -> Self {
        Self { source }
    }

    /// Resolve `address` into coordinates, district, and suburb.
    ///
    /// Blank input is reported as not found without contacting the source.
    ///
    /// # Errors
    /// Returns [`Error`] with the code of the first failing lookup:
    /// `not_found`, `upstream_error`, or `validation_error` as classified by
    /// the source, and `internal_error` for transport failures or a boundary
    /// task that did not complete.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use address_lookup::domain::AddressResolver;
    /// use address_lookup::domain::ports::FixtureGeospatialSource;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() -> Result<(), address_lookup::domain::Error> {
    /// let resolver = AddressResolver::new(Arc::new(FixtureGeospatialSource));
    /// let record = resolver.resolve("346 Panorama Avenue Bathurst").await?;
    /// assert_eq!(record.suburb_name, "BATHURST");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn resolve(&self, address: &str) -> Result<LocationRecord, Error> {
        if address.trim().is_empty() {
            return Err(Error::not_found(format!(
                "No results found for address: {address}"
            )));
        }

        let geocoded = self
            .source
            .geocode(address)
            .await
            .map_err(map_source_error)?;
        debug!(
            address = %geocoded.address,
            point = %geocoded.point,
            "geocoded address; looking up boundaries"
        );

        let (district, suburb) = self.boundaries_at(geocoded.point).await?;
        Ok(LocationRecord::merge(geocoded, district, suburb))
    }

    /// Look up district and suburb concurrently, failing on the first error.
    ///
    /// Returning early drops the join set, which aborts the sibling lookup.
    async fn boundaries_at(&self, point: Point) -> Result<(String, String), Error> {
        let mut lookups = JoinSet::new();

        let district_source = Arc::clone(&self.source);
        lookups.spawn(async move {
            district_source
                .district_at(point)
                .await
                .map(Boundary::District)
        });
        let suburb_source = Arc::clone(&self.source);
        lookups.spawn(async move {
            suburb_source.suburb_at(point).await.map(Boundary::Suburb)
        });

        let mut district = None;
        let mut suburb = None;
        while let Some(joined) = lookups.join_next().await {
            match joined.map_err(|err| map_join_error(&err))? {
                Ok(Boundary::District(name)) => district = Some(name),
                Ok(Boundary::Suburb(name)) => suburb = Some(name),
                Err(err) => return Err(map_source_error(err)),
            }
        }

        match (district, suburb) {
            (Some(district), Some(suburb)) => Ok((district, suburb)),
            _ => Err(Error::internal(format!(
                "boundary lookups for {point} ended without a result"
            ))),
        }
    }
}
