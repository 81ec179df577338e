//! Driven port for the upstream geospatial provider.
//!
//! The domain owns the three lookups and their failure categories so the
//! resolver stays unaware of query syntax, GeoJSON, and HTTP status codes.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{GeocodeMatch, Point};

define_port_error! {
    /// Errors surfaced by a geospatial provider adapter.
    pub enum GeospatialSourceError {
        /// The provider returned zero features for the query.
        NotFound { message: String } => "{message}",
        /// The provider answered with a non-success status.
        Upstream { operation: String, status: u16, reason: String } =>
            "{operation} API error: {status} {reason}",
        /// The provider payload did not match the expected schema.
        Validation { message: String } => "{message}",
        /// The request never produced a usable response.
        Transport { message: String } => "{message}",
    }
}

/// Port for geocoding addresses and locating the areas containing a point.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeospatialSource: Send + Sync {
    /// Geocode `address`, returning the first matching feature.
    ///
    /// # Examples
    ///
    /// ```
    /// use address_lookup::domain::ports::{
    ///     FixtureGeospatialSource, GeospatialSource, GeospatialSourceError,
    /// };
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() -> Result<(), GeospatialSourceError> {
    /// let source = FixtureGeospatialSource;
    /// let found = source.geocode("346 Panorama Avenue Bathurst").await?;
    /// assert_eq!(found.address, "346 PANORAMA AVENUE BATHURST");
    /// # Ok(())
    /// # }
    /// ```
    async fn geocode(&self, address: &str) -> Result<GeocodeMatch, GeospatialSourceError>;

    /// Name of the state electoral district containing `point`.
    async fn district_at(&self, point: Point) -> Result<String, GeospatialSourceError>;

    /// Name of the suburb or locality containing `point`.
    async fn suburb_at(&self, point: Point) -> Result<String, GeospatialSourceError>;
}

/// Fixture implementation answering every query with Bathurst.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureGeospatialSource;

#[async_trait]
impl GeospatialSource for FixtureGeospatialSource {
    async fn geocode(&self, address: &str) -> Result<GeocodeMatch, GeospatialSourceError> {
        Ok(GeocodeMatch {
            point: Point::new(149.567, -33.429),
            address: address.trim().to_uppercase(),
            feature_id: 1,
            site_id: 1,
        })
    }

    async fn district_at(&self, _point: Point) -> Result<String, GeospatialSourceError> {
        Ok("BATHURST".to_owned())
    }

    async fn suburb_at(&self, _point: Point) -> Result<String, GeospatialSourceError> {
        Ok("BATHURST".to_owned())
    }
}
