//! Location primitives produced by the address resolution pipeline.
//!
//! Purpose: carry geocoded points and the administrative areas containing
//! them between the geospatial port, the resolver, and the cache. All types
//! are immutable once constructed.

use std::fmt;

/// A WGS84 position in degrees, longitude first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Longitude in WGS84 degrees.
    pub longitude: f64,
    /// Latitude in WGS84 degrees.
    pub latitude: f64,
}

impl Point {
    /// Build a point from a `(longitude, latitude)` pair.
    ///
    /// # Examples
    /// ```
    /// use address_lookup::domain::Point;
    ///
    /// let point = Point::new(149.567, -33.429);
    /// assert_eq!(point.to_string(), "149.567, -33.429");
    /// ```
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.longitude, self.latitude)
    }
}

/// The first feature matched by a geocode query.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeMatch {
    /// Position of the matched address.
    pub point: Point,
    /// Canonical address string as held by the provider.
    pub address: String,
    /// Provider-assigned feature identifier.
    pub feature_id: i64,
    /// Principal address site identifier.
    pub site_id: i64,
}

/// Merged result of one address resolution.
///
/// This is the value cached per normalised address and returned to callers.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    /// Position of the matched address.
    pub point: Point,
    /// Canonical address string from the geocode match.
    pub address: String,
    /// Suburb or locality containing the point.
    pub suburb_name: String,
    /// State electoral district containing the point.
    pub state_electoral_district: String,
    /// Provider feature identifier of the geocode match.
    pub property_id: i64,
    /// Principal address site identifier of the geocode match.
    pub principal_address_site_oid: i64,
}

impl LocationRecord {
    /// Merge a geocode match with the names of its containing areas.
    pub fn merge(geocoded: GeocodeMatch, district: String, suburb: String) -> Self {
        let GeocodeMatch {
            point,
            address,
            feature_id,
            site_id,
        } = geocoded;
        Self {
            point,
            address,
            suburb_name: suburb,
            state_electoral_district: district,
            property_id: feature_id,
            principal_address_site_oid: site_id,
        }
    }
}
