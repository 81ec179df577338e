//! NSW Spatial Services adapter for the geospatial source port.
//!
//! This adapter owns transport details only: query construction, status
//! classification, and strict GeoJSON decoding into domain values.

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::dto::{BoundaryCollectionDto, GeocodeCollectionDto};
use super::query::{geocode_url, intersects_url};
use crate::domain::ports::{GeospatialSource, GeospatialSourceError};
use crate::domain::{GeocodeMatch, Point};
use crate::outbound::http_fetch::{FetchError, FetchedResponse, ResilientFetcher};

/// Feature server query endpoints used by [`NswSpatialSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NswSpatialEndpoints {
    /// Geocoded addressing layer.
    pub geocoding: Url,
    /// State electoral district boundaries.
    pub district: Url,
    /// Suburb and locality boundaries.
    pub suburb: Url,
}

/// One upstream lookup and the labels used when it fails.
#[derive(Debug, Clone, Copy)]
struct Lookup {
    operation: &'static str,
    schema: &'static str,
}

const GEOCODE: Lookup = Lookup {
    operation: "Geocoding",
    schema: "Geocode",
};
const DISTRICT: Lookup = Lookup {
    operation: "Boundary",
    schema: "Electoral",
};
const SUBURB: Lookup = Lookup {
    operation: "Suburb",
    schema: "Suburb",
};

const DISTRICT_FIELD: &str = "districtname";
const SUBURB_FIELD: &str = "suburbname";

/// Geospatial source backed by the NSW Spatial Services feature servers.
#[derive(Clone)]
pub struct NswSpatialSource {
    fetcher: ResilientFetcher,
    endpoints: NswSpatialEndpoints,
}

impl NswSpatialSource {
    /// Build an adapter issuing requests through `fetcher`.
    pub fn new(fetcher: ResilientFetcher, endpoints: NswSpatialEndpoints) -> Self {
        Self { fetcher, endpoints }
    }

    async fn fetch_payload<T: DeserializeOwned>(
        &self,
        url: &Url,
        lookup: Lookup,
    ) -> Result<T, GeospatialSourceError> {
        let response = self.fetcher.fetch(url).await.map_err(map_fetch_error)?;
        ensure_success(&response, lookup)?;
        serde_json::from_slice(&response.body).map_err(|err| validation_error(lookup, err))
    }

    async fn boundary_name(
        &self,
        endpoint: &Url,
        point: Point,
        lookup: Lookup,
        field: &str,
    ) -> Result<Option<String>, GeospatialSourceError> {
        let url = intersects_url(endpoint, point);
        let payload: BoundaryCollectionDto = self.fetch_payload(&url, lookup).await?;
        payload
            .into_first_name(field)
            .map_err(|err| validation_error(lookup, err))
    }
}

#[async_trait]
impl GeospatialSource for NswSpatialSource {
    async fn geocode(&self, address: &str) -> Result<GeocodeMatch, GeospatialSourceError> {
        let url = geocode_url(&self.endpoints.geocoding, address);
        let payload: GeocodeCollectionDto = self.fetch_payload(&url, GEOCODE).await?;
        let found = payload
            .into_first_match()
            .map_err(|err| validation_error(GEOCODE, err))?;
        found.ok_or_else(|| {
            GeospatialSourceError::not_found(format!("No results found for address: {address}"))
        })
    }

    async fn district_at(&self, point: Point) -> Result<String, GeospatialSourceError> {
        let name = self
            .boundary_name(&self.endpoints.district, point, DISTRICT, DISTRICT_FIELD)
            .await?;
        debug!(%point, district = ?name, "district lookup complete");
        name.ok_or_else(|| {
            GeospatialSourceError::not_found(format!(
                "No administrative boundary found for coordinates: {point}"
            ))
        })
    }

    async fn suburb_at(&self, point: Point) -> Result<String, GeospatialSourceError> {
        let name = self
            .boundary_name(&self.endpoints.suburb, point, SUBURB, SUBURB_FIELD)
            .await?;
        debug!(%point, suburb = ?name, "suburb lookup complete");
        name.ok_or_else(|| {
            GeospatialSourceError::not_found(format!("No suburb found for coordinates: {point}"))
        })
    }
}

fn ensure_success(response: &FetchedResponse, lookup: Lookup) -> Result<(), GeospatialSourceError> {
    if response.status.is_success() {
        return Ok(());
    }
    Err(GeospatialSourceError::upstream(
        lookup.operation,
        response.status.as_u16(),
        response.reason(),
    ))
}

fn validation_error(lookup: Lookup, detail: impl std::fmt::Display) -> GeospatialSourceError {
    GeospatialSourceError::validation(format!(
        "{} response validation error: {detail}",
        lookup.schema
    ))
}

fn map_fetch_error(error: FetchError) -> GeospatialSourceError {
    GeospatialSourceError::transport(error.to_string())
}
