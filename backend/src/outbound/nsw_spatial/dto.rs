//! DTOs for decoding NSW Spatial Services GeoJSON responses.
//!
//! The adapter decodes into these transport DTOs first, then maps the first
//! feature into domain values in one pass. Decoding is strict: a feature
//! missing a required field fails the whole payload.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{GeocodeMatch, Point};

#[derive(Debug, Deserialize)]
pub(super) struct GeocodeCollectionDto {
    pub(super) features: Vec<GeocodeFeatureDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GeocodeFeatureDto {
    pub(super) id: i64,
    pub(super) geometry: GeometryDto,
    pub(super) properties: GeocodePropertiesDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct GeometryDto {
    pub(super) coordinates: Vec<f64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GeocodePropertiesDto {
    pub(super) address: String,
    pub(super) principaladdresssiteoid: i64,
}

#[derive(Debug, Deserialize)]
pub(super) struct BoundaryCollectionDto {
    pub(super) features: Vec<BoundaryFeatureDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct BoundaryFeatureDto {
    pub(super) properties: BTreeMap<String, Value>,
}

impl GeocodeCollectionDto {
    /// Check every feature, then return the first as a domain match.
    pub(super) fn into_first_match(self) -> Result<Option<GeocodeMatch>, String> {
        let mut matches = self
            .features
            .into_iter()
            .map(GeocodeFeatureDto::into_domain_match)
            .collect::<Result<Vec<_>, _>>()?;
        if matches.is_empty() {
            return Ok(None);
        }
        Ok(Some(matches.swap_remove(0)))
    }
}

impl GeocodeFeatureDto {
    fn into_domain_match(self) -> Result<GeocodeMatch, String> {
        let point = match self.geometry.coordinates.as_slice() {
            [longitude, latitude, ..] => Point::new(*longitude, *latitude),
            other => {
                return Err(format!(
                    "feature {} has {} coordinate(s), expected at least 2",
                    self.id,
                    other.len()
                ));
            }
        };
        Ok(GeocodeMatch {
            point,
            address: self.properties.address,
            feature_id: self.id,
            site_id: self.properties.principaladdresssiteoid,
        })
    }
}

impl BoundaryCollectionDto {
    /// Check every feature carries a string `field`, then return the first.
    pub(super) fn into_first_name(self, field: &str) -> Result<Option<String>, String> {
        let mut names = self
            .features
            .into_iter()
            .map(|feature| feature.into_name(field))
            .collect::<Result<Vec<_>, _>>()?;
        if names.is_empty() {
            return Ok(None);
        }
        Ok(Some(names.swap_remove(0)))
    }
}

impl BoundaryFeatureDto {
    fn into_name(mut self, field: &str) -> Result<String, String> {
        match self.properties.remove(field) {
            Some(Value::String(name)) => Ok(name),
            Some(other) => Err(format!("properties.{field} must be a string, got {other}")),
            None => Err(format!("properties.{field} is required")),
        }
    }
}
