//! NSW Spatial Services outbound adapter.
//!
//! This module provides a thin HTTP implementation of the
//! `GeospatialSource` port over the ArcGIS feature server query API.

mod dto;
mod http_source;
mod query;

pub use http_source::{NswSpatialEndpoints, NswSpatialSource};
