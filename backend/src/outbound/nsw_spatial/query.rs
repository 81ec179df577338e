//! Query URL builders for the ArcGIS feature server endpoints.
//!
//! Parameters are always appended through the form encoder; raw input never
//! reaches the query string unescaped.

use reqwest::Url;

use crate::domain::Point;

/// Geocode query for `address`, uppercased with single quotes doubled.
pub(super) fn geocode_url(endpoint: &Url, address: &str) -> Url {
    let literal = address.trim().to_uppercase().replace('\'', "''");
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .clear()
        .append_pair("where", &format!("address = '{literal}'"))
        .append_pair("outFields", "*")
        .append_pair("f", "geojson");
    url
}

/// Point-in-polygon query against a boundary layer.
pub(super) fn intersects_url(endpoint: &Url, point: Point) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .clear()
        .append_pair(
            "geometry",
            &format!("{},{}", point.longitude, point.latitude),
        )
        .append_pair("geometryType", "esriGeometryPoint")
        .append_pair("inSR", "4326")
        .append_pair("spatialRel", "esriSpatialRelIntersects")
        .append_pair("outFields", "*")
        .append_pair("returnGeometry", "false")
        .append_pair("f", "geoJSON");
    url
}
