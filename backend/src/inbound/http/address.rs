//! Address lookup endpoint.
//!
//! ```text
//! GET /address?q=346 Panorama Avenue Bathurst
//! GET /api/v1/address?q=346 Panorama Avenue Bathurst
//! ```

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, LocationRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::response_headers::{with_cors, with_public_cache};
use crate::inbound::http::state::HttpState;

const MISSING_QUERY_MESSAGE: &str = "Missing required parameter: provide a 'q' query parameter, \
     for example ?q=346 Panorama Avenue Bathurst";

/// Query string accepted by the lookup endpoint.
#[derive(Debug, Deserialize)]
pub struct AddressQuery {
    /// Free-text address.
    pub q: Option<String>,
}

/// Coordinates in the lookup response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDto {
    /// Latitude in WGS84 degrees.
    pub latitude: f64,
    /// Longitude in WGS84 degrees.
    pub longitude: f64,
}

/// Response payload for a successful lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressLookupResponse {
    /// Matched position.
    pub location: LocationDto,
    /// Canonical address of the match.
    pub address: String,
    /// Suburb or locality containing the match.
    pub suburb_name: String,
    /// State electoral district containing the match.
    pub state_electoral_district: String,
    /// Provider feature identifier.
    pub property_id: i64,
    /// Principal address site identifier.
    pub principal_address_site_oid: i64,
    /// The trimmed query text.
    pub query: String,
}

impl AddressLookupResponse {
    fn from_record(record: LocationRecord, query: String) -> Self {
        Self {
            location: LocationDto {
                latitude: record.point.latitude,
                longitude: record.point.longitude,
            },
            address: record.address,
            suburb_name: record.suburb_name,
            state_electoral_district: record.state_electoral_district,
            property_id: record.property_id,
            principal_address_site_oid: record.principal_address_site_oid,
            query,
        }
    }
}

/// Resolve the address in `q` into coordinates, district, and suburb.
#[get("/address")]
pub async fn lookup_address(
    state: web::Data<HttpState>,
    query: web::Query<AddressQuery>,
) -> ApiResult<HttpResponse> {
    let text = query
        .into_inner()
        .q
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
        .ok_or_else(|| Error::invalid_request(MISSING_QUERY_MESSAGE))?;

    let record = state.address_lookup.lookup(&text).await?;
    let body = AddressLookupResponse::from_record(record, text);

    let mut builder = HttpResponse::Ok();
    with_cors(&mut builder);
    with_public_cache(&mut builder);
    Ok(builder.json(body))
}

#[cfg(test)]
mod tests;
