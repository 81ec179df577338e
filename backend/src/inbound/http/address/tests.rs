//! Handler tests for the address lookup endpoint.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL, EXPIRES};
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{AddressLookup, FixtureAddressLookup, MockAddressLookup};
use crate::domain::{ErrorCode, Point};
use crate::inbound::http::response_headers::PUBLIC_LOOKUP_CACHE_CONTROL;

async fn call(lookup: Arc<dyn AddressLookup>, uri: &str) -> actix_web::dev::ServiceResponse {
    let state = web::Data::new(HttpState::new(lookup));
    let app = actix_test::init_service(
        App::new()
            .app_data(state)
            .service(lookup_address)
            .service(web::scope("/api/v1").service(lookup_address)),
    )
    .await;
    let request = actix_test::TestRequest::get().uri(uri).to_request();
    actix_test::call_service(&app, request).await
}

fn kelso() -> LocationRecord {
    LocationRecord {
        point: Point::new(149.6, -33.41),
        address: "1 MAIN STREET KELSO".to_owned(),
        suburb_name: "KELSO".to_owned(),
        state_electoral_district: "BATHURST".to_owned(),
        property_id: 77,
        principal_address_site_oid: 88,
    }
}

#[rstest]
#[case("/address?q=346%20Panorama%20Avenue%20Bathurst")]
#[case("/api/v1/address?q=346+Panorama+Avenue+Bathurst")]
#[actix_web::test]
async fn successful_lookup_returns_camel_case_payload(#[case] uri: &str) {
    let response = call(Arc::new(FixtureAddressLookup), uri).await;

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers.get(CACHE_CONTROL).map(|v| v.as_bytes()),
        Some(PUBLIC_LOOKUP_CACHE_CONTROL.as_bytes())
    );
    assert!(headers.contains_key(EXPIRES));
    assert!(headers.contains_key(ACCESS_CONTROL_ALLOW_ORIGIN));

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({
            "location": { "latitude": -33.429, "longitude": 149.567 },
            "address": "346 PANORAMA AVENUE BATHURST",
            "suburbName": "BATHURST",
            "stateElectoralDistrict": "BATHURST",
            "propertyId": 1,
            "principalAddressSiteOid": 1,
            "query": "346 Panorama Avenue Bathurst",
        })
    );
}

#[rstest]
#[actix_web::test]
async fn query_is_trimmed_before_lookup() {
    let mut lookup = MockAddressLookup::new();
    lookup
        .expect_lookup()
        .withf(|address| address == "1 Main Street Kelso")
        .times(1)
        .return_once(|_| Ok(kelso()));

    let response = call(
        Arc::new(lookup),
        "/address?q=%20%201%20Main%20Street%20Kelso%20",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: AddressLookupResponse = actix_test::read_body_json(response).await;
    assert_eq!(body.query, "1 Main Street Kelso");
    assert_eq!(body.suburb_name, "KELSO");
    assert_eq!(body.property_id, 77);
}

#[rstest]
#[case("/address")]
#[case("/address?q=")]
#[case("/address?q=%20%20")]
#[actix_web::test]
async fn missing_query_is_bad_request(#[case] uri: &str) {
    let mut lookup = MockAddressLookup::new();
    lookup.expect_lookup().never();

    let response = call(Arc::new(lookup), uri).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Error = actix_test::read_body_json(response).await;
    assert_eq!(body.code(), ErrorCode::InvalidRequest);
    assert!(body.message().contains("?q="), "{}", body.message());
}

#[rstest]
#[case(
    Error::not_found("No results found for address: X"),
    StatusCode::NOT_FOUND
)]
#[case(
    Error::upstream("Geocoding API error: 503 Service Unavailable"),
    StatusCode::BAD_GATEWAY
)]
#[case(
    Error::validation("Suburb response validation error: bad"),
    StatusCode::BAD_GATEWAY
)]
#[case(
    Error::internal("request timed out"),
    StatusCode::INTERNAL_SERVER_ERROR
)]
#[actix_web::test]
async fn lookup_failures_map_to_statuses(#[case] failure: Error, #[case] status: StatusCode) {
    let mut lookup = MockAddressLookup::new();
    lookup
        .expect_lookup()
        .times(1)
        .return_once(move |_| Err(failure));

    let response = call(Arc::new(lookup), "/address?q=X").await;

    assert_eq!(response.status(), status);
    assert!(response.headers().get(CACHE_CONTROL).is_none());
    assert!(response.headers().get(EXPIRES).is_none());
}
