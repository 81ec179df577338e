//! Step definitions for address resolution BDD tests.

use super::*;
use address_lookup::domain::ports::AddressLookup;
use address_lookup::domain::{ErrorCode, Point};
use address_lookup::test_support::nsw_payloads::{district_body, geocode_body, suburb_body};
use rstest_bdd_macros::{given, then, when};

const BATHURST: Point = Point::new(149.567, -33.429);

#[given("the spatial services know {address} in district {district} and suburb {suburb}")]
fn the_spatial_services_know(
    world: &AddressResolutionWorld,
    address: String,
    district: String,
    suburb: String,
) {
    let body = geocode_body(&[(
        4_148_110,
        address.as_str(),
        3_145_220,
        BATHURST.longitude,
        BATHURST.latitude,
    )]);
    world.geocode_replies.set(vec![ScriptedReply::ok(body)]);
    world
        .district_replies
        .set(vec![ScriptedReply::ok(district_body(&district))]);
    world
        .suburb_replies
        .set(vec![ScriptedReply::ok(suburb_body(&suburb))]);
}

#[given("the geocoding service rate limits the first request")]
fn the_geocoding_service_rate_limits_the_first_request(world: &AddressResolutionWorld) {
    let mut replies = vec![ScriptedReply::status(429)];
    replies.extend(world.geocode_replies.get().unwrap_or_default());
    world.geocode_replies.set(replies);
}

#[given("the geocoding service knows no addresses")]
fn the_geocoding_service_knows_no_addresses(world: &AddressResolutionWorld) {
    world
        .geocode_replies
        .set(vec![ScriptedReply::ok(geocode_body(&[]))]);
}

#[given("the suburb service answers with status {status}")]
fn the_suburb_service_answers_with_status(world: &AddressResolutionWorld, status: u16) {
    world.suburb_replies.set(vec![ScriptedReply::status(status)]);
}

#[when("I look up {address}")]
fn i_look_up(world: &AddressResolutionWorld, address: String) {
    let pipeline = world.pipeline();
    let result = world
        .runtime()
        .block_on(async { pipeline.lookup.lookup(&address).await });
    world.record_result(result);
}

#[then("the lookup resolves to {address}")]
fn the_lookup_resolves_to(world: &AddressResolutionWorld, address: String) {
    let record = world.last_result().expect("lookup should succeed");
    assert_eq!(record.address, address);
}

#[then("the record names district {district} and suburb {suburb}")]
fn the_record_names_district_and_suburb(
    world: &AddressResolutionWorld,
    district: String,
    suburb: String,
) {
    let record = world.last_result().expect("lookup should succeed");
    assert_eq!(record.state_electoral_district, district);
    assert_eq!(record.suburb_name, suburb);
}

#[then("the record is located at the Bathurst coordinates")]
fn the_record_is_located_at_the_bathurst_coordinates(world: &AddressResolutionWorld) {
    let record = world.last_result().expect("lookup should succeed");
    assert_eq!(record.point, BATHURST);
    assert_eq!(record.property_id, 4_148_110);
    assert_eq!(record.principal_address_site_oid, 3_145_220);
}

#[then("both lookups return the same record")]
fn both_lookups_return_the_same_record(world: &AddressResolutionWorld) {
    let results = world.results();
    assert_eq!(results.len(), 2, "two lookups should have been performed");
    let records: Vec<LocationRecord> = results
        .into_iter()
        .map(|result| result.expect("lookup should succeed"))
        .collect();
    assert_eq!(records.first(), records.last());
}

#[then("the spatial services received {count} requests")]
fn the_spatial_services_received_requests(world: &AddressResolutionWorld, count: usize) {
    assert_eq!(world.pipeline().transport.calls().len(), count);
}

#[then("the geocoding service received {count} requests")]
fn the_geocoding_service_received_requests(world: &AddressResolutionWorld, count: usize) {
    assert_eq!(world.pipeline().transport.calls_to(GEOCODE_ENDPOINT), count);
}

#[then("the boundary services received {count} requests")]
fn the_boundary_services_received_requests(world: &AddressResolutionWorld, count: usize) {
    let transport = world.pipeline().transport;
    let boundary_calls =
        transport.calls_to(DISTRICT_ENDPOINT) + transport.calls_to(SUBURB_ENDPOINT);
    assert_eq!(boundary_calls, count);
}

#[then("the cache holds {count} entry")]
fn the_cache_holds_entry(world: &AddressResolutionWorld, count: usize) {
    assert_eq!(world.pipeline().cache.len(), count);
}

#[then("the cache holds {count} entries")]
fn the_cache_holds_entries(world: &AddressResolutionWorld, count: usize) {
    assert_eq!(world.pipeline().cache.len(), count);
}

#[then("the lookup fails with code {code}")]
fn the_lookup_fails_with_code(world: &AddressResolutionWorld, code: String) {
    let err = world.last_result().expect_err("lookup should fail");
    let expected: ErrorCode = serde_json::from_value(serde_json::Value::String(code))
        .expect("known error code");
    assert_eq!(err.code(), expected);
}

#[then("the failure message mentions {text}")]
fn the_failure_message_mentions(world: &AddressResolutionWorld, text: String) {
    let err = world.last_result().expect_err("lookup should fail");
    assert!(
        err.message().contains(&text),
        "expected {:?} to mention {text:?}",
        err.message()
    );
}
