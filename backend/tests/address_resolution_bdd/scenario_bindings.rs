//! Scenario bindings for address resolution BDD tests.

use super::*;
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/address_resolution.feature",
    name = "Cold lookup resolves coordinates, district and suburb"
)]
fn cold_lookup_resolves_coordinates_district_and_suburb(world: AddressResolutionWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/address_resolution.feature",
    name = "Warm cache answers differently cased repeats without upstream calls"
)]
fn warm_cache_answers_differently_cased_repeats(world: AddressResolutionWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/address_resolution.feature",
    name = "A rate-limited geocode is retried once and succeeds"
)]
fn rate_limited_geocode_is_retried_once(world: AddressResolutionWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/address_resolution.feature",
    name = "Unknown addresses fail without boundary lookups"
)]
fn unknown_addresses_fail_without_boundary_lookups(world: AddressResolutionWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/address_resolution.feature",
    name = "A failing suburb lookup fails the whole resolution"
)]
fn failing_suburb_lookup_fails_whole_resolution(world: AddressResolutionWorld) {
    drop(world);
}
