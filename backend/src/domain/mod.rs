//! Domain primitives, ports, and services.
//!
//! Purpose: Define the address resolution pipeline independently of HTTP
//! frameworks and provider wire formats. Types here are immutable once
//! built; adapters translate to and from them at the edges.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — transport agnostic failure payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - Point, GeocodeMatch, LocationRecord — location data.
//! - AddressResolver — geocode plus concurrent boundary lookups.
//! - CachedAddressLookup — cache-fronted [`ports::AddressLookup`].

pub mod address_resolution;
pub mod cached_address_lookup;
pub mod error;
pub mod location;
pub mod ports;

pub use self::address_resolution::AddressResolver;
pub use self::cached_address_lookup::CachedAddressLookup;
pub use self::error::{Error, ErrorCode};
pub use self::location::{GeocodeMatch, LocationRecord, Point};
