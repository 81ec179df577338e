//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod address_key;
mod address_lookup;
mod geospatial_source;
mod location_cache;

pub use address_key::{AddressKey, AddressKeyValidationError};
#[cfg(test)]
pub use address_lookup::MockAddressLookup;
pub use address_lookup::{AddressLookup, FixtureAddressLookup};
#[cfg(test)]
pub use geospatial_source::MockGeospatialSource;
pub use geospatial_source::{FixtureGeospatialSource, GeospatialSource, GeospatialSourceError};
pub use location_cache::LocationCache;
#[cfg(test)]
pub use location_cache::MockLocationCache;
