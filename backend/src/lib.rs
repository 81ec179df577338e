//! NSW address lookup library.
//!
//! Resolves free-text addresses into coordinates, state electoral district,
//! and suburb using the NSW Spatial Services feature servers, with a bounded
//! in-memory cache in front.

pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
