//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **http_fetch**: single-request transport plus the timeout and retry
//!   policy wrapped around it
//! - **nsw_spatial**: NSW Spatial Services feature servers behind the
//!   `GeospatialSource` port
//! - **cache**: bounded in-memory LRU behind the `LocationCache` port
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod cache;
pub mod http_fetch;
pub mod nsw_spatial;
