//! HTTP inbound adapter exposing REST endpoints.

pub mod address;
pub mod error;
pub mod health;
pub mod response_headers;
pub mod state;

pub use error::ApiResult;
