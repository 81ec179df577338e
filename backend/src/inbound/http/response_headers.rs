//! Shared response header policies for HTTP handlers.

use std::time::{Duration, SystemTime};

use actix_web::HttpResponseBuilder;
use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CACHE_CONTROL, Expires, HttpDate,
};

/// Seconds shared caches and browsers may reuse a successful lookup.
pub const LOOKUP_MAX_AGE_SECONDS: u32 = 300;

/// Public cache policy for successful lookups.
pub const PUBLIC_LOOKUP_CACHE_CONTROL: &str = "public, max-age=300, s-maxage=300";

/// Attach the permissive CORS headers used by every response.
pub fn with_cors(builder: &mut HttpResponseBuilder) -> &mut HttpResponseBuilder {
    builder
        .insert_header((ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .insert_header((ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
        .insert_header((ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS"))
}

/// Absolute expiry matching [`LOOKUP_MAX_AGE_SECONDS`] from `now`.
pub fn lookup_expiry(now: SystemTime) -> HttpDate {
    HttpDate::from(now + Duration::from_secs(u64::from(LOOKUP_MAX_AGE_SECONDS)))
}

/// Attach the public cache policy for successful lookups.
///
/// `Expires` mirrors `max-age` for HTTP/1.0 caches that ignore
/// `Cache-Control`.
pub fn with_public_cache(builder: &mut HttpResponseBuilder) -> &mut HttpResponseBuilder {
    builder
        .insert_header((CACHE_CONTROL, PUBLIC_LOOKUP_CACHE_CONTROL))
        .insert_header(Expires(lookup_expiry(SystemTime::now())))
}
