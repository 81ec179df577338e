//! Mapping helpers from geospatial port failures to domain errors.

use tokio::task::JoinError;

use crate::domain::Error;
use crate::domain::ports::GeospatialSourceError;

pub(super) fn map_source_error(error: GeospatialSourceError) -> Error {
    match error {
        GeospatialSourceError::NotFound { message } => Error::not_found(message),
        upstream @ GeospatialSourceError::Upstream { .. } => Error::upstream(upstream.to_string()),
        GeospatialSourceError::Validation { message } => Error::validation(message),
        GeospatialSourceError::Transport { message } => Error::internal(message),
    }
}

pub(super) fn map_join_error(error: &JoinError) -> Error {
    Error::internal(format!("boundary lookup task failed: {error}"))
}

#[cfg(test)]
mod tests {
    //! Checks each port failure lands on its domain code.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(
        GeospatialSourceError::not_found("No results found for address: X"),
        ErrorCode::NotFound
    )]
    #[case(
        GeospatialSourceError::upstream("Suburb", 500_u16, "Internal Server Error"),
        ErrorCode::UpstreamError
    )]
    #[case(
        GeospatialSourceError::validation("Suburb response validation error"),
        ErrorCode::ValidationError
    )]
    #[case(
        GeospatialSourceError::transport("connection reset"),
        ErrorCode::InternalError
    )]
    fn maps_each_variant(#[case] error: GeospatialSourceError, #[case] expected: ErrorCode) {
        assert_eq!(map_source_error(error).code(), expected);
    }

    #[rstest]
    fn upstream_message_keeps_status_and_reason() {
        let mapped = map_source_error(GeospatialSourceError::upstream(
            "Boundary",
            502_u16,
            "Bad Gateway",
        ));
        assert_eq!(mapped.message(), "Boundary API error: 502 Bad Gateway");
    }

    #[rstest]
    fn transport_message_is_carried_unchanged() {
        let mapped = map_source_error(GeospatialSourceError::transport("request timed out"));
        assert_eq!(mapped.message(), "request timed out");
    }
}
