//! Port interface for caching resolved location records.
//!
//! Cache operations are in-memory and infallible; a miss is the only
//! negative outcome callers observe.

use super::AddressKey;
use crate::domain::LocationRecord;

/// Store of resolved locations keyed by normalised address.
#[cfg_attr(test, mockall::automock)]
pub trait LocationCache: Send + Sync {
    /// Return a clone of the cached record, refreshing its recency.
    fn get(&self, key: &AddressKey) -> Option<LocationRecord>;

    /// Store or refresh the record for `key`.
    fn put(&self, key: AddressKey, record: LocationRecord);
}
