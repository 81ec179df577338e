//! Normalised cache key for address lookups.
use thiserror::Error;

/// Cache key derived from a free-text address.
///
/// Two addresses share a key when they differ only in letter case or
/// surrounding whitespace.
///
/// # Examples
/// ```
/// use address_lookup::domain::ports::AddressKey;
///
/// let a = AddressKey::new("  346 Panorama Avenue Bathurst ").unwrap();
/// let b = AddressKey::new("346 PANORAMA AVENUE BATHURST").unwrap();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressKey(String);

impl AddressKey {
    /// Normalise `address` into a key, rejecting blank input.
    pub fn new(address: &str) -> Result<Self, AddressKeyValidationError> {
        let trimmed = address.trim();
        if trimmed.is_empty() {
            return Err(AddressKeyValidationError::Empty);
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    /// Borrow the normalised key.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for AddressKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors returned when constructing [`AddressKey`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressKeyValidationError {
    /// Address is empty after trimming whitespace.
    #[error("address must not be empty")]
    Empty,
}
