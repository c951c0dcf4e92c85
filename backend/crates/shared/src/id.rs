//! Common ID Types
//!
//! Type-safe wrappers around store-assigned numeric row ids.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// Ids are assigned by the store on insert and never change afterwards, so
/// there is no constructor that invents a fresh value.
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type AdminId = Id<markers::Admin>;
/// let id = AdminId::from_i64(7);
/// assert_eq!(id.as_i64(), 7);
/// ```
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T> {
    value: i64,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Wrap a row id read from the store
    pub const fn from_i64(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub const fn as_i64(&self) -> i64 {
        self.value
    }
}

// Manual impls: derives would require `T: Clone` etc. on the marker.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    pub struct Admin;

    pub struct Customer;
}

pub type AdminId = Id<markers::Admin>;
pub type CustomerId = Id<markers::Customer>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip_through_i64() {
        let id = AdminId::from_i64(42);
        let raw: i64 = id.into();
        assert_eq!(raw, 42);
        assert_eq!(CustomerId::from(42).as_i64(), 42);
    }

    #[test]
    fn test_id_serializes_as_plain_number() {
        let id = CustomerId::from_i64(3);
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
        let back: CustomerId = serde_json::from_str("3").unwrap();
        assert_eq!(back, id);
    }
}
