//! Error types for multi-valued map construction and bulk insertion.
//!
//! Only two calls can fail, and both fail for the same reason: a required
//! structural argument was absent.
//!
//! - **Absent store**: [`MultivaluedMap::try_from_store`] was given `None`
//! - **Absent values**: [`MultivaluedMap::try_add_all`] was given `None`
//!
//! Absent *individual* values are never errors. They are handed to the map's
//! [`NullPolicy`](crate::NullPolicy) instead.
//!
//! ## Examples
//!
//! ```rust
//! use multivalued_map::{Error, MultivaluedMap};
//! use indexmap::IndexMap;
//!
//! let result = MultivaluedMap::<String, i32>::try_from_store(None::<IndexMap<String, Vec<i32>>>);
//! assert_eq!(result.unwrap_err(), Error::NullStore);
//! ```
//!
//! [`MultivaluedMap::try_from_store`]: crate::MultivaluedMap::try_from_store
//! [`MultivaluedMap::try_add_all`]: crate::MultivaluedMap::try_add_all

use thiserror::Error;

/// Invalid-argument errors raised by [`MultivaluedMap`](crate::MultivaluedMap).
///
/// Errors are reported synchronously at the offending call and leave the map
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The backing store supplied at construction was absent.
    #[error("Invalid argument: underlying store must not be absent")]
    NullStore,

    /// The collection supplied to a bulk add was absent.
    #[error("Invalid argument: supplied collection of values must not be absent")]
    NullValues,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert!(Error::NullStore.to_string().contains("store"));
        assert!(Error::NullValues.to_string().contains("values"));
        assert!(Error::NullStore.to_string().starts_with("Invalid argument"));
    }
}
