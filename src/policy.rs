//! Policies for absent values.
//!
//! Every value-accepting mutator of [`MultivaluedMap`](crate::MultivaluedMap)
//! takes an `Option<V>`. A real value is stored as-is; an absent one is handed
//! to the map's [`NullPolicy`] together with the target sequence, and the
//! policy decides what, if anything, ends up in it.
//!
//! - [`IgnoreNulls`]: default, the absent value is dropped
//! - [`Sentinel`]: a clone of a marker value is stored in its place
//! - any `Fn(&mut Vec<V>, NullPosition)` closure
//!
//! ## Examples
//!
//! ```rust
//! use multivalued_map::{MultivaluedMap, Sentinel};
//!
//! let mut headers = MultivaluedMap::<&str, String>::new().with_null_policy(Sentinel(String::new()));
//! headers.add("Accept", None);
//! headers.add("Accept", "text/plain".to_string());
//! assert_eq!(headers.get("Accept").unwrap(), &["", "text/plain"]);
//! ```

/// Where an absent value was requested to go.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NullPosition {
    /// Appended, as by `add`, `add_all` and `put_single`.
    Back,
    /// Prepended, as by `add_first`.
    Front,
}

/// Strategy invoked when a caller supplies an absent value.
///
/// Both hooks default to doing nothing, so an implementation only overrides
/// the positions it cares about.
///
/// # Examples
///
/// ```rust
/// use multivalued_map::{MultivaluedMap, NullPolicy};
///
/// #[derive(Default)]
/// struct ZeroAtBack;
///
/// impl NullPolicy<i32> for ZeroAtBack {
///     fn add_null(&self, values: &mut Vec<i32>) {
///         values.push(0);
///     }
/// }
///
/// let mut map = MultivaluedMap::<&str, i32>::new().with_null_policy(ZeroAtBack);
/// map.add("k", None);
/// map.add_first("k", None);
/// assert_eq!(map.get("k").unwrap(), &[0]);
/// ```
pub trait NullPolicy<V> {
    /// Called with the target sequence when an absent value is appended.
    fn add_null(&self, values: &mut Vec<V>) {
        let _ = values;
    }

    /// Called with the target sequence when an absent value is prepended.
    fn add_first_null(&self, values: &mut Vec<V>) {
        let _ = values;
    }
}

/// Drops absent values. The target sequence is left as it was.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IgnoreNulls;

impl<V> NullPolicy<V> for IgnoreNulls {
    fn add_null(&self, values: &mut Vec<V>) {
        log::trace!("ignoring absent value appended to a sequence of {}", values.len());
    }

    fn add_first_null(&self, values: &mut Vec<V>) {
        log::trace!("ignoring absent value prepended to a sequence of {}", values.len());
    }
}

/// Stores a clone of the wrapped marker wherever an absent value was requested.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sentinel<V>(pub V);

impl<V: Clone> NullPolicy<V> for Sentinel<V> {
    fn add_null(&self, values: &mut Vec<V>) {
        values.push(self.0.clone());
    }

    fn add_first_null(&self, values: &mut Vec<V>) {
        values.insert(0, self.0.clone());
    }
}

impl<V, F> NullPolicy<V> for F
where
    F: Fn(&mut Vec<V>, NullPosition),
{
    fn add_null(&self, values: &mut Vec<V>) {
        self(values, NullPosition::Back)
    }

    fn add_first_null(&self, values: &mut Vec<V>) {
        self(values, NullPosition::Front)
    }
}

/// Appends `value`, or defers to `policy` when it is absent.
pub(crate) fn push_back<V, P: NullPolicy<V> + ?Sized>(
    policy: &P,
    values: &mut Vec<V>,
    value: Option<V>,
) {
    match value {
        Some(value) => values.push(value),
        None => policy.add_null(values),
    }
}

/// Prepends `value`, or defers to `policy` when it is absent.
pub(crate) fn push_front<V, P: NullPolicy<V> + ?Sized>(
    policy: &P,
    values: &mut Vec<V>,
    value: Option<V>,
) {
    match value {
        Some(value) => values.insert(0, value),
        None => policy.add_first_null(values),
    }
}
