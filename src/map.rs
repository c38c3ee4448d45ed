//! The multi-valued map adapter.
//!
//! [`MultivaluedMap`] wraps a [`Store`] from keys to `Vec<V>` and layers the
//! multi-value conveniences on top of it: set a single value, read the first
//! value, append, prepend, bulk append, and compare ignoring value order. All
//! plain map operations pass straight through to the store.
//!
//! ## Why IndexMap?
//!
//! The default store is an [`IndexMap`], so keys iterate in the order they were
//! first registered. Any other [`Store`] can be supplied with
//! [`MultivaluedMap::from_store`].
//!
//! ## Examples
//!
//! ```rust
//! use multivalued_map::MultivaluedMap;
//!
//! let mut params = MultivaluedMap::new();
//! params.add("tag", "rust");
//! params.add("tag", "serde");
//! params.put_single("page", "2");
//!
//! assert_eq!(params.get_first("tag"), Some(&"rust"));
//! assert_eq!(params.get("tag").unwrap(), &["rust", "serde"]);
//! assert_eq!(params.to_string(), "{tag=[rust, serde], page=[2]}");
//! ```

use crate::error::{Error, Result};
use crate::policy::{self, IgnoreNulls, NullPolicy};
use crate::store::{Lookup, Store};
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};
use std::marker::PhantomData;

/// An ordered map from keys to sequences of values.
///
/// `S` is the backing store and `P` the [`NullPolicy`] applied when a caller
/// supplies an absent value. Equality, hashing and formatting look only at the
/// store.
///
/// # Examples
///
/// ```rust
/// use multivalued_map::MultivaluedMap;
///
/// let mut map = MultivaluedMap::new();
/// map.add_first("k", 1);
/// map.add_first("k", 2);
/// map.add("k", None);
///
/// // absent values are dropped by default
/// assert_eq!(map.get("k").unwrap(), &[2, 1]);
/// ```
pub struct MultivaluedMap<K, V, S = IndexMap<K, Vec<V>>, P = IgnoreNulls> {
    store: S,
    null_policy: P,
    _marker: PhantomData<fn() -> (K, V)>,
}

/// A [`MultivaluedMap`] backed by a [`HashMap`]. Key order is unspecified.
pub type MultivaluedHashMap<K, V> = MultivaluedMap<K, V, HashMap<K, Vec<V>>>;

/// A [`MultivaluedMap`] backed by a [`BTreeMap`]. Keys iterate sorted.
pub type MultivaluedBTreeMap<K, V> = MultivaluedMap<K, V, BTreeMap<K, Vec<V>>>;

impl<K, V> MultivaluedMap<K, V> {
    /// Creates an empty map with an insertion-ordered store.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multivalued_map::MultivaluedMap;
    ///
    /// let map: MultivaluedMap<String, String> = MultivaluedMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_store(IndexMap::new())
    }

    /// Creates an empty map with room for `capacity` keys.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_store(IndexMap::with_capacity(capacity))
    }
}

impl<K, V, S> MultivaluedMap<K, V, S> {
    /// Wraps an existing store. Sequences already in it are kept as they are.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multivalued_map::MultivaluedMap;
    /// use std::collections::BTreeMap;
    ///
    /// let mut store = BTreeMap::new();
    /// store.insert("b", vec![2]);
    /// store.insert("a", vec![1]);
    ///
    /// let map = MultivaluedMap::from_store(store);
    /// assert_eq!(map.keys().collect::<Vec<_>>(), vec![&"a", &"b"]);
    /// ```
    #[must_use]
    pub fn from_store(store: S) -> Self {
        MultivaluedMap {
            store,
            null_policy: IgnoreNulls,
            _marker: PhantomData,
        }
    }

    /// Wraps a store that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullStore`] if `store` is `None`.
    pub fn try_from_store(store: Option<S>) -> Result<Self> {
        match store {
            Some(store) => Ok(Self::from_store(store)),
            None => {
                log::debug!("rejecting multivalued map construction without a store");
                Err(Error::NullStore)
            }
        }
    }
}

impl<K, V, S, P> MultivaluedMap<K, V, S, P> {
    /// Replaces the policy applied to absent values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multivalued_map::{MultivaluedMap, Sentinel};
    ///
    /// let mut map = MultivaluedMap::<&str, i32>::new().with_null_policy(Sentinel(0));
    /// map.add("k", None);
    /// assert_eq!(map.get("k").unwrap(), &[0]);
    /// ```
    #[must_use]
    pub fn with_null_policy<Q: NullPolicy<V>>(self, null_policy: Q) -> MultivaluedMap<K, V, S, Q> {
        MultivaluedMap {
            store: self.store,
            null_policy,
            _marker: PhantomData,
        }
    }

    /// The policy applied to absent values.
    pub fn null_policy(&self) -> &P {
        &self.null_policy
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The backing store, mutably. Sequences changed through it bypass the
    /// null policy.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Unwraps the backing store.
    pub fn into_store(self) -> S {
        self.store
    }
}

impl<K, V, S: Store<K, V>, P: NullPolicy<V>> MultivaluedMap<K, V, S, P> {
    /// Replaces all values of `key` with `value`.
    ///
    /// The key ends up registered even when `value` is absent; what the
    /// sequence then holds is up to the null policy (empty by default).
    pub fn put_single(&mut self, key: K, value: impl Into<Option<V>>) {
        let values = self.store.entry_or_default(key);
        values.clear();
        policy::push_back(&self.null_policy, values, value.into());
    }

    /// Appends `value` to the values of `key`.
    pub fn add(&mut self, key: K, value: impl Into<Option<V>>) {
        let values = self.store.entry_or_default(key);
        policy::push_back(&self.null_policy, values, value.into());
    }

    /// Appends every element of `new_values` to the values of `key`, in order.
    ///
    /// An empty input returns immediately and does not register `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multivalued_map::MultivaluedMap;
    ///
    /// let mut map: MultivaluedMap<&str, i32> = MultivaluedMap::new();
    /// map.add_all("k", [Some(1), None, Some(3)]);
    /// map.add_all("empty", Vec::<i32>::new());
    ///
    /// assert_eq!(map.get("k").unwrap(), &[1, 3]);
    /// assert!(!map.contains_key("empty"));
    /// ```
    pub fn add_all<I>(&mut self, key: K, new_values: I)
    where
        I: IntoIterator,
        I::Item: Into<Option<V>>,
    {
        let mut new_values = new_values.into_iter().peekable();
        if new_values.peek().is_none() {
            return;
        }
        let values = self.store.entry_or_default(key);
        for value in new_values {
            policy::push_back(&self.null_policy, values, value.into());
        }
    }

    /// Like [`add_all`](Self::add_all), for a collection that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullValues`] if `new_values` is `None`. The map is left
    /// unchanged.
    pub fn try_add_all<I>(&mut self, key: K, new_values: Option<I>) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Option<V>>,
    {
        match new_values {
            Some(new_values) => {
                self.add_all(key, new_values);
                Ok(())
            }
            None => {
                log::debug!("rejecting bulk add without a collection of values");
                Err(Error::NullValues)
            }
        }
    }

    /// Inserts `value` in front of the values of `key`.
    pub fn add_first(&mut self, key: K, value: impl Into<Option<V>>) {
        let values = self.store.entry_or_default(key);
        policy::push_front(&self.null_policy, values, value.into());
    }

    /// The first value of `key`, if the key is registered with a non-empty
    /// sequence.
    pub fn get_first<Q: ?Sized>(&self, key: &Q) -> Option<&V>
    where
        S: Lookup<K, V, Q>,
    {
        self.store.get(key).and_then(|values| values.first())
    }

    /// The values of `key`, registering an empty sequence first if the key is
    /// not present. Never fails.
    pub fn get_values(&mut self, key: K) -> &mut Vec<V> {
        self.store.entry_or_default(key)
    }

    /// Registers `key` and appends each element of `new_values` through the
    /// null policy. Unlike `add_all`, an empty input still registers the key.
    pub(crate) fn append_values<I: IntoIterator<Item = Option<V>>>(&mut self, key: K, new_values: I) {
        let values = self.store.entry_or_default(key);
        for value in new_values {
            policy::push_back(&self.null_policy, values, value);
        }
    }

    /// Compares two maps, ignoring the order of values within each sequence.
    ///
    /// The maps are equal when they hold the same keys and, for every key,
    /// sequences of the same length where each value of this map's sequence
    /// is also contained in the other's. Duplicates are not counted, so
    /// `[1, 1, 2]` and `[1, 2, 2]` compare equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multivalued_map::{MultivaluedMap, MultivaluedBTreeMap};
    ///
    /// let mut a = MultivaluedMap::new();
    /// a.add_all("x", [1, 2]);
    /// let mut b = MultivaluedBTreeMap::default();
    /// b.add_all("x", [2, 1]);
    ///
    /// assert!(a.equals_ignore_value_order(&b));
    ///
    /// b.add("x", 2);
    /// assert!(!a.equals_ignore_value_order(&b));
    /// ```
    pub fn equals_ignore_value_order<S2, P2>(&self, other: &MultivaluedMap<K, V, S2, P2>) -> bool
    where
        V: PartialEq,
        S2: Lookup<K, V, K>,
    {
        if std::ptr::eq(
            self as *const Self as *const (),
            other as *const MultivaluedMap<K, V, S2, P2> as *const (),
        ) {
            return true;
        }
        if self.store.len() != other.store.len() {
            return false;
        }
        self.store.iter().all(|(key, values)| {
            other
                .store
                .get(key)
                .map_or(false, |other_values| same_values(values, other_values))
        })
    }

    /// The values registered under `key`.
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&Vec<V>>
    where
        S: Lookup<K, V, Q>,
    {
        self.store.get(key)
    }

    /// The values registered under `key`, mutably. Changes bypass the null
    /// policy.
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut Vec<V>>
    where
        S: Lookup<K, V, Q>,
    {
        self.store.get_mut(key)
    }

    /// Registers `values` under `key` as given, returning the replaced
    /// sequence.
    pub fn insert(&mut self, key: K, values: Vec<V>) -> Option<Vec<V>> {
        self.store.insert(key, values)
    }

    /// Registers every `(key, values)` pair, replacing existing sequences.
    pub fn put_all<I: IntoIterator<Item = (K, Vec<V>)>>(&mut self, entries: I) {
        for (key, values) in entries {
            self.store.insert(key, values);
        }
    }

    /// Unregisters `key` and returns its values. The remaining keys keep
    /// their order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use multivalued_map::MultivaluedMap;
    ///
    /// let mut map = MultivaluedMap::new();
    /// map.add("a", 1);
    /// map.add("b", 2);
    /// map.add("c", 3);
    ///
    /// assert_eq!(map.remove("b"), Some(vec![2]));
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["a", "c"]);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<Vec<V>>
    where
        S: Lookup<K, V, Q>,
    {
        self.store.remove(key)
    }

    /// Number of registered keys, counting keys with empty sequences.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether no key is registered.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Whether `key` is registered, even with an empty sequence.
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool
    where
        S: Lookup<K, V, Q>,
    {
        self.store.contains_key(key)
    }

    /// Whether some key holds exactly `values`, in that order.
    pub fn contains_value(&self, values: &[V]) -> bool
    where
        V: PartialEq,
    {
        self.store.iter().any(|(_, v)| v.as_slice() == values)
    }

    /// Unregisters every key.
    pub fn clear(&mut self) {
        self.store.clear()
    }

    /// Registered keys, in store order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.store.iter().map(|(key, _)| key)
    }

    /// Sequences of values, in store order.
    pub fn values(&self) -> impl Iterator<Item = &Vec<V>> + '_ {
        self.store.iter().map(|(_, values)| values)
    }

    /// `(key, values)` pairs, in store order.
    pub fn iter(&self) -> S::Iter<'_> {
        self.store.iter()
    }

    /// `(key, values)` pairs with mutable sequences, in store order.
    pub fn iter_mut(&mut self) -> S::IterMut<'_> {
        self.store.iter_mut()
    }
}

/// Same length, and every element of `a` occurs somewhere in `b`.
fn same_values<V: PartialEq>(a: &[V], b: &[V]) -> bool {
    a.len() == b.len() && a.iter().all(|value| b.contains(value))
}

impl<K, V, S: Default, P: Default> Default for MultivaluedMap<K, V, S, P> {
    fn default() -> Self {
        MultivaluedMap {
            store: S::default(),
            null_policy: P::default(),
            _marker: PhantomData,
        }
    }
}

impl<K, V, S: Clone, P: Clone> Clone for MultivaluedMap<K, V, S, P> {
    fn clone(&self) -> Self {
        MultivaluedMap {
            store: self.store.clone(),
            null_policy: self.null_policy.clone(),
            _marker: PhantomData,
        }
    }
}

impl<K, V, S: fmt::Debug, P> fmt::Debug for MultivaluedMap<K, V, S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.store, f)
    }
}

/// Renders `{key=[v1, v2], ...}` in store order.
impl<K, V, S, P> fmt::Display for MultivaluedMap<K, V, S, P>
where
    K: fmt::Display,
    V: fmt::Display,
    S: Store<K, V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, values)) in self.store.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}=[", key)?;
            for (j, value) in values.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", value)?;
            }
            f.write_str("]")?;
        }
        f.write_str("}")
    }
}

/// Maps are equal when they register the same keys with equal sequences,
/// whatever their store and policy types.
impl<K, V, S, P, S2, P2> PartialEq<MultivaluedMap<K, V, S2, P2>> for MultivaluedMap<K, V, S, P>
where
    V: PartialEq,
    S: Store<K, V>,
    S2: Lookup<K, V, K>,
{
    fn eq(&self, other: &MultivaluedMap<K, V, S2, P2>) -> bool {
        self.store.len() == other.store.len()
            && self.store.iter().all(|(key, values)| {
                other.store.get(key).map_or(false, |other_values| values == other_values)
            })
    }
}

impl<K, V: Eq, S: Lookup<K, V, K>, P> Eq for MultivaluedMap<K, V, S, P> {}

impl<K, V, S: Hash, P> Hash for MultivaluedMap<K, V, S, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.store.hash(state)
    }
}

impl<K, V, H> From<IndexMap<K, Vec<V>, H>> for MultivaluedMap<K, V, IndexMap<K, Vec<V>, H>>
where
    K: Hash + Eq,
    H: BuildHasher,
{
    fn from(store: IndexMap<K, Vec<V>, H>) -> Self {
        Self::from_store(store)
    }
}

impl<K, V, H> From<HashMap<K, Vec<V>, H>> for MultivaluedMap<K, V, HashMap<K, Vec<V>, H>>
where
    K: Hash + Eq,
    H: BuildHasher,
{
    fn from(store: HashMap<K, Vec<V>, H>) -> Self {
        Self::from_store(store)
    }
}

impl<K: Ord, V> From<BTreeMap<K, Vec<V>>> for MultivaluedMap<K, V, BTreeMap<K, Vec<V>>> {
    fn from(store: BTreeMap<K, Vec<V>>) -> Self {
        Self::from_store(store)
    }
}

/// Groups `(key, value)` pairs by key, keeping the order of values per key.
impl<K, V, S, P> FromIterator<(K, V)> for MultivaluedMap<K, V, S, P>
where
    S: Store<K, V> + Default,
    P: NullPolicy<V> + Default,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, S: Store<K, V>, P: NullPolicy<V>> Extend<(K, V)> for MultivaluedMap<K, V, S, P> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl<K, V, S: IntoIterator<Item = (K, Vec<V>)>, P> IntoIterator for MultivaluedMap<K, V, S, P> {
    type Item = (K, Vec<V>);
    type IntoIter = S::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.store.into_iter()
    }
}

impl<'a, K, V, S: Store<K, V>, P> IntoIterator for &'a MultivaluedMap<K, V, S, P> {
    type Item = (&'a K, &'a Vec<V>);
    type IntoIter = S::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{NullPosition, Sentinel};

    #[test]
    fn test_add_then_get_first() {
        let mut map: MultivaluedMap<&str, &str> = MultivaluedMap::new();
        map.add("k", None);
        map.add("k", "first");
        map.add("k", "second");
        assert_eq!(map.get_first("k"), Some(&"first"));
        assert_eq!(map.get_first("missing"), None);
    }

    #[test]
    fn test_get_first_of_empty_sequence() {
        let mut map: MultivaluedMap<&str, i32> = MultivaluedMap::new();
        map.get_values("k");
        assert!(map.contains_key("k"));
        assert_eq!(map.get_first("k"), None);
    }

    #[test]
    fn test_put_single_replaces() {
        let mut map = MultivaluedMap::new();
        map.add_all("k", [1, 2, 3]);
        map.put_single("k", 4);
        assert_eq!(map.get("k"), Some(&vec![4]));
        assert_eq!(map.get_first("k"), Some(&4));
    }

    #[test]
    fn test_put_single_absent_registers_empty() {
        let mut map = MultivaluedMap::new();
        map.add_all("k", [1, 2]);
        map.put_single("k", None);
        assert_eq!(map.get("k"), Some(&vec![]));

        map.put_single("new", None);
        assert_eq!(map.get("new"), Some(&vec![]));
    }

    #[test]
    fn test_add_absent_registers_empty() {
        let mut map: MultivaluedMap<&str, i32> = MultivaluedMap::new();
        map.add("k", None);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("k").map(Vec::len), Some(0));
    }

    #[test]
    fn test_add_all_empty_is_noop() {
        let mut map: MultivaluedMap<&str, i32> = MultivaluedMap::new();
        map.add_all("k", Vec::<i32>::new());
        assert!(!map.contains_key("k"));

        map.add("k", 1);
        map.add_all("k", Vec::<Option<i32>>::new());
        assert_eq!(map.get("k"), Some(&vec![1]));
    }

    #[test]
    fn test_add_all_only_absent_registers_key() {
        let mut map: MultivaluedMap<&str, i32> = MultivaluedMap::new();
        map.add_all("k", [None, None]);
        assert_eq!(map.get("k"), Some(&vec![]));
    }

    #[test]
    fn test_try_add_all() {
        let mut map = MultivaluedMap::new();
        assert_eq!(map.try_add_all("k", None::<Vec<i32>>), Err(Error::NullValues));
        assert!(map.is_empty());

        assert_eq!(map.try_add_all("k", Some(vec![1, 2])), Ok(()));
        assert_eq!(map.get("k"), Some(&vec![1, 2]));
    }

    #[test]
    fn test_try_from_store() {
        let result = MultivaluedMap::<&str, i32>::try_from_store(None);
        assert_eq!(result.unwrap_err(), Error::NullStore);

        let map = MultivaluedMap::<&str, i32>::try_from_store(Some(IndexMap::new())).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_add_first_reverses() {
        let mut map = MultivaluedMap::new();
        for i in 0..4 {
            map.add_first("k", i);
        }
        assert_eq!(map.get("k"), Some(&vec![3, 2, 1, 0]));
    }

    #[test]
    fn test_equals_ignore_value_order() {
        let a: MultivaluedMap<&str, i32> = vec![("x", 1), ("x", 2)].into_iter().collect();
        let b: MultivaluedMap<&str, i32> = vec![("x", 2), ("x", 1)].into_iter().collect();
        assert!(a.equals_ignore_value_order(&b));
        assert_ne!(a.get("x"), b.get("x"));
        assert!(a.equals_ignore_value_order(&a));
    }

    #[test]
    fn test_equals_ignore_value_order_counts() {
        let mut a = MultivaluedMap::new();
        a.add_all("x", [1, 2]);
        let mut b = MultivaluedMap::new();
        b.add_all("x", [1, 2, 2]);
        assert!(!a.equals_ignore_value_order(&b));
        assert!(!b.equals_ignore_value_order(&a));

        // same length and distinct values; multiplicities are not compared
        let mut c = MultivaluedMap::new();
        c.add_all("x", [1, 1, 2]);
        let mut d = MultivaluedMap::new();
        d.add_all("x", [1, 2, 2]);
        assert!(c.equals_ignore_value_order(&d));
        assert!(d.equals_ignore_value_order(&c));

        let mut e = MultivaluedMap::new();
        e.add_all("x", [1, 2, 3]);
        assert!(!e.equals_ignore_value_order(&c));
    }

    #[test]
    fn test_equals_ignore_value_order_keys() {
        let mut a = MultivaluedMap::new();
        a.add("x", 1);
        let mut b = MultivaluedMap::new();
        b.add("y", 1);
        assert!(!a.equals_ignore_value_order(&b));

        b.add("x", 1);
        assert!(!a.equals_ignore_value_order(&b));
    }

    #[test]
    fn test_equality_ignores_policy() {
        let mut a = MultivaluedMap::new();
        a.add("k", 1);
        let mut b = MultivaluedMap::new().with_null_policy(Sentinel(0));
        b.add("k", 1);
        assert!(a.equals_ignore_value_order(&b));
        assert_eq!(a.store(), b.store());
    }

    #[test]
    fn test_delegated_operations() {
        let mut map = MultivaluedMap::new();
        assert_eq!(map.insert("a", vec![1]), None);
        map.put_all(vec![("b", vec![2, 3]), ("a", vec![4])]);
        assert_eq!(map.len(), 2);
        assert!(map.contains_value(&[2, 3]));
        assert!(!map.contains_value(&[3, 2]));
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map.values().map(Vec::len).sum::<usize>(), 3);

        if let Some(values) = map.get_mut("b") {
            values.retain(|v| *v != 2);
        }
        for (_, values) in map.iter_mut() {
            values.push(0);
        }
        assert_eq!(map.get("b"), Some(&vec![3, 0]));

        assert_eq!(map.remove("a"), Some(vec![4, 0]));
        assert_eq!(map.remove("a"), None);
        map.clear();
        assert!(map.is_empty());
    }

    #[test]
    fn test_closure_policy() {
        let mut map = MultivaluedMap::<&str, String>::new().with_null_policy(
            |values: &mut Vec<String>, position: NullPosition| match position {
                NullPosition::Back => values.push("<null>".to_string()),
                NullPosition::Front => {}
            },
        );
        map.add("k", None);
        map.add_first("k", None);
        map.put_single("j", None);
        assert_eq!(map.get("k"), Some(&vec!["<null>".to_string()]));
        assert_eq!(map.get("j"), Some(&vec!["<null>".to_string()]));
    }

    #[test]
    fn test_display_and_debug() {
        let mut map = MultivaluedMap::new();
        map.add_all("a", [1, 2]);
        map.get_values("b");
        assert_eq!(map.to_string(), "{a=[1, 2], b=[]}");
        assert_eq!(format!("{:?}", map), r#"{"a": [1, 2], "b": []}"#);
    }

    #[test]
    fn test_hash_follows_store() {
        use std::collections::hash_map::DefaultHasher;

        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        let mut a = MultivaluedBTreeMap::default();
        a.add("k", 1);
        let b = MultivaluedMap::from_store(a.store().clone());
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(a.store()));
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_into_iter() {
        let map: MultivaluedHashMap<&str, i32> = vec![("a", 1), ("a", 2)].into_iter().collect();
        let borrowed: Vec<_> = (&map).into_iter().collect();
        assert_eq!(borrowed, vec![(&"a", &vec![1, 2])]);
        let owned: Vec<_> = map.into_iter().collect();
        assert_eq!(owned, vec![("a", vec![1, 2])]);
    }
}
