//! Backing stores for [`MultivaluedMap`](crate::MultivaluedMap).
//!
//! A store is any associative container from keys to `Vec<V>`. The map adapter
//! delegates every core operation to it, so the store alone decides key
//! iteration order and lookup cost:
//!
//! | Store | Key order | Key bounds |
//! |---|---|---|
//! | [`IndexMap`] (default) | insertion order | `Hash + Eq` |
//! | [`HashMap`] | unspecified | `Hash + Eq` |
//! | [`BTreeMap`] | sorted | `Ord` |
//!
//! Lookups go through [`Lookup`], implemented once per container with the
//! bounds that container needs for a query type `Q`. A `Hash + Eq` key that
//! is not `Ord` is therefore fine for the hashed stores.

use indexmap::{Equivalent, IndexMap};
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A key -> ordered-sequence-of-values container.
pub trait Store<K, V> {
    /// Iterator over `(key, sequence)` pairs in store order.
    type Iter<'a>: Iterator<Item = (&'a K, &'a Vec<V>)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    /// Iterator over `(key, mutable sequence)` pairs in store order.
    type IterMut<'a>: Iterator<Item = (&'a K, &'a mut Vec<V>)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    /// Number of registered keys.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registers `values` under `key`, returning the sequence it replaced.
    fn insert(&mut self, key: K, values: Vec<V>) -> Option<Vec<V>>;

    /// The sequence registered under `key`, registering an empty one first if
    /// there is none.
    fn entry_or_default(&mut self, key: K) -> &mut Vec<V>;

    fn clear(&mut self);

    fn iter(&self) -> Self::Iter<'_>;

    fn iter_mut(&mut self) -> Self::IterMut<'_>;
}

/// Lookups in a [`Store`] by a query type `Q`.
///
/// Each container states the bounds it needs on `Q`: [`Equivalent`] for
/// [`IndexMap`], `Borrow` plus `Hash + Eq` for [`HashMap`] and `Borrow` plus
/// `Ord` for [`BTreeMap`].
pub trait Lookup<K, V, Q: ?Sized>: Store<K, V> {
    fn get(&self, key: &Q) -> Option<&Vec<V>>;

    fn get_mut(&mut self, key: &Q) -> Option<&mut Vec<V>>;

    fn contains_key(&self, key: &Q) -> bool {
        self.get(key).is_some()
    }

    /// Unregisters `key`, returning its sequence. Stores that keep an order
    /// keep it for the remaining keys.
    fn remove(&mut self, key: &Q) -> Option<Vec<V>>;
}

impl<K, V, H> Store<K, V> for IndexMap<K, Vec<V>, H>
where
    K: Hash + Eq,
    H: BuildHasher,
{
    type Iter<'a> = indexmap::map::Iter<'a, K, Vec<V>>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    type IterMut<'a> = indexmap::map::IterMut<'a, K, Vec<V>>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn len(&self) -> usize {
        IndexMap::len(self)
    }

    fn insert(&mut self, key: K, values: Vec<V>) -> Option<Vec<V>> {
        IndexMap::insert(self, key, values)
    }

    fn entry_or_default(&mut self, key: K) -> &mut Vec<V> {
        IndexMap::entry(self, key).or_default()
    }

    fn clear(&mut self) {
        IndexMap::clear(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        IndexMap::iter(self)
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        IndexMap::iter_mut(self)
    }
}

impl<K, V, Q, H> Lookup<K, V, Q> for IndexMap<K, Vec<V>, H>
where
    K: Hash + Eq,
    Q: ?Sized + Hash + Equivalent<K>,
    H: BuildHasher,
{
    fn get(&self, key: &Q) -> Option<&Vec<V>> {
        IndexMap::get(self, key)
    }

    fn get_mut(&mut self, key: &Q) -> Option<&mut Vec<V>> {
        IndexMap::get_mut(self, key)
    }

    fn remove(&mut self, key: &Q) -> Option<Vec<V>> {
        // swap_remove would reorder the remaining keys
        IndexMap::shift_remove(self, key)
    }
}

impl<K, V, H> Store<K, V> for HashMap<K, Vec<V>, H>
where
    K: Hash + Eq,
    H: BuildHasher,
{
    type Iter<'a> = std::collections::hash_map::Iter<'a, K, Vec<V>>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    type IterMut<'a> = std::collections::hash_map::IterMut<'a, K, Vec<V>>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn insert(&mut self, key: K, values: Vec<V>) -> Option<Vec<V>> {
        HashMap::insert(self, key, values)
    }

    fn entry_or_default(&mut self, key: K) -> &mut Vec<V> {
        HashMap::entry(self, key).or_default()
    }

    fn clear(&mut self) {
        HashMap::clear(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        HashMap::iter(self)
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        HashMap::iter_mut(self)
    }
}

impl<K, V, Q, H> Lookup<K, V, Q> for HashMap<K, Vec<V>, H>
where
    K: Hash + Eq + Borrow<Q>,
    Q: ?Sized + Hash + Eq,
    H: BuildHasher,
{
    fn get(&self, key: &Q) -> Option<&Vec<V>> {
        HashMap::get(self, key)
    }

    fn get_mut(&mut self, key: &Q) -> Option<&mut Vec<V>> {
        HashMap::get_mut(self, key)
    }

    fn remove(&mut self, key: &Q) -> Option<Vec<V>> {
        HashMap::remove(self, key)
    }
}

impl<K, V> Store<K, V> for BTreeMap<K, Vec<V>>
where
    K: Ord,
{
    type Iter<'a> = std::collections::btree_map::Iter<'a, K, Vec<V>>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    type IterMut<'a> = std::collections::btree_map::IterMut<'a, K, Vec<V>>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn insert(&mut self, key: K, values: Vec<V>) -> Option<Vec<V>> {
        BTreeMap::insert(self, key, values)
    }

    fn entry_or_default(&mut self, key: K) -> &mut Vec<V> {
        BTreeMap::entry(self, key).or_default()
    }

    fn clear(&mut self) {
        BTreeMap::clear(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        BTreeMap::iter(self)
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        BTreeMap::iter_mut(self)
    }
}

impl<K, V, Q> Lookup<K, V, Q> for BTreeMap<K, Vec<V>>
where
    K: Ord + Borrow<Q>,
    Q: ?Sized + Ord,
{
    fn get(&self, key: &Q) -> Option<&Vec<V>> {
        BTreeMap::get(self, key)
    }

    fn get_mut(&mut self, key: &Q) -> Option<&mut Vec<V>> {
        BTreeMap::get_mut(self, key)
    }

    fn remove(&mut self, key: &Q) -> Option<Vec<V>> {
        BTreeMap::remove(self, key)
    }
}
