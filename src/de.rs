//! Deserialization of [`MultivaluedMap`] with serde.
//!
//! The input is a serde map from key to a sequence of optional values. Every
//! key is registered, even one with an empty sequence, and each `null`
//! element goes through the map's [`NullPolicy`], exactly as if it had been
//! passed to [`add`](MultivaluedMap::add). A key that appears more than once
//! keeps accumulating values in the same sequence.
//!
//! ```rust
//! use multivalued_map::MultivaluedMap;
//!
//! let map: MultivaluedMap<String, i32> =
//!     serde_json::from_str(r#"{"a": [1, null, 2], "b": []}"#).unwrap();
//!
//! assert_eq!(map.get("a").unwrap(), &[1, 2]);
//! assert_eq!(map.get("b").unwrap(), &Vec::<i32>::new());
//! ```

use crate::map::MultivaluedMap;
use crate::policy::NullPolicy;
use crate::store::Store;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::marker::PhantomData;

struct MultivaluedMapVisitor<K, V, S, P> {
    marker: PhantomData<fn() -> MultivaluedMap<K, V, S, P>>,
}

impl<'de, K, V, S, P> Visitor<'de> for MultivaluedMapVisitor<K, V, S, P>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
    S: Store<K, V> + Default,
    P: NullPolicy<V> + Default,
{
    type Value = MultivaluedMap<K, V, S, P>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map from keys to sequences of values")
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = MultivaluedMap::<K, V, S, P>::default();
        while let Some((key, new_values)) = access.next_entry::<K, Vec<Option<V>>>()? {
            map.append_values(key, new_values);
        }
        Ok(map)
    }
}

impl<'de, K, V, S, P> Deserialize<'de> for MultivaluedMap<K, V, S, P>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
    S: Store<K, V> + Default,
    P: NullPolicy<V> + Default,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(MultivaluedMapVisitor {
            marker: PhantomData,
        })
    }
}
