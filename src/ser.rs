//! Serialization of [`MultivaluedMap`] with serde.
//!
//! A map serializes as a serde map from key to sequence, entries in store
//! order. The null policy is not serialized.
//!
//! ```rust
//! use multivalued_map::MultivaluedMap;
//!
//! let mut map = MultivaluedMap::new();
//! map.add_all("b", [2, 3]);
//! map.add("a", 1);
//!
//! assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"b":[2,3],"a":[1]}"#);
//! ```

use crate::map::MultivaluedMap;
use crate::store::Store;
use serde::ser::{Serialize, SerializeMap, Serializer};

impl<K, V, S, P> Serialize for MultivaluedMap<K, V, S, P>
where
    K: Serialize,
    V: Serialize,
    S: Store<K, V>,
{
    fn serialize<Ser>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.store().len()))?;
        for (key, values) in self.store().iter() {
            map.serialize_entry(key, values)?;
        }
        map.end()
    }
}
