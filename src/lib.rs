//! # multivalued_map
//!
//! An ordered map from keys to sequences of values, built as a thin adapter
//! over an ordinary associative container.
//!
//! ## What is it for?
//!
//! Query parameters, form fields and HTTP headers all map one name to several
//! values while usually being read as if they had one. [`MultivaluedMap`]
//! covers both views: plain map operations on `key -> Vec<V>` pass straight
//! through to the backing store, and a handful of conveniences treat each
//! sequence as a single logical value.
//!
//! ## Key Features
//!
//! - **Single or many**: `put_single` / `get_first` next to `add`, `add_all`, `add_first`
//! - **Pluggable storage**: insertion-ordered [`IndexMap`](indexmap::IndexMap) by
//!   default, or any [`Store`] such as `HashMap` or `BTreeMap`
//! - **Absent-value policy**: a [`NullPolicy`] strategy decides what an absent
//!   value turns into, without touching the insertion logic
//! - **Order-insensitive equality**: [`MultivaluedMap::equals_ignore_value_order`]
//! - **Serde Compatible**: serializes as a map of key to sequence
//!
//! ## Quick Start
//!
//! ```rust
//! use multivalued_map::MultivaluedMap;
//!
//! let mut headers = MultivaluedMap::new();
//! headers.add("Accept", "text/html");
//! headers.add("Accept", "application/json");
//! headers.put_single("Host", "example.com");
//!
//! assert_eq!(headers.get_first("Accept"), Some(&"text/html"));
//! assert_eq!(headers.get("Accept").map(Vec::len), Some(2));
//! ```
//!
//! ### Absent Values
//!
//! Every mutator accepts `Option<V>`. By default an absent value is dropped;
//! the key is still registered.
//!
//! ```rust
//! use multivalued_map::{MultivaluedMap, Sentinel};
//!
//! let mut dropped: MultivaluedMap<&str, &str> = MultivaluedMap::new();
//! dropped.add("flag", None);
//! assert_eq!(dropped.get("flag").map(Vec::len), Some(0));
//!
//! let mut marked = MultivaluedMap::<&str, &str>::new().with_null_policy(Sentinel(""));
//! marked.add("flag", None);
//! assert_eq!(marked.get_first("flag"), Some(&""));
//! ```
//!
//! ### Comparing Ignoring Value Order
//!
//! ```rust
//! use multivalued_map::multivalued_map;
//!
//! let a = multivalued_map! { "x" => [1, 2] };
//! let b = multivalued_map! { "x" => [2, 1] };
//!
//! assert_ne!(a, b);
//! assert!(a.equals_ignore_value_order(&b));
//! ```
//!
//! ## Concurrency
//!
//! The map has no internal synchronization. It is `Send` and `Sync` exactly
//! when its store and policy are; compound operations such as `put_single`
//! touch the store more than once, so shared maps need an outer lock.
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade: `trace` when the default policy
//! drops an absent value, `debug` when an absent store or collection is
//! rejected. Install any logger to see them.

pub mod de;
pub mod error;
pub mod macros;
pub mod map;
pub mod policy;
pub mod ser;
pub mod store;

pub use error::{Error, Result};
pub use map::{MultivaluedBTreeMap, MultivaluedHashMap, MultivaluedMap};
pub use policy::{IgnoreNulls, NullPolicy, NullPosition, Sentinel};
pub use store::{Lookup, Store};
