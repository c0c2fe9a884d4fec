//! bookcache: fixed-capacity LRU caching for book records keyed by ISBN.
//!
//! The core is [`policy::lru::LruCache`]: a hash index combined with a
//! sentinel-bounded recency list for O(1) lookup, insertion, and eviction.
//! The [`catalog`] module is the thin collaborator that feeds it.

pub mod ds;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod traits;

#[cfg(feature = "catalog")]
pub mod catalog;
