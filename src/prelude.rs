pub use crate::ds::{RecencyList, SlotArena, SlotId};
pub use crate::error::ConfigError;
pub use crate::policy::lru::LruCache;
pub use crate::traits::{CoreCache, LruCacheTrait};

#[cfg(feature = "concurrent")]
pub use crate::policy::lru::ConcurrentLruCache;

#[cfg(feature = "catalog")]
pub use crate::catalog::{BookCache, BookRecord, Catalog};
#[cfg(feature = "catalog")]
pub use crate::error::CatalogError;
