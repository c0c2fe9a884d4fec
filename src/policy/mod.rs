pub mod lru;

#[cfg(feature = "concurrent")]
pub use lru::ConcurrentLruCache;
pub use lru::LruCache;
