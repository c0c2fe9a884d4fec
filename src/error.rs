//! Error types for the bookcache library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when cache configuration parameters are
//!   invalid (zero capacity).
//! - [`CatalogError`]: Returned when a book catalog cannot be loaded
//!   (I/O or JSON failure).
//!
//! A cache miss is never an error; it is the `None` arm of the lookup
//! result.
//!
//! ## Example Usage
//!
//! ```
//! use bookcache::error::ConfigError;
//! use bookcache::policy::lru::LruCache;
//!
//! // Fallible constructor for user-configurable parameters
//! let cache: Result<LruCache<String, i32>, ConfigError> = LruCache::new(100);
//! assert!(cache.is_ok());
//!
//! // Zero capacity is caught without panicking
//! let bad = LruCache::<String, i32>::new(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`LruCache::new`](crate::policy::lru::LruCache::new). Carries a
/// human-readable description of which parameter failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// CatalogError
// ---------------------------------------------------------------------------

/// Error returned when a book catalog cannot be loaded.
#[cfg(feature = "catalog")]
#[derive(Debug)]
pub enum CatalogError {
    /// The catalog file could not be read.
    Io(std::io::Error),
    /// The catalog file is not a valid JSON object keyed by ISBN.
    Json(serde_json::Error),
}

#[cfg(feature = "catalog")]
impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read catalog: {err}"),
            CatalogError::Json(err) => write!(f, "failed to parse catalog: {err}"),
        }
    }
}

#[cfg(feature = "catalog")]
impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Json(err) => Some(err),
        }
    }
}

#[cfg(feature = "catalog")]
impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err)
    }
}

#[cfg(feature = "catalog")]
impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Json(err)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
