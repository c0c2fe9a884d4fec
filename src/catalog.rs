//! Book catalog: the external collaborator the cache's callers use to fetch
//! a record before `put`.
//!
//! A catalog is a JSON object keyed by ISBN:
//!
//! ```json
//! {
//!   "1234": { "title": "Dune", "author": "Frank Herbert" },
//!   "1235": { "title": "Hyperion", "author": "Dan Simmons" }
//! }
//! ```
//!
//! Records are opaque to both the catalog and the cache; they are stored and
//! returned as raw JSON values, never interpreted. The cache itself never
//! calls into the catalog.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::error::CatalogError;
use crate::policy::lru::LruCache;

/// An opaque book record. The cache never looks inside it.
pub type BookRecord = serde_json::Value;

/// A fixed-capacity LRU cache of book records keyed by ISBN.
pub type BookCache = LruCache<String, BookRecord>;

/// In-memory book catalog keyed by ISBN.
#[derive(Debug, Default)]
pub struct Catalog {
    books: HashMap<String, BookRecord>,
}

impl Catalog {
    /// Loads a catalog from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let catalog = Self::from_reader(BufReader::new(file))?;
        info!(path = %path.display(), books = catalog.len(), "loaded book catalog");
        Ok(catalog)
    }

    /// Loads a catalog from any JSON reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        let books = serde_json::from_reader(reader)?;
        Ok(Self { books })
    }

    /// Retrieves the record for `isbn`, or `None` if the book is not in the
    /// catalog. Absence is a normal outcome, not an error.
    pub fn get_book_info(&self, isbn: &str) -> Option<&BookRecord> {
        let record = self.books.get(isbn);
        if record.is_none() {
            debug!(isbn, "book not in catalog");
        }
        record
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
