//! Demo entry point: load a book catalog, run a sequence of ISBNs through a
//! small LRU cache, then look one up and print it.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::warn;

use bookcache::catalog::{BookCache, Catalog};
use bookcache::traits::CoreCache;

#[derive(Parser, Debug)]
#[command(name = "bookcache", about = "LRU book cache demo", version)]
struct Args {
    /// Path to the JSON book catalog
    #[arg(long, default_value = "data/books.json")]
    catalog: PathBuf,

    /// Cache capacity
    #[arg(long, default_value_t = 3)]
    capacity: usize,

    /// ISBN to look up after the inserts
    #[arg(long, default_value = "1237")]
    lookup: String,

    /// ISBNs to run through the cache, in order
    #[arg(default_values_t = [
        "1234".to_string(),
        "1235".to_string(),
        "1236".to_string(),
        "1237".to_string(),
        "1238".to_string(),
    ])]
    isbns: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let catalog = Catalog::from_path(&args.catalog)
        .with_context(|| format!("loading catalog from {}", args.catalog.display()))?;
    let mut cache = BookCache::new(args.capacity).context("configuring cache")?;

    for isbn in &args.isbns {
        match catalog.get_book_info(isbn) {
            Some(record) => {
                cache.put(isbn.clone(), record.clone());
            }
            None => warn!(isbn = %isbn, "skipping ISBN not in catalog"),
        }
    }

    match cache.get(&args.lookup) {
        Some(record) => println!("{}", serde_json::to_string_pretty(record)?),
        None => println!("{}: not cached", args.lookup),
    }

    Ok(())
}
