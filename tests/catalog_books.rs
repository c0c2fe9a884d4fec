// ==============================================
// CATALOG-DRIVEN CACHE TESTS (integration)
// ==============================================
//
// Drives the cache the way the demo does: fetch records from a catalog,
// put them through a small cache, and verify what stays resident.

#![cfg(feature = "catalog")]

use std::io::Write;

use serde_json::json;

use bookcache::catalog::{BookCache, Catalog};
use bookcache::traits::CoreCache;

fn sample_catalog() -> Catalog {
    let data = json!({
        "1234": { "title": "Dune", "author": "Frank Herbert" },
        "1235": { "title": "Hyperion", "author": "Dan Simmons" },
        "1236": { "title": "Foundation", "author": "Isaac Asimov" },
        "1237": { "title": "Neuromancer", "author": "William Gibson" },
        "1238": { "title": "Snow Crash", "author": "Neal Stephenson" },
    });
    Catalog::from_reader(data.to_string().as_bytes()).unwrap()
}

fn insert_books(cache: &mut BookCache, catalog: &Catalog, isbns: &[&str]) {
    for isbn in isbns {
        if let Some(record) = catalog.get_book_info(isbn) {
            cache.put(isbn.to_string(), record.clone());
        }
    }
}

#[test]
fn demo_flow_keeps_newest_three() {
    let catalog = sample_catalog();
    let mut cache = BookCache::new(3).unwrap();

    insert_books(&mut cache, &catalog, &["1234", "1235", "1236", "1237", "1238"]);

    // capacity 3: only the last three inserts are resident
    assert!(!cache.contains(&"1234".to_string()));
    assert!(!cache.contains(&"1235".to_string()));

    let cached = cache.get(&"1237".to_string()).unwrap();
    assert_eq!(cached, catalog.get_book_info("1237").unwrap());
}

#[test]
fn cached_records_match_catalog_records() {
    let catalog = sample_catalog();
    let mut cache = BookCache::new(3).unwrap();
    insert_books(&mut cache, &catalog, &["1234", "1235", "1236"]);

    for isbn in ["1234", "1235", "1236"] {
        assert_eq!(
            cache.get(&isbn.to_string()),
            catalog.get_book_info(isbn),
            "cache and catalog disagree for {isbn}"
        );
    }
}

#[test]
fn catalog_loads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "1234": {{ "title": "Dune" }}, "1235": {{ "title": "Hyperion" }} }}"#
    )
    .unwrap();

    let catalog = Catalog::from_path(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get_book_info("1234").unwrap()["title"], "Dune");
    assert_eq!(catalog.get_book_info("1236"), None);
}

#[test]
fn records_stay_opaque() {
    // records with wildly different shapes coexist; the cache never
    // interprets them
    let data = json!({
        "a": { "title": "x" },
        "b": [1, 2, 3],
        "c": "bare string",
        "d": {},
    });
    let catalog = Catalog::from_reader(data.to_string().as_bytes()).unwrap();
    let mut cache = BookCache::new(4).unwrap();
    insert_books(&mut cache, &catalog, &["a", "b", "c", "d"]);

    assert_eq!(cache.len(), 4);
    assert_eq!(cache.get(&"b".to_string()), Some(&json!([1, 2, 3])));
    assert_eq!(cache.get(&"d".to_string()), Some(&json!({})));
}
