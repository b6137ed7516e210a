//! Integration tests for docpin-store
//!
//! These tests verify the load → modify → save → reload cycle on real files.

use docpin_domain::{ContentKind, ContentStore, ReferenceEntry};
use docpin_store::{JsonContentStore, StoreError};
use std::fs;

const DATASET: &str = r#"[
  {
    "id": "sum-array",
    "type": "javascript",
    "title": "Sum an Array",
    "description": "Add up every number",
    "instructions": "Use reduce to sum the array",
    "tags": ["arrays", "reduce"],
    "difficulty": 1,
    "tests": ["sum([1,2]) === 3"]
  },
  {
    "id": "nav-bar",
    "type": "html",
    "title": "Navigation",
    "resources": [
      { "label": "Existing", "url": "https://example.com/nav", "description": "Already tagged" }
    ]
  }
]
"#;

#[test]
fn test_open_reads_all_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exercises.json");
    fs::write(&path, DATASET).unwrap();

    let store = JsonContentStore::open(&path).unwrap();
    let items = store.items().unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].kind, ContentKind::Script);
    assert_eq!(items[0].level, Some(1));
    assert_eq!(items[1].kind, ContentKind::Markup);
    assert!(items[1].has_references());
}

#[test]
fn test_flush_persists_references_and_unknown_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exercises.json");
    fs::write(&path, DATASET).unwrap();

    let mut store = JsonContentStore::open(&path).unwrap();
    let entry = ReferenceEntry::new(
        "array-reduce",
        "MDN: Array.prototype.reduce()",
        "https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Array/reduce",
        "Folding an array into a single value",
    );
    store.set_references("sum-array", vec![entry]).unwrap();
    store.flush().unwrap();
    assert!(!store.is_dirty());

    let reloaded = JsonContentStore::open(&path).unwrap();
    let item = reloaded.get("sum-array").unwrap();
    assert_eq!(item.references.len(), 1);
    assert_eq!(item.references[0].label, "MDN: Array.prototype.reduce()");

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("sum([1,2]) === 3"));
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn test_clean_flush_does_not_rewrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exercises.json");
    fs::write(&path, DATASET).unwrap();

    let mut store = JsonContentStore::open(&path).unwrap();
    store.flush().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), DATASET);
}

#[test]
fn test_missing_file() {
    let result = JsonContentStore::open("/definitely/not/here.json");
    assert!(matches!(result, Err(StoreError::Io(_))));
}
