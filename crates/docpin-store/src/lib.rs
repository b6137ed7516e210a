//! docpin Storage Layer
//!
//! Implements the ContentStore trait over the JSON exercise dataset.
//!
//! # Architecture
//!
//! - Records are kept as raw JSON objects so unrelated fields survive a save
//! - Classifier inputs are read leniently: missing or malformed fields become empty
//! - Only the `resources` field is ever written
//!
//! # Examples
//!
//! ```no_run
//! use docpin_domain::ContentStore;
//! use docpin_store::JsonContentStore;
//!
//! let store = JsonContentStore::open("exercises.json").unwrap();
//! let untagged = store.items().unwrap().iter().filter(|i| !i.has_references()).count();
//! println!("{} exercises need references", untagged);
//! ```

#![warn(missing_docs)]

mod json;
mod memory;
mod record;

pub use json::JsonContentStore;
pub use memory::MemoryContentStore;
pub use record::{item_from_record, references_to_value, ReferenceRecord};

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// File could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON is valid but not an exercise list
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}
