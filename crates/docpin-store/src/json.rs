//! JSON file content store

use crate::{item_from_record, references_to_value, StoreError};
use docpin_domain::{ContentItem, ContentStore, ReferenceEntry};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const WRAPPER_KEY: &str = "exercises";
const REFERENCES_KEY: &str = "resources";

/// Top-level shape of the dataset file
#[derive(Debug, Clone)]
enum Layout {
    /// `[ {...}, {...} ]`
    Array,
    /// `{ "exercises": [...], ...other keys }`
    Wrapped(Map<String, Value>),
}

/// Content store backed by a JSON file
///
/// The whole file is loaded on open and written back on [`JsonContentStore::save`].
/// Records are kept as raw JSON objects; only `resources` is modified.
#[derive(Debug)]
pub struct JsonContentStore {
    path: PathBuf,
    layout: Layout,
    records: Vec<Map<String, Value>>,
    ids: Vec<String>,
    index: HashMap<String, usize>,
    dirty: bool,
}

impl JsonContentStore {
    /// Open and parse a dataset file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let store = Self::from_json(path, &contents)?;
        debug!("Loaded {} records from {}", store.len(), path.display());
        Ok(store)
    }

    /// Parse a dataset from a string; `path` is where [`save`](Self::save) writes
    pub fn from_json<P: AsRef<Path>>(path: P, contents: &str) -> Result<Self, StoreError> {
        let document: Value = serde_json::from_str(contents)?;

        let (layout, list) = match document {
            Value::Array(list) => (Layout::Array, list),
            Value::Object(mut map) => match map.remove(WRAPPER_KEY) {
                Some(Value::Array(list)) => (Layout::Wrapped(map), list),
                _ => {
                    return Err(StoreError::InvalidDocument(format!(
                        "expected an array or an object with an '{}' array",
                        WRAPPER_KEY
                    )))
                }
            },
            _ => {
                return Err(StoreError::InvalidDocument(
                    "expected an array of exercises".to_string(),
                ))
            }
        };

        let mut records = Vec::with_capacity(list.len());
        for (idx, value) in list.into_iter().enumerate() {
            match value {
                Value::Object(map) => records.push(map),
                other => {
                    return Err(StoreError::InvalidDocument(format!(
                        "record {} is not an object: {}",
                        idx, other
                    )))
                }
            }
        }

        let mut ids = Vec::with_capacity(records.len());
        let mut index = HashMap::new();
        for (idx, record) in records.iter().enumerate() {
            let mut id = item_from_record(record, &format!("#{}", idx)).id;
            if index.contains_key(&id) {
                let free = free_positional_id(&index, idx);
                warn!("Exercise id '{}' at record {} is already taken, addressing it as '{}'", id, idx, free);
                id = free;
            }
            index.insert(id.clone(), idx);
            ids.push(id);
        }

        Ok(Self {
            path: path.as_ref().to_path_buf(),
            layout,
            records,
            ids,
            index,
            dirty: false,
        })
    }

    /// Path the store saves to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether there are unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Look up one item by id
    pub fn get(&self, id: &str) -> Option<ContentItem> {
        self.index.get(id).map(|&idx| self.item_at(idx))
    }

    /// Render the dataset as pretty JSON
    pub fn to_json(&self) -> Result<String, StoreError> {
        let list = Value::Array(self.records.iter().cloned().map(Value::Object).collect());
        let document = match &self.layout {
            Layout::Array => list,
            Layout::Wrapped(rest) => {
                let mut map = rest.clone();
                map.insert(WRAPPER_KEY.to_string(), list);
                Value::Object(map)
            }
        };

        let mut out = serde_json::to_string_pretty(&document)?;
        out.push('\n');
        Ok(out)
    }

    /// Write the dataset back atomically (temp file then rename)
    pub fn save(&mut self) -> Result<(), StoreError> {
        let contents = self.to_json()?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, contents)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        self.dirty = false;
        debug!("Saved {} records to {}", self.len(), self.path.display());
        Ok(())
    }

    fn item_at(&self, idx: usize) -> ContentItem {
        let mut item = item_from_record(&self.records[idx], &self.ids[idx]);
        item.id = self.ids[idx].clone();
        item
    }
}

/// `#idx`, or `#idx-N` with the smallest N that is not taken yet
fn free_positional_id(index: &HashMap<String, usize>, idx: usize) -> String {
    let base = format!("#{}", idx);
    if !index.contains_key(&base) {
        return base;
    }
    let mut n = 1;
    loop {
        let candidate = format!("{}-{}", base, n);
        if !index.contains_key(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

impl ContentStore for JsonContentStore {
    type Error = StoreError;

    fn items(&self) -> Result<Vec<ContentItem>, Self::Error> {
        Ok((0..self.records.len()).map(|idx| self.item_at(idx)).collect())
    }

    fn set_references(
        &mut self,
        id: &str,
        references: Vec<ReferenceEntry>,
    ) -> Result<bool, Self::Error> {
        let Some(&idx) = self.index.get(id) else {
            return Ok(false);
        };

        self.records[idx].insert(REFERENCES_KEY.to_string(), references_to_value(&references));
        self.dirty = true;
        Ok(true)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        if self.dirty {
            self.save()?;
        }
        Ok(())
    }
}
