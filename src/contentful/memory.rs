//! In-memory content store.
//!
//! Serves entries from a fixture file so the site builds without CMS
//! credentials, and stands in for the CMS in tests. Filters are evaluated by
//! [`EntryQuery::matches`], the same filter object the HTTP client renders.

use super::delivery::decode_response;
use super::entry::EntryCollection;
use super::error::ContentError;
use super::query::EntryQuery;
use super::store::ContentStore;
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::{
    fs,
    path::Path,
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

/// Raw entries held in memory.
///
/// # Thread Safety
///
/// Entries sit behind a `RwLock`: concurrent queries read in parallel,
/// `insert` takes the write lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<Vec<Value>>,
    /// When set, every query fails with [`ContentError::Unavailable`].
    failing: AtomicBool,
    /// Number of `get_entries` calls served (including failed ones).
    calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new(entries: Vec<Value>) -> Self {
        Self {
            entries: RwLock::new(entries),
            ..Self::default()
        }
    }

    /// A store whose every query fails.
    pub fn failing() -> Self {
        let store = Self::default();
        store.set_failing(true);
        store
    }

    /// Load a fixture file: an API-shaped `{"items": [...], "includes": {...}}`
    /// object or a bare array of entries. Links are resolved on load.
    pub fn from_json_file(path: &Path) -> Result<Self, ContentError> {
        let content =
            fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ContentError> {
        let collection = decode_response(content)?;
        Ok(Self::new(collection.items))
    }

    pub fn insert(&self, entry: Value) {
        self.entries.write().push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn get_entries(&self, query: &EntryQuery) -> Result<EntryCollection, ContentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failing.load(Ordering::SeqCst) {
            return Err(ContentError::Unavailable(format!(
                "memory store is failing ({})",
                query.content_type
            )));
        }

        let mut items: Vec<Value> = self
            .entries
            .read()
            .iter()
            .filter(|entry| query.matches(entry))
            .cloned()
            .collect();
        let total = items.len() as u64;
        query.sort_and_limit(&mut items);

        Ok(EntryCollection {
            total,
            skip: 0,
            limit: query.limit.map_or(total, u64::from),
            items,
        })
    }

    fn label(&self) -> &str {
        "fixtures"
    }
}
