//! Pinned-note overlay.
//!
//! The pin set is advisory: reading it never fails, and stale entries are
//! pruned by [`PinIndex::reconcile`] after each full note load rather than
//! through any link to the note table.

use std::collections::HashSet;

use serde_json::Value;

use crate::error::Result;

mod store;

pub use store::{BlobStore, FileBlobStore, MemoryBlobStore};

pub const PINS_KEY: &str = "pinned_notes";

pub struct PinIndex<S> {
    store: S,
}

impl<S: BlobStore> PinIndex<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current pin set. Missing or unreadable storage reads as empty.
    pub fn pinned(&self) -> HashSet<String> {
        self.read_ids().into_iter().collect()
    }

    pub fn is_pinned(&self, id: &str) -> bool {
        self.read_ids().iter().any(|p| p == id)
    }

    /// Add or remove `id` and return the resulting set.
    pub fn set_pinned(&self, id: &str, pinned: bool) -> Result<HashSet<String>> {
        let mut set = self.pinned();
        let changed = if pinned {
            set.insert(id.to_string())
        } else {
            set.remove(id)
        };

        if changed {
            self.write_ids(set.iter().cloned().collect())?;
        }
        Ok(set)
    }

    /// Drop every pinned id not present in `live_ids`. Returns how many
    /// entries were removed.
    pub fn reconcile<I, T>(&self, live_ids: I) -> Result<usize>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let live: HashSet<String> = live_ids
            .into_iter()
            .map(|id| id.as_ref().to_string())
            .collect();

        let ids = self.read_ids();
        let kept: Vec<String> = ids.iter().filter(|id| live.contains(*id)).cloned().collect();
        let removed = ids.len() - kept.len();

        if removed > 0 {
            tracing::debug!(removed, "Pruning pins for deleted notes.");
            self.write_ids(kept)?;
        }
        Ok(removed)
    }

    fn read_ids(&self) -> Vec<String> {
        let raw = match self.store.get(PINS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read pinned notes. Treating as none pinned.");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            Ok(_) => {
                tracing::warn!("Pinned notes blob is not an array. Treating as none pinned.");
                Vec::new()
            }
            Err(err) => {
                tracing::warn!(error = %err, "Pinned notes blob is corrupt. Treating as none pinned.");
                Vec::new()
            }
        }
    }

    fn write_ids(&self, ids: Vec<String>) -> Result<()> {
        let mut seen = HashSet::new();
        let mut unique: Vec<String> = ids.into_iter().filter(|id| seen.insert(id.clone())).collect();
        unique.sort();
        let raw = serde_json::to_string(&unique)?;
        self.store.set(PINS_KEY, &raw)
    }
}
