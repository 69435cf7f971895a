use super::error::{DirectoryError, Result};
use super::types::{ContactId, Record};

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

const FIRST_ID: ContactId = 1;

/// Authoritative id -> record map.
///
/// Ids come from a monotonic counter and are never handed out twice, even
/// after the record that held one is removed.
pub struct RecordStore<V> {
    records: HashMap<ContactId, V>,
    generator: AtomicU64,
}

impl<V: Record> RecordStore<V> {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            generator: AtomicU64::new(FIRST_ID),
        }
    }

    /// Assigns the next id to `record`, stores it and returns the stamped copy.
    pub fn create(&mut self, mut record: V) -> V {
        let id = self.generator.fetch_add(1, Ordering::SeqCst);
        if let Some(incoming) = record.id() {
            tracing::warn!("Replacing caller-supplied id {} with {}", incoming, id);
        }
        record.assign_id(id);
        self.records.insert(id, record.clone());
        record
    }

    pub fn get_by_id(&self, id: ContactId) -> Result<&V> {
        self.records.get(&id).ok_or(DirectoryError::NotFound(id))
    }

    /// Replaces the record at `id`, returning the previous value.
    ///
    /// Existence is the caller's responsibility; an unknown id simply inserts.
    pub fn update(&mut self, id: ContactId, record: V) -> Option<V> {
        self.records.insert(id, record)
    }

    pub fn remove_by_id(&mut self, id: ContactId) -> Option<V> {
        self.records.remove(&id)
    }

    pub fn contains(&self, id: ContactId) -> bool {
        self.records.contains_key(&id)
    }

    /// The id the next `create` will hand out.
    pub fn next_id(&self) -> ContactId {
        self.generator.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ContactId, &V)> {
        self.records.iter()
    }
}

impl<V: Record> Default for RecordStore<V> {
    fn default() -> Self {
        Self::new()
    }
}
