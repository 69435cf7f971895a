use super::error::{DirectoryError, Result};
use super::index::NameIndex;
use super::store::RecordStore;
use super::types::{Contact, ContactId};

use parking_lot::RwLock;

struct DirectoryState {
    store: RecordStore<Contact>,
    index: NameIndex,
}

/// Entry point for every contact operation.
///
/// The record store and the name index share one lock, so each mutation
/// lands in both or in neither, and readers never see one without the other.
pub struct ContactDirectory {
    state: RwLock<DirectoryState>,
}

impl ContactDirectory {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(DirectoryState {
                store: RecordStore::new(),
                index: NameIndex::new(),
            }),
        }
    }

    /// Stores a new contact and files it under its name.
    ///
    /// Any id already on `contact` is overwritten by the store.
    pub fn create(&self, contact: Contact) -> Contact {
        let mut guard = self.state.write();
        let state = &mut *guard;

        let created = state.store.create(contact);
        state.index.insert(created.clone());

        tracing::debug!("Created contact {:?} under '{}'", created.id, created.name);
        created
    }

    pub fn read(&self, id: ContactId) -> Result<Contact> {
        let state = self.state.read();
        state.store.get_by_id(id).cloned()
    }

    /// Replaces an existing contact, moving its index entry if the name changed.
    ///
    /// The old entry is always evicted and the new one reinserted, even when
    /// the name is the same.
    pub fn update(&self, contact: Contact) -> Result<Contact> {
        let id = contact.id.ok_or(DirectoryError::MissingId)?;

        let mut guard = self.state.write();
        let state = &mut *guard;

        let current = state.store.get_by_id(id)?.clone();
        state.index.evict(&current);
        state.store.update(id, contact.clone());
        state.index.insert(contact.clone());

        tracing::debug!(
            "Updated contact {} ('{}' -> '{}')",
            id,
            current.name,
            contact.name
        );
        Ok(contact)
    }

    pub fn delete(&self, id: ContactId) -> Result<()> {
        let mut guard = self.state.write();
        let state = &mut *guard;

        let current = state.store.get_by_id(id)?.clone();
        state.index.evict(&current);
        state.store.remove_by_id(id);

        tracing::debug!("Deleted contact {} from '{}'", id, current.name);
        Ok(())
    }

    /// Every contact whose name starts with `prefix`.
    ///
    /// Results follow name order, then ascending id within a name.
    pub fn search_by_prefix(&self, prefix: &str) -> Vec<Contact> {
        let state = self.state.read();
        state
            .index
            .prefix_search(prefix)
            .flat_map(|contacts| contacts.values().cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.state.read().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().store.is_empty()
    }

    /// Verifies that the record store and the name index agree.
    ///
    /// Every stored record must be filed exactly once, under its own name and
    /// id, and the index must hold nothing else and no empty value-sets.
    pub fn check_consistency(&self) -> Result<()> {
        let state = self.state.read();

        let mut indexed = 0usize;
        for (name, contacts) in state.index.iter() {
            if contacts.is_empty() {
                return Err(DirectoryError::Corrupted(format!(
                    "empty value-set under '{}'",
                    name
                )));
            }
            for (id, contact) in contacts {
                if &contact.name != name || contact.id != Some(*id) {
                    return Err(DirectoryError::Corrupted(format!(
                        "contact {} misfiled under '{}'",
                        id, name
                    )));
                }
                match state.store.get_by_id(*id) {
                    Ok(stored) if stored == contact => {}
                    Ok(_) => {
                        return Err(DirectoryError::Corrupted(format!(
                            "stale copy of contact {} under '{}'",
                            id, name
                        )));
                    }
                    Err(_) => {
                        return Err(DirectoryError::Corrupted(format!(
                            "contact {} indexed under '{}' but not stored",
                            id, name
                        )));
                    }
                }
                indexed += 1;
            }
        }

        if indexed != state.store.len() {
            return Err(DirectoryError::Corrupted(format!(
                "{} contacts stored but {} indexed",
                state.store.len(),
                indexed
            )));
        }

        Ok(())
    }
}

impl Default for ContactDirectory {
    fn default() -> Self {
        Self::new()
    }
}
