use super::types::{Contact, ContactId};

use std::collections::BTreeMap;
use std::ops::Bound;

/// All contacts filed under one name, keyed by id.
pub type ValueSet = BTreeMap<ContactId, Contact>;

/// Ordered name -> value-set map supporting prefix enumeration.
///
/// Keys are compared byte-wise, so every key sharing a prefix sits in one
/// contiguous range starting at the prefix itself. A prefix scan seeks to that
/// point and stops at the first key that no longer matches.
#[derive(Debug, Default)]
pub struct NameIndex {
    entries: BTreeMap<String, ValueSet>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&ValueSet> {
        self.entries.get(name)
    }

    /// Replaces the whole value-set stored under `name`.
    pub fn put(&mut self, name: impl Into<String>, contacts: ValueSet) {
        self.entries.insert(name.into(), contacts);
    }

    pub fn remove(&mut self, name: &str) -> Option<ValueSet> {
        self.entries.remove(name)
    }

    /// Files `contact` under its name, opening a fresh entry when none exists.
    ///
    /// Returns `false` without touching the index if the contact has no id.
    pub fn insert(&mut self, contact: Contact) -> bool {
        let Some(id) = contact.id else {
            return false;
        };
        match self.entries.get_mut(&contact.name) {
            Some(contacts) => {
                contacts.insert(id, contact);
            }
            None => {
                let name = contact.name.clone();
                self.put(name, ValueSet::from([(id, contact)]));
            }
        }
        true
    }

    /// Removes `contact` from its name's value-set.
    ///
    /// The entry is dropped as soon as its set is empty.
    pub fn evict(&mut self, contact: &Contact) -> bool {
        let Some(id) = contact.id else {
            return false;
        };
        let Some(contacts) = self.entries.get_mut(&contact.name) else {
            return false;
        };
        let removed = contacts.remove(&id).is_some();
        if contacts.is_empty() {
            self.remove(&contact.name);
        }
        removed
    }

    /// Value-sets whose name starts with `prefix`, in key order.
    ///
    /// An empty prefix yields every entry. Each call walks the current state.
    pub fn prefix_search<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a ValueSet> + 'a {
        self.entries
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(name, _)| name.starts_with(prefix))
            .map(|(_, contacts)| contacts)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ValueSet)> {
        self.entries.iter()
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
