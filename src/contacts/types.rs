use serde::{Deserialize, Serialize};

/// Numeric identifier assigned to a contact by the record store.
pub type ContactId = u64;

/// Anything the record store can hold.
///
/// The store owns id assignment, so a record only has to expose its id slot.
pub trait Record: Clone {
    fn id(&self) -> Option<ContactId>;

    /// Stamps the id chosen by the store onto the record.
    fn assign_id(&mut self, id: ContactId);
}

/// A single address book entry.
///
/// `id` stays `None` until the record store assigns one on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Option<ContactId>,
    pub name: String,
    pub phone_number: String,
}

impl Contact {
    /// Builds a contact that has not been stored yet.
    pub fn new(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            phone_number: phone_number.into(),
        }
    }

    pub fn with_id(mut self, id: ContactId) -> Self {
        self.id = Some(id);
        self
    }
}

impl Record for Contact {
    fn id(&self) -> Option<ContactId> {
        self.id
    }

    fn assign_id(&mut self, id: ContactId) {
        self.id = Some(id);
    }
}
