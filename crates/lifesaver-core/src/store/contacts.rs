//! Emergency contact store operations.

use super::{Collection, Store, StoreResult};
use crate::models::EmergencyContact;

impl Store {
    /// Insert a new emergency contact.
    pub fn insert_emergency_contact(&self, contact: &EmergencyContact) -> StoreResult<()> {
        self.insert(Collection::EmergencyContacts, &contact.id, contact)
    }

    /// List contacts in storage order, up to the collection cap.
    pub fn list_emergency_contacts(&self) -> StoreResult<Vec<EmergencyContact>> {
        self.list(Collection::EmergencyContacts)
    }

    /// Delete a contact. Returns whether a document matched.
    pub fn delete_emergency_contact(&self, id: &str) -> StoreResult<bool> {
        self.delete(Collection::EmergencyContacts, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmergencyContactCreate;

    fn setup_store() -> Store {
        Store::open_in_memory().unwrap()
    }

    fn sample_contact(name: &str) -> EmergencyContact {
        EmergencyContact::new(EmergencyContactCreate {
            name: name.into(),
            phone: "555-0100".into(),
            relationship: "sister".into(),
        })
    }

    #[test]
    fn test_insert_and_list() {
        let store = setup_store();
        let grace = sample_contact("Grace");
        let ada = sample_contact("Ada");
        store.insert_emergency_contact(&grace).unwrap();
        store.insert_emergency_contact(&ada).unwrap();

        let all = store.list_emergency_contacts().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], grace);
        assert_eq!(all[1], ada);
    }

    #[test]
    fn test_timestamp_round_trips() {
        let store = setup_store();
        let contact = sample_contact("Grace");
        store.insert_emergency_contact(&contact).unwrap();

        let all = store.list_emergency_contacts().unwrap();
        assert_eq!(all[0].created_at, contact.created_at);
    }

    #[test]
    fn test_delete() {
        let store = setup_store();
        let contact = sample_contact("Grace");
        store.insert_emergency_contact(&contact).unwrap();

        assert!(store.delete_emergency_contact(&contact.id).unwrap());
        assert!(store.list_emergency_contacts().unwrap().is_empty());
        assert!(!store.delete_emergency_contact(&contact.id).unwrap());
    }
}
