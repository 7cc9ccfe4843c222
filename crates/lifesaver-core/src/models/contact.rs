//! Emergency contact models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored emergency contact. Contacts are append/delete only; there is
/// no update operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmergencyContact {
    pub id: String,
    pub name: String,
    pub phone: String,
    /// Relationship to the user ("spouse", "parent", ...)
    pub relationship: String,
    pub created_at: DateTime<Utc>,
}

/// Client-supplied fields for creating a contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyContactCreate {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

impl EmergencyContact {
    /// Build a stored contact from client input, stamping id and timestamp.
    pub fn new(input: EmergencyContactCreate) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: input.name,
            phone: input.phone,
            relationship: input.relationship,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_contact() {
        let contact = EmergencyContact::new(EmergencyContactCreate {
            name: "Grace".into(),
            phone: "555-0100".into(),
            relationship: "sister".into(),
        });
        assert_eq!(contact.id.len(), 36); // UUID format
        assert_eq!(contact.relationship, "sister");
    }

    #[test]
    fn test_ids_are_unique() {
        let input = EmergencyContactCreate {
            name: "Grace".into(),
            phone: "555-0100".into(),
            relationship: "sister".into(),
        };
        let a = EmergencyContact::new(input.clone());
        let b = EmergencyContact::new(input);
        assert_ne!(a.id, b.id);
    }
}
