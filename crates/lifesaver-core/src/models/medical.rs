//! Medical profile models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored medical profile with server-assigned identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicalInfo {
    /// UUID, generated at creation and never reassigned
    pub id: String,
    /// Person's name
    pub name: String,
    /// Blood group as given (no enumeration check)
    pub blood_group: String,
    /// Known allergies
    pub allergies: Option<String>,
    /// Existing medical conditions
    pub medical_conditions: Option<String>,
    /// Current medications
    pub medications: Option<String>,
    /// Emergency contact name
    pub emergency_contact_name: String,
    /// Emergency contact phone number
    pub emergency_contact_phone: String,
    /// Creation timestamp, untouched by updates
    pub created_at: DateTime<Utc>,
}

/// Client-supplied fields for creating or replacing a medical profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalInfoCreate {
    pub name: String,
    pub blood_group: String,
    pub allergies: Option<String>,
    pub medical_conditions: Option<String>,
    pub medications: Option<String>,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
}

impl MedicalInfo {
    /// Build a stored profile from client input, stamping id and timestamp.
    pub fn new(input: MedicalInfoCreate) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: input.name,
            blood_group: input.blood_group,
            allergies: input.allergies,
            medical_conditions: input.medical_conditions,
            medications: input.medications,
            emergency_contact_name: input.emergency_contact_name,
            emergency_contact_phone: input.emergency_contact_phone,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> MedicalInfoCreate {
        MedicalInfoCreate {
            name: "Ada".into(),
            blood_group: "O+".into(),
            allergies: Some("penicillin".into()),
            medical_conditions: None,
            medications: None,
            emergency_contact_name: "Grace".into(),
            emergency_contact_phone: "555-0100".into(),
        }
    }

    #[test]
    fn test_new_stamps_identity() {
        let before = Utc::now();
        let info = MedicalInfo::new(sample_input());
        assert_eq!(info.id.len(), 36); // UUID format
        assert_eq!(info.name, "Ada");
        assert_eq!(info.allergies, Some("penicillin".into()));
        assert!(info.created_at >= before);
    }

    #[test]
    fn test_timestamp_serializes_as_rfc3339() {
        let info = MedicalInfo::new(sample_input());
        let json = serde_json::to_value(&info).unwrap();
        let created_at = json["created_at"].as_str().unwrap();
        assert!(created_at.contains('T'));
        let parsed: MedicalInfo = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.created_at, info.created_at);
    }

    #[test]
    fn test_absent_optionals_serialize_as_null() {
        let info = MedicalInfo::new(sample_input());
        let json = serde_json::to_value(&info).unwrap();
        assert!(json["medications"].is_null());
    }

    #[test]
    fn test_unknown_input_fields_discarded() {
        let input: MedicalInfoCreate = serde_json::from_str(
            r#"{"name":"A","blood_group":"O+","emergency_contact_name":"B",
                "emergency_contact_phone":"555","favorite_color":"green"}"#,
        )
        .unwrap();
        assert_eq!(input.name, "A");
    }
}
