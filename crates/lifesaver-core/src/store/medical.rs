//! Medical profile store operations.

use super::{Collection, Store, StoreResult};
use crate::models::{MedicalInfo, MedicalInfoCreate};

impl Store {
    /// Insert a new medical profile.
    pub fn insert_medical_info(&self, info: &MedicalInfo) -> StoreResult<()> {
        self.insert(Collection::MedicalInfo, &info.id, info)
    }

    /// List medical profiles in storage order, up to the collection cap.
    pub fn list_medical_info(&self) -> StoreResult<Vec<MedicalInfo>> {
        self.list(Collection::MedicalInfo)
    }

    /// Get a medical profile by id.
    pub fn get_medical_info(&self, id: &str) -> StoreResult<Option<MedicalInfo>> {
        self.get(Collection::MedicalInfo, id)
    }

    /// Replace every client-supplied field of a profile, keeping its id
    /// and creation timestamp.
    pub fn replace_medical_info(
        &self,
        id: &str,
        fields: &MedicalInfoCreate,
    ) -> StoreResult<MedicalInfo> {
        let fields = serde_json::to_value(fields)?;
        self.replace(Collection::MedicalInfo, id, &fields)
    }

    /// Delete a medical profile. Returns whether a document matched.
    pub fn delete_medical_info(&self, id: &str) -> StoreResult<bool> {
        self.delete(Collection::MedicalInfo, id)
    }
}
