//! Emergency contact routes.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use lifesaver_core::models::{EmergencyContact, EmergencyContactCreate};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn create_emergency_contact(
    State(state): State<AppState>,
    Json(input): Json<EmergencyContactCreate>,
) -> Result<Json<EmergencyContact>, ApiError> {
    let contact = EmergencyContact::new(input);
    state.store()?.insert_emergency_contact(&contact)?;
    Ok(Json(contact))
}

pub async fn get_emergency_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmergencyContact>>, ApiError> {
    let contacts = state.store()?.list_emergency_contacts()?;
    Ok(Json(contacts))
}

pub async fn delete_emergency_contact(
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let deleted = state.store()?.delete_emergency_contact(&contact_id)?;
    if !deleted {
        return Err(ApiError::NotFound("Contact not found".into()));
    }
    Ok(Json(json!({ "message": "Contact deleted successfully" })))
}
