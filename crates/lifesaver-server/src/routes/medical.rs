//! Medical profile routes.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};

use lifesaver_core::models::{MedicalInfo, MedicalInfoCreate};
use lifesaver_core::StoreError;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn create_medical_info(
    State(state): State<AppState>,
    Json(input): Json<MedicalInfoCreate>,
) -> Result<Json<MedicalInfo>, ApiError> {
    let info = MedicalInfo::new(input);
    state.store()?.insert_medical_info(&info)?;
    Ok(Json(info))
}

pub async fn list_medical_info(
    State(state): State<AppState>,
) -> Result<Json<Vec<MedicalInfo>>, ApiError> {
    let infos = state.store()?.list_medical_info()?;
    Ok(Json(infos))
}

pub async fn get_medical_info_by_id(
    State(state): State<AppState>,
    Path(info_id): Path<String>,
) -> Result<Json<MedicalInfo>, ApiError> {
    let info = state
        .store()?
        .get_medical_info(&info_id)?
        .ok_or_else(|| ApiError::NotFound("Medical info not found".into()))?;
    Ok(Json(info))
}

pub async fn update_medical_info(
    State(state): State<AppState>,
    Path(info_id): Path<String>,
    Json(input): Json<MedicalInfoCreate>,
) -> Result<Json<MedicalInfo>, ApiError> {
    let updated = state
        .store()?
        .replace_medical_info(&info_id, &input)
        .map_err(|e| match e {
            StoreError::NotFound(_) => ApiError::NotFound("Medical info not found".into()),
            other => ApiError::from(other),
        })?;
    Ok(Json(updated))
}

pub async fn delete_medical_info(
    State(state): State<AppState>,
    Path(info_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let deleted = state.store()?.delete_medical_info(&info_id)?;
    if !deleted {
        return Err(ApiError::NotFound("Medical info not found".into()));
    }
    Ok(Json(json!({ "message": "Medical info deleted successfully" })))
}
