//! SOS alert routes.

use axum::extract::State;
use axum::Json;

use lifesaver_core::models::{SosAlert, SosAlertCreate};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn create_sos_alert(
    State(state): State<AppState>,
    Json(input): Json<SosAlertCreate>,
) -> Result<Json<SosAlert>, ApiError> {
    let alert = SosAlert::new(input);
    state.store()?.insert_sos_alert(&alert)?;
    Ok(Json(alert))
}

pub async fn get_sos_alerts(
    State(state): State<AppState>,
) -> Result<Json<Vec<SosAlert>>, ApiError> {
    let alerts = state.store()?.list_sos_alerts()?;
    Ok(Json(alerts))
}
