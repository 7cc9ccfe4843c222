//! HTTP route wiring.

mod alerts;
mod chat;
mod contacts;
mod medical;

use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

/// Build the API router. The caller nests this under `/api`.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route(
            "/medical-info",
            post(medical::create_medical_info).get(medical::list_medical_info),
        )
        .route(
            "/medical-info/:info_id",
            get(medical::get_medical_info_by_id)
                .put(medical::update_medical_info)
                .delete(medical::delete_medical_info),
        )
        .route(
            "/emergency-contacts",
            post(contacts::create_emergency_contact).get(contacts::get_emergency_contacts),
        )
        .route(
            "/emergency-contacts/:contact_id",
            delete(contacts::delete_emergency_contact),
        )
        .route("/sos-alert", post(alerts::create_sos_alert))
        .route("/sos-alerts", get(alerts::get_sos_alerts))
        .route("/chat", post(chat::chat_with_ai))
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "LifeSaver API is running" }))
}
