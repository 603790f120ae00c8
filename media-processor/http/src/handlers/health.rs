use axum::{extract::State, Json};
use media_application::SupportedFormatsResponse;
use pipeline_shared::HealthResponse;

use crate::{state::AppState, SERVICE_NAME};

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(Some(SERVICE_NAME)))
}

pub async fn supported_formats(State(state): State<AppState>) -> Json<SupportedFormatsResponse> {
    Json(state.usecase.supported_formats())
}
