use axum::{extract::State, Json};
use pipeline_shared::HealthResponse;
use speech_application::SupportedLanguagesResponse;

use crate::{state::AppState, SERVICE_NAME};

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(Some(SERVICE_NAME)))
}

pub async fn supported_languages(
    State(state): State<AppState>,
) -> Json<SupportedLanguagesResponse> {
    Json(state.usecase.supported_languages())
}
