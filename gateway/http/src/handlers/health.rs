use axum::Json;
use pipeline_shared::HealthResponse;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(None))
}
