use axum::{extract::State, Json};
use pipeline_shared::ValidatedJson;
use speech_application::{GenerateSpeechRequest, GenerateSpeechResponse};

use crate::{error::HttpError, state::AppState};

pub async fn generate_speech(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<GenerateSpeechRequest>,
) -> Result<Json<GenerateSpeechResponse>, HttpError> {
    let job_id = request.job_id.clone();
    tracing::info!(job_id = %job_id, "generating speech");

    match state.usecase.generate_speech(request).await {
        Ok(response) => Ok(Json(response)),
        Err(error) => {
            tracing::error!(job_id = %job_id, error = %error, "speech generation failed");
            Err(HttpError::from(error))
        }
    }
}
