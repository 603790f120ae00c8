use axum::{extract::State, Json};
use gateway_application::{TextToAudioRequest, TextToAudioResponse};
use pipeline_shared::ValidatedJson;

use crate::{error::HttpError, state::AppState};

pub async fn text_to_audio(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TextToAudioRequest>,
) -> Result<Json<TextToAudioResponse>, HttpError> {
    tracing::info!(
        voice_type = %request.voice_type,
        text_chars = request.text.chars().count(),
        filename = request.filename.as_deref().unwrap_or("auto"),
        "received text-to-audio request"
    );

    match state.text_to_audio.text_to_audio(request).await {
        Ok(response) => {
            tracing::info!(job_id = %response.id, filename = %response.filename, "text-to-audio request completed");
            Ok(Json(response))
        }
        Err(error) => {
            tracing::error!(error = %error, "text-to-audio request failed");
            Err(HttpError::from(error))
        }
    }
}
