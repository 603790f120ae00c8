use axum::{
    extract::{Multipart, State},
    Json,
};
use gateway_application::{MediaToTextResponse, MediaUploadRequest};

use crate::{error::HttpError, state::AppState};

pub async fn media_to_text(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MediaToTextResponse>, HttpError> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;
        upload = Some(MediaUploadRequest {
            filename,
            content_type,
            bytes: bytes.to_vec(),
        });
        break;
    }

    let Some(upload) = upload else {
        tracing::warn!("media-to-text request without a file part");
        return Err(HttpError::Validation {
            message: "No file uploaded".to_string(),
        });
    };

    tracing::info!(
        filename = upload.filename.as_deref().unwrap_or("unnamed"),
        file_size = upload.bytes.len(),
        "received media-to-text request"
    );

    match state.media_to_text.media_to_text(upload).await {
        Ok(response) => {
            tracing::info!(job_id = %response.id, "media-to-text request completed");
            Ok(Json(response))
        }
        Err(error) => {
            tracing::error!(error = %error, "media-to-text request failed");
            Err(HttpError::from(error))
        }
    }
}
