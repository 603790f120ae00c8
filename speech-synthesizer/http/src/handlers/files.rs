use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use speech_application::FileListingResponse;

use crate::{error::HttpError, state::AppState};

pub async fn download(
    State(state): State<AppState>,
    Path((job_id, filename)): Path<(String, String)>,
) -> Result<impl IntoResponse, HttpError> {
    let file = state.usecase.download(&job_id, &filename).await?;
    let bytes = tokio::fs::read(&file.path)
        .await
        .map_err(|err| HttpError::Internal {
            message: format!("Download failed: {err}"),
        })?;

    tracing::info!(job_id = %job_id, filename = %file.filename, size = bytes.len(), "serving audio");
    Ok((
        [
            (header::CONTENT_TYPE, file.media_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", file.filename),
            ),
            (header::CACHE_CONTROL, "no-cache".to_string()),
        ],
        bytes,
    ))
}

pub async fn files(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<FileListingResponse>, HttpError> {
    Ok(Json(state.usecase.files(&job_id).await?))
}
