use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use gateway_application::JobStatusResponse;

use crate::{error::HttpError, state::AppState};

pub async fn job_status(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<JobStatusResponse>, HttpError> {
    Ok(Json(state.jobs.status(&job_id).await?))
}

pub async fn download(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let file = state.jobs.download(&job_id).await?;
    let bytes = tokio::fs::read(&file.path)
        .await
        .map_err(|err| HttpError::Internal {
            message: err.to_string(),
        })?;

    tracing::info!(job_id = %job_id, size = bytes.len(), "serving job audio");
    Ok((
        [
            (header::CONTENT_TYPE, file.media_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.filename),
            ),
        ],
        bytes,
    ))
}
