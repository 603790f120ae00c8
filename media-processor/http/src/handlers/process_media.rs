use axum::{
    extract::{Multipart, State},
    Json,
};
use media_application::{ProcessMediaRequest, ProcessMediaResponse};

use crate::{error::HttpError, state::AppState};

#[derive(Default)]
struct ProcessMediaForm {
    file: Option<(Option<String>, Vec<u8>)>,
    job_id: Option<String>,
    filename: Option<String>,
}

impl ProcessMediaForm {
    async fn read(mut multipart: Multipart) -> Result<Self, HttpError> {
        let mut form = Self::default();
        while let Some(field) = multipart.next_field().await? {
            match field.name() {
                Some("file") => {
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await?;
                    form.file = Some((content_type, bytes.to_vec()));
                }
                Some("job_id") => form.job_id = Some(field.text().await?),
                Some("filename") => form.filename = Some(field.text().await?),
                _ => {}
            }
        }
        Ok(form)
    }

    fn into_request(self) -> Result<ProcessMediaRequest, HttpError> {
        let (content_type, bytes) = self.file.ok_or_else(|| missing("file"))?;
        let job_id = self
            .job_id
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| missing("job_id"))?;
        let filename = self
            .filename
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| missing("filename"))?;

        Ok(ProcessMediaRequest {
            job_id,
            filename,
            content_type,
            bytes,
        })
    }
}

fn missing(field: &str) -> HttpError {
    HttpError::Validation {
        message: format!("Missing form field `{field}`"),
    }
}

pub async fn process_media(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ProcessMediaResponse>, HttpError> {
    let request = ProcessMediaForm::read(multipart).await?.into_request()?;
    tracing::info!(
        job_id = %request.job_id,
        filename = %request.filename,
        file_size = request.bytes.len(),
        "received media for processing"
    );

    let response = state.usecase.process_media(request).await?;
    Ok(Json(response))
}
