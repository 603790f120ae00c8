use std::sync::Arc;

use async_trait::async_trait;
use pipeline_shared::{client_file_name, ScratchDir};

use gateway_domain::{DomainError, Job, JobId, MediaProcessorPort, StagedMedia};

use crate::{ApplicationError, MediaToTextResponse, MediaUploadRequest};

const MIB: u64 = 1024 * 1024;

#[async_trait]
pub trait MediaToTextUseCase: Send + Sync {
    async fn media_to_text(
        &self,
        request: MediaUploadRequest,
    ) -> Result<MediaToTextResponse, ApplicationError>;
}

pub struct MediaToTextUseCaseImpl {
    processor: Arc<dyn MediaProcessorPort>,
    staging: ScratchDir,
    max_upload_bytes: u64,
}

impl MediaToTextUseCaseImpl {
    pub fn new(
        processor: Arc<dyn MediaProcessorPort>,
        staging: ScratchDir,
        max_upload_bytes: u64,
    ) -> Self {
        Self {
            processor,
            staging,
            max_upload_bytes,
        }
    }
}

#[async_trait]
impl MediaToTextUseCase for MediaToTextUseCaseImpl {
    async fn media_to_text(
        &self,
        request: MediaUploadRequest,
    ) -> Result<MediaToTextResponse, ApplicationError> {
        let file_size = request.bytes.len() as u64;
        if file_size > self.max_upload_bytes {
            tracing::warn!(
                file_size,
                max_upload_bytes = self.max_upload_bytes,
                "rejecting oversized upload"
            );
            return Err(DomainError::PayloadTooLarge {
                limit_mb: self.max_upload_bytes / MIB,
            }
            .into());
        }

        let job_id = JobId::generate();
        let filename = request
            .filename
            .as_deref()
            .and_then(client_file_name)
            .map(str::to_string)
            .unwrap_or_else(|| format!("audio_{}.mp3", job_id.short()));

        let path = self
            .staging
            .write(&format!("{job_id}_{filename}"), &request.bytes)
            .await
            .map_err(|err| DomainError::Storage(err.to_string()))?;
        let staged = StagedMedia {
            job_id: job_id.clone(),
            filename: filename.clone(),
            content_type: request.content_type,
            path,
        };

        tracing::info!(
            job_id = %job_id,
            filename = %filename,
            file_size,
            "forwarding upload to media processor"
        );
        let forwarded = self.processor.process_media(&staged).await;

        if let Err(err) = self.staging.remove(&staged.path).await {
            tracing::warn!(
                job_id = %job_id,
                path = %staged.path.display(),
                error = %err,
                "failed to remove staged upload"
            );
        }

        let processed = forwarded?;
        tracing::debug!(
            job_id = %job_id,
            language = processed["transcription"]["language"].as_str().unwrap_or("unknown"),
            "media processor answered"
        );

        let job = Job::completed(job_id, filename);
        Ok(MediaToTextResponse {
            id: job.id.to_string(),
            filename: job.filename,
            file_upload: staged.path.display().to_string(),
            status: job.status.as_str().to_string(),
            created_at: job.created_at.to_rfc3339(),
        })
    }
}
