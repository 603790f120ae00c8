use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use chrono::Local;
use pipeline_shared::{client_file_name, ScratchDir};
use serde_json::{json, Value};

use media_domain::{
    DomainError, MediaProber, MediaTranscoder, MediaUpload, TranscriptionPort, WorkFiles,
};

use crate::{ApplicationError, ProcessMediaRequest, ProcessMediaResponse, SupportedFormatsResponse};

const MIB: u64 = 1024 * 1024;

#[async_trait]
pub trait ProcessMediaUseCase: Send + Sync {
    async fn process_media(
        &self,
        request: ProcessMediaRequest,
    ) -> Result<ProcessMediaResponse, ApplicationError>;

    fn supported_formats(&self) -> SupportedFormatsResponse;
}

pub struct ProcessMediaUseCaseImpl {
    transcoder: Arc<dyn MediaTranscoder>,
    prober: Arc<dyn MediaProber>,
    transcription: Arc<dyn TranscriptionPort>,
    scratch: ScratchDir,
    max_upload_bytes: u64,
}

impl ProcessMediaUseCaseImpl {
    pub fn new(
        transcoder: Arc<dyn MediaTranscoder>,
        prober: Arc<dyn MediaProber>,
        transcription: Arc<dyn TranscriptionPort>,
        scratch: ScratchDir,
        max_upload_bytes: u64,
    ) -> Self {
        Self {
            transcoder,
            prober,
            transcription,
            scratch,
            max_upload_bytes,
        }
    }

    async fn run(
        &self,
        upload: &MediaUpload,
        work: &mut WorkFiles,
    ) -> Result<ProcessMediaResponse, DomainError> {
        let job_id = upload.job_id.as_str();
        let upload_path = self
            .scratch
            .write(&format!("{job_id}_{}", upload.filename), &upload.bytes)
            .await
            .map_err(|err| DomainError::Storage(err.to_string()))?;
        work.track(upload_path.clone());

        let file_info = self.probe_or_empty(job_id, &upload_path).await;

        let kind = upload.kind();
        let audio_path = if kind.needs_transcode() {
            let target = self.scratch.path_for(&format!("{job_id}_audio.mp3"));
            work.track(target.clone());
            tracing::info!(job_id, filename = %upload.filename, "extracting audio track");
            self.transcoder.extract_audio(&upload_path, &target).await?
        } else {
            upload_path
        };

        tracing::info!(job_id, audio = %audio_path.display(), "transcribing audio");
        let transcription = self.transcription.transcribe(&audio_path).await?;
        tracing::info!(
            job_id,
            language = %transcription.language,
            segment_count = transcription.segments.len(),
            text_chars = transcription.text.chars().count(),
            "transcription finished"
        );

        Ok(ProcessMediaResponse {
            job_id: job_id.to_string(),
            filename: upload.filename.clone(),
            file_size: upload.size(),
            file_info,
            transcription,
            status: "completed".to_string(),
            processed_at: Local::now().to_rfc3339(),
        })
    }

    async fn probe_or_empty(&self, job_id: &str, path: &std::path::Path) -> Value {
        match self.prober.probe(path).await {
            Ok(info) => info,
            Err(err) => {
                tracing::warn!(job_id, error = %err, "media probe failed; continuing without file info");
                json!({})
            }
        }
    }

    async fn cleanup(&self, job_id: &str, paths: &[PathBuf]) {
        for path in paths {
            match self.scratch.remove(path).await {
                Ok(true) => tracing::debug!(job_id, path = %path.display(), "removed work file"),
                Ok(false) => {}
                Err(err) => tracing::warn!(
                    job_id,
                    path = %path.display(),
                    error = %err,
                    "failed to remove work file"
                ),
            }
        }
    }
}

#[async_trait]
impl ProcessMediaUseCase for ProcessMediaUseCaseImpl {
    async fn process_media(
        &self,
        request: ProcessMediaRequest,
    ) -> Result<ProcessMediaResponse, ApplicationError> {
        let filename = client_file_name(&request.filename)
            .map(str::to_string)
            .ok_or_else(|| {
                DomainError::InvalidInput(format!("Invalid filename `{}`", request.filename))
            })?;
        let upload = MediaUpload {
            job_id: request.job_id,
            filename,
            content_type: request.content_type,
            bytes: request.bytes,
        };

        if upload.size() > self.max_upload_bytes {
            tracing::warn!(
                job_id = %upload.job_id,
                file_size = upload.size(),
                max_upload_bytes = self.max_upload_bytes,
                "rejecting oversized upload"
            );
            return Err(DomainError::PayloadTooLarge {
                limit_mb: self.max_upload_bytes / MIB,
            }
            .into());
        }

        tracing::info!(
            job_id = %upload.job_id,
            filename = %upload.filename,
            content_type = upload.content_type.as_deref().unwrap_or("unknown"),
            file_size = upload.size(),
            kind = ?upload.kind(),
            "processing media"
        );

        let mut work = WorkFiles::default();
        let outcome = self.run(&upload, &mut work).await;
        self.cleanup(&upload.job_id, work.paths()).await;

        match outcome {
            Ok(response) => Ok(response),
            Err(err) => {
                tracing::error!(job_id = %upload.job_id, error = %err, "media processing failed");
                Err(err.into())
            }
        }
    }

    fn supported_formats(&self) -> SupportedFormatsResponse {
        SupportedFormatsResponse::new(self.max_upload_bytes)
    }
}
