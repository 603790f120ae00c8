use std::{path::Path, sync::Arc};

use async_trait::async_trait;
use chrono::Local;
use pipeline_shared::client_file_name;

use speech_domain::{
    filename_for_format, requested_filename, AudioFormat, AudioStore, DomainError, SpeechRequest,
    VoiceType,
};

use crate::{
    ApplicationError, DownloadableAudio, FileListingResponse, GenerateSpeechRequest,
    GenerateSpeechResponse, ListedFile, SupportedLanguagesResponse, Synthesizer,
};

#[async_trait]
pub trait SpeechUseCase: Send + Sync {
    async fn generate_speech(
        &self,
        request: GenerateSpeechRequest,
    ) -> Result<GenerateSpeechResponse, ApplicationError>;

    async fn download(
        &self,
        job_id: &str,
        filename: &str,
    ) -> Result<DownloadableAudio, ApplicationError>;

    async fn files(&self, job_id: &str) -> Result<FileListingResponse, ApplicationError>;

    fn supported_languages(&self) -> SupportedLanguagesResponse;
}

pub struct SpeechUseCaseImpl {
    synthesizer: Synthesizer,
    store: Arc<dyn AudioStore>,
}

impl SpeechUseCaseImpl {
    pub fn new(synthesizer: Synthesizer, store: Arc<dyn AudioStore>) -> Self {
        Self { synthesizer, store }
    }
}

fn download_url(job_id: &str, filename: &str) -> String {
    format!("/download/{job_id}/{filename}")
}

#[async_trait]
impl SpeechUseCase for SpeechUseCaseImpl {
    async fn generate_speech(
        &self,
        request: GenerateSpeechRequest,
    ) -> Result<GenerateSpeechResponse, ApplicationError> {
        let voice_type: VoiceType = request.voice_type.parse()?;
        let speech = SpeechRequest::new(request.text, voice_type, request.language)?;
        let requested = requested_filename(
            &request.job_id,
            request.filename.as_deref().and_then(client_file_name),
        );

        tracing::info!(
            job_id = %request.job_id,
            voice_type = %voice_type,
            language = %speech.language,
            text_chars = speech.text.chars().count(),
            filename = %requested,
            "generating speech"
        );

        let attempt = self.synthesizer.synthesize(&speech).await.map_err(|err| {
            tracing::error!(job_id = %request.job_id, error = %err, "all speech engines failed");
            DomainError::from(err)
        })?;
        if attempt.used_fallback() {
            tracing::info!(
                job_id = %request.job_id,
                engine = attempt.audio().engine,
                "speech produced by fallback engine"
            );
        }

        let audio = attempt.into_audio();
        let filename = match audio.format {
            AudioFormat::Mp3 => requested,
            format => filename_for_format(&requested, format),
        };

        let stored = self
            .store
            .persist(
                &filename,
                &audio.bytes,
                request.download_path.as_deref().map(Path::new),
            )
            .await?;

        tracing::info!(
            job_id = %request.job_id,
            engine = audio.engine,
            filename = %filename,
            file_path = %stored.final_path.display(),
            "speech generation completed"
        );

        Ok(GenerateSpeechResponse {
            download_url: download_url(&request.job_id, &filename),
            job_id: request.job_id,
            filename,
            file_path: stored.final_path.display().to_string(),
            status: "completed".to_string(),
            processed_at: Local::now().to_rfc3339(),
        })
    }

    async fn download(
        &self,
        job_id: &str,
        filename: &str,
    ) -> Result<DownloadableAudio, ApplicationError> {
        let path = self.store.find(filename).await.ok_or_else(|| {
            tracing::warn!(job_id, filename, "requested audio not found");
            DomainError::NotFound
        })?;

        Ok(DownloadableAudio {
            path,
            filename: filename.to_string(),
            media_type: AudioFormat::from_filename(filename).media_type(),
        })
    }

    async fn files(&self, job_id: &str) -> Result<FileListingResponse, ApplicationError> {
        let files = self
            .store
            .list(job_id)
            .await?
            .into_iter()
            .map(|file| ListedFile {
                download_url: download_url(job_id, &file.filename),
                filename: file.filename,
                size: file.size,
                created: file.created,
            })
            .collect();

        Ok(FileListingResponse {
            job_id: job_id.to_string(),
            files,
        })
    }

    fn supported_languages(&self) -> SupportedLanguagesResponse {
        SupportedLanguagesResponse::default()
    }
}
