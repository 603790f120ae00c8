use std::sync::Arc;

use async_trait::async_trait;

use gateway_domain::{JobId, JobStatus, SpeechJob, SpeechSynthesizerPort, VoiceType};

use crate::{filename::resolve_audio_filename, ApplicationError, TextToAudioRequest, TextToAudioResponse};

#[async_trait]
pub trait TextToAudioUseCase: Send + Sync {
    async fn text_to_audio(
        &self,
        request: TextToAudioRequest,
    ) -> Result<TextToAudioResponse, ApplicationError>;
}

pub struct TextToAudioUseCaseImpl {
    synthesizer: Arc<dyn SpeechSynthesizerPort>,
}

impl TextToAudioUseCaseImpl {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizerPort>) -> Self {
        Self { synthesizer }
    }
}

#[async_trait]
impl TextToAudioUseCase for TextToAudioUseCaseImpl {
    async fn text_to_audio(
        &self,
        request: TextToAudioRequest,
    ) -> Result<TextToAudioResponse, ApplicationError> {
        let voice_type: VoiceType = request.voice_type.parse()?;
        let job_id = JobId::generate();
        let filename = resolve_audio_filename(request.filename.as_deref());

        tracing::info!(
            job_id = %job_id,
            voice_type = voice_type.as_str(),
            text_chars = request.text.chars().count(),
            filename = %filename,
            "forwarding text to speech synthesizer"
        );

        let job = SpeechJob {
            job_id: job_id.clone(),
            text: request.text,
            voice_type,
            filename: filename.clone(),
        };
        let generated = self.synthesizer.generate_speech(&job).await?;
        tracing::debug!(
            job_id = %job_id,
            synthesized_filename = generated["filename"].as_str().unwrap_or("unknown"),
            "speech synthesizer answered"
        );

        Ok(TextToAudioResponse {
            audio_url: format!("/api/v1/download/{job_id}"),
            id: job_id.to_string(),
            filename,
            voice_type: voice_type.as_str().to_string(),
            status: JobStatus::Completed.as_str().to_string(),
        })
    }
}
