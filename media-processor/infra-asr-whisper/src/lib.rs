use std::path::Path;

use async_trait::async_trait;
use media_domain::{DomainError, Transcription, TranscriptionPort};
#[cfg(not(feature = "whisper-runtime"))]
use media_domain::TranscriptSegment;

mod decode;
#[cfg(feature = "whisper-runtime")]
mod runtime;

pub use decode::{pcm16le_bytes_to_f32, WHISPER_SAMPLE_RATE_HZ};

#[derive(Debug, Clone)]
pub struct WhisperAdapterConfig {
    pub model_path: String,
    pub language: String,
    pub temperature: f32,
    pub threads: usize,
    pub ffmpeg_binary: String,
}

impl WhisperAdapterConfig {
    /// `None` means the model picks the language itself.
    pub fn decode_language(&self) -> Option<String> {
        let normalized = self.language.trim().to_ascii_lowercase();
        if normalized.is_empty() || normalized == "auto" {
            None
        } else {
            Some(normalized)
        }
    }
}

pub struct WhisperTranscriptionAdapter {
    config: WhisperAdapterConfig,
    #[cfg(feature = "whisper-runtime")]
    runtime: runtime::WhisperRuntime,
}

impl WhisperTranscriptionAdapter {
    /// Loads the model once; every request shares the same context.
    pub fn new(config: WhisperAdapterConfig) -> Result<Self, DomainError> {
        #[cfg(feature = "whisper-runtime")]
        {
            let runtime = runtime::WhisperRuntime::load(&config)?;
            Ok(Self { config, runtime })
        }

        #[cfg(not(feature = "whisper-runtime"))]
        {
            Ok(Self { config })
        }
    }
}

#[async_trait]
impl TranscriptionPort for WhisperTranscriptionAdapter {
    async fn transcribe(&self, audio: &Path) -> Result<Transcription, DomainError> {
        #[cfg(feature = "whisper-runtime")]
        {
            let samples = decode::decode_to_pcm(&self.config.ffmpeg_binary, audio).await?;
            tracing::debug!(
                audio = %audio.display(),
                sample_count = samples.len(),
                duration_secs = samples.len() as f32 / WHISPER_SAMPLE_RATE_HZ as f32,
                "decoded audio for whisper"
            );
            self.runtime.transcribe(samples).await
        }

        #[cfg(not(feature = "whisper-runtime"))]
        {
            tracing::warn!(audio = %audio.display(), "whisper runtime disabled; returning placeholder");
            let language = self
                .config
                .decode_language()
                .unwrap_or_else(|| "en".to_string());
            Ok(Transcription::from_segments(
                language,
                vec![TranscriptSegment {
                    id: 0,
                    start: 0.0,
                    end: 0.0,
                    text: "whisper-runtime feature disabled".to_string(),
                }],
            ))
        }
    }
}
