use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use crate::{DomainError, Transcription};

#[async_trait]
pub trait MediaTranscoder: Send + Sync {
    /// Extracts the audio track of `input` into an MP3 at `output`.
    async fn extract_audio(&self, input: &Path, output: &Path) -> Result<PathBuf, DomainError>;
}

#[async_trait]
pub trait MediaProber: Send + Sync {
    async fn probe(&self, path: &Path) -> Result<Value, DomainError>;
}

#[async_trait]
pub trait TranscriptionPort: Send + Sync {
    async fn transcribe(&self, audio: &Path) -> Result<Transcription, DomainError>;
}
