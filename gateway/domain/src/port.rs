use async_trait::async_trait;
use serde_json::Value;

use crate::{DomainError, SpeechJob, StagedMedia};

#[async_trait]
pub trait MediaProcessorPort: Send + Sync {
    async fn process_media(&self, media: &StagedMedia) -> Result<Value, DomainError>;
}

#[async_trait]
pub trait SpeechSynthesizerPort: Send + Sync {
    async fn generate_speech(&self, job: &SpeechJob) -> Result<Value, DomainError>;
}
