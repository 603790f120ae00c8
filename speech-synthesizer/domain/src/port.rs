use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::{AudioFormat, DomainError, EngineFailure, SpeechRequest};

/// A speech engine. Calls block; callers run them on the synthesis pool.
pub trait SpeechEngine: Send + Sync {
    fn name(&self) -> &'static str;
    fn output_format(&self) -> AudioFormat;
    fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, EngineFailure>;
}

#[derive(Debug, Clone)]
pub struct StoredAudio {
    pub temp_path: PathBuf,
    pub final_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct StoredFile {
    pub filename: String,
    pub size: u64,
    pub created: String,
}

#[async_trait]
pub trait AudioStore: Send + Sync {
    /// Writes to the temp area, then copies into `destination` (or the
    /// default download folder), creating it when needed.
    async fn persist(
        &self,
        filename: &str,
        bytes: &[u8],
        destination: Option<&Path>,
    ) -> Result<StoredAudio, DomainError>;

    async fn find(&self, filename: &str) -> Option<PathBuf>;

    async fn list(&self, prefix: &str) -> Result<Vec<StoredFile>, DomainError>;
}
