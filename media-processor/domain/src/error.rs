use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("File size exceeds {limit_mb}MB limit")]
    PayloadTooLarge { limit_mb: u64 },

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Transcode(String),

    #[error("transcription failed: {0}")]
    Transcription(String),

    #[error("probe failed: {0}")]
    Probe(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("{0}")]
    Internal(String),
}

impl DomainError {
    pub fn internal_error(message: &str) -> Self {
        Self::Internal(message.to_string())
    }
}
