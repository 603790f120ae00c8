use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("File size exceeds {limit_mb}MB limit")]
    PayloadTooLarge { limit_mb: u64 },

    #[error("Voice type must be 'male' or 'female'")]
    InvalidVoiceType(String),

    /// The downstream service answered with a non-success status.
    #[error("{message}")]
    Downstream { status: u16, message: String },

    #[error("downstream request failed: {0}")]
    Transport(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("File not found")]
    NotFound,
}
