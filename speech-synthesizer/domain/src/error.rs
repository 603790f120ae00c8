use thiserror::Error;

/// Why a single engine could not produce audio.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineFailure {
    #[error("{engine} request failed: {message}")]
    Network { engine: &'static str, message: String },

    #[error("{engine} answered with HTTP {status}")]
    Rejected { engine: &'static str, status: u16 },

    #[error("{engine} process failed: {message}")]
    Process { engine: &'static str, message: String },

    #[error("{engine} produced unusable audio: {message}")]
    InvalidOutput { engine: &'static str, message: String },

    #[error("synthesis worker failed: {0}")]
    Worker(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SynthesisError {
    #[error("primary engine failed ({primary}); fallback engine failed ({fallback})")]
    Exhausted {
        primary: EngineFailure,
        fallback: EngineFailure,
    },
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Voice type must be 'male' or 'female'")]
    InvalidVoiceType(String),

    #[error("Text is too long (max {max} characters)")]
    TextTooLong { max: usize },

    #[error("Text cannot be empty")]
    EmptyText,

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("File not found")]
    NotFound,
}
