pub mod dto;
pub mod error;
pub mod synthesis;
pub mod usecase;
pub mod worker_pool;

pub use dto::*;
pub use error::*;
pub use synthesis::{SynthesisAttempt, Synthesizer};
pub use usecase::{SpeechUseCase, SpeechUseCaseImpl};
pub use worker_pool::SynthesisWorkerPool;
