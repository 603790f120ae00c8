pub mod dto;
pub mod error;
pub mod filename;
pub mod usecase;

pub use dto::*;
pub use error::*;
pub use usecase::{
    JobQueryUseCase, JobQueryUseCaseImpl, MediaToTextUseCase, MediaToTextUseCaseImpl,
    TextToAudioUseCase, TextToAudioUseCaseImpl,
};
