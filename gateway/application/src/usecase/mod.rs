mod job_query;
mod media_to_text;
mod text_to_audio;

pub use job_query::{JobQueryUseCase, JobQueryUseCaseImpl};
pub use media_to_text::{MediaToTextUseCase, MediaToTextUseCaseImpl};
pub use text_to_audio::{TextToAudioUseCase, TextToAudioUseCaseImpl};
