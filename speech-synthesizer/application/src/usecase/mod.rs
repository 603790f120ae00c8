mod speech;

pub use speech::{SpeechUseCase, SpeechUseCaseImpl};
