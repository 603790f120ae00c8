mod process_media;

pub use process_media::{ProcessMediaUseCase, ProcessMediaUseCaseImpl};
