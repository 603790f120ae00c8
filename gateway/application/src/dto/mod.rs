mod jobs;
mod media_to_text;
mod text_to_audio;

pub use jobs::{DownloadableFile, JobStatusResponse};
pub use media_to_text::{MediaToTextResponse, MediaUploadRequest};
pub use text_to_audio::{TextToAudioRequest, TextToAudioResponse};
