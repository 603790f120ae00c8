use media_domain::{AUDIO_EXTENSIONS, VIDEO_EXTENSIONS};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SupportedFormatsResponse {
    pub audio_formats: Vec<&'static str>,
    pub video_formats: Vec<&'static str>,
    pub max_file_size: String,
}

impl SupportedFormatsResponse {
    pub fn new(max_upload_bytes: u64) -> Self {
        Self {
            audio_formats: AUDIO_EXTENSIONS.to_vec(),
            video_formats: VIDEO_EXTENSIONS.to_vec(),
            max_file_size: format!("{}MB", max_upload_bytes / (1024 * 1024)),
        }
    }
}
