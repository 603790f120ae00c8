use media_domain::Transcription;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct ProcessMediaRequest {
    pub job_id: String,
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessMediaResponse {
    pub job_id: String,
    pub filename: String,
    pub file_size: u64,
    pub file_info: Value,
    pub transcription: Transcription,
    pub status: String,
    pub processed_at: String,
}
