use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateSpeechRequest {
    #[validate(length(min = 1, message = "job_id cannot be empty"))]
    pub job_id: String,
    #[validate(length(max = 5000, message = "Text is too long (max 5000 characters)"))]
    pub text: String,
    #[serde(default = "default_voice_type")]
    pub voice_type: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub download_path: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateSpeechResponse {
    pub job_id: String,
    pub filename: String,
    pub file_path: String,
    pub status: String,
    pub processed_at: String,
    pub download_url: String,
}

fn default_voice_type() -> String {
    "male".to_string()
}

fn default_language() -> String {
    "en".to_string()
}
