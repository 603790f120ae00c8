use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TextToAudioRequest {
    pub text: String,
    #[serde(default = "default_voice_type")]
    pub voice_type: String,
    #[validate(length(max = 255, message = "filename must be at most 255 characters"))]
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextToAudioResponse {
    pub id: String,
    pub filename: String,
    pub audio_url: String,
    pub voice_type: String,
    pub status: String,
}

fn default_voice_type() -> String {
    "male".to_string()
}
