use serde::Serialize;

#[derive(Debug, Clone)]
pub struct MediaUploadRequest {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MediaToTextResponse {
    pub id: String,
    pub filename: String,
    pub file_upload: String,
    pub status: String,
    pub created_at: String,
}
