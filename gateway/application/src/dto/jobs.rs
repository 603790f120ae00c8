use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct JobStatusResponse {
    pub id: String,
    pub status: String,
    pub created_at: String,
}

#[derive(Debug, Clone)]
pub struct DownloadableFile {
    pub path: PathBuf,
    pub filename: String,
    pub media_type: &'static str,
}
