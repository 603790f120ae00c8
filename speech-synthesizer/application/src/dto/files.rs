use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ListedFile {
    pub filename: String,
    pub size: u64,
    pub created: String,
    pub download_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileListingResponse {
    pub job_id: String,
    pub files: Vec<ListedFile>,
}

#[derive(Debug, Clone)]
pub struct DownloadableAudio {
    pub path: PathBuf,
    pub filename: String,
    pub media_type: &'static str,
}
