use async_trait::async_trait;
use chrono::Local;
use pipeline_shared::ScratchDir;

use gateway_domain::{DomainError, JobStatus};

use crate::{ApplicationError, DownloadableFile, JobStatusResponse};

/// Status and download lookups. No job store exists, so status is a fixed
/// placeholder and downloads only hit files named `<job_id>.mp3` that happen
/// to sit in the temp directory.
#[async_trait]
pub trait JobQueryUseCase: Send + Sync {
    async fn status(&self, job_id: &str) -> Result<JobStatusResponse, ApplicationError>;
    async fn download(&self, job_id: &str) -> Result<DownloadableFile, ApplicationError>;
}

pub struct JobQueryUseCaseImpl {
    staging: ScratchDir,
}

impl JobQueryUseCaseImpl {
    pub fn new(staging: ScratchDir) -> Self {
        Self { staging }
    }
}

#[async_trait]
impl JobQueryUseCase for JobQueryUseCaseImpl {
    async fn status(&self, job_id: &str) -> Result<JobStatusResponse, ApplicationError> {
        Ok(JobStatusResponse {
            id: job_id.to_string(),
            status: JobStatus::Completed.as_str().to_string(),
            created_at: Local::now().to_rfc3339(),
        })
    }

    async fn download(&self, job_id: &str) -> Result<DownloadableFile, ApplicationError> {
        let filename = format!("{job_id}.mp3");
        let path = self
            .staging
            .find(&filename)
            .await
            .ok_or(DomainError::NotFound)?;

        Ok(DownloadableFile {
            path,
            filename,
            media_type: "audio/mpeg",
        })
    }
}
