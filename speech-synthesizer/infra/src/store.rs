use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Local};
use directories::UserDirs;
use pipeline_shared::ScratchDir;
use speech_domain::{AudioStore, DomainError, StoredAudio, StoredFile};

/// `<home>/Downloads`, or `Downloads` under the working directory when no
/// home directory is known.
pub fn default_download_dir() -> PathBuf {
    UserDirs::new()
        .map(|dirs| dirs.home_dir().join("Downloads"))
        .unwrap_or_else(|| PathBuf::from("Downloads"))
}

/// Audio kept in the service temp directory, with a copy delivered to a
/// download folder.
pub struct LocalAudioStore {
    scratch: ScratchDir,
    default_destination: PathBuf,
}

impl LocalAudioStore {
    pub fn new(scratch: ScratchDir, default_destination: impl Into<PathBuf>) -> Self {
        Self {
            scratch,
            default_destination: default_destination.into(),
        }
    }
}

fn storage(context: &str, err: std::io::Error) -> DomainError {
    DomainError::Storage(format!("{context}: {err}"))
}

#[async_trait]
impl AudioStore for LocalAudioStore {
    async fn persist(
        &self,
        filename: &str,
        bytes: &[u8],
        destination: Option<&Path>,
    ) -> Result<StoredAudio, DomainError> {
        let temp_path = self
            .scratch
            .write(filename, bytes)
            .await
            .map_err(|err| storage("cannot write temp file", err))?;

        let folder = destination.unwrap_or(&self.default_destination);
        tokio::fs::create_dir_all(folder)
            .await
            .map_err(|err| storage(&format!("cannot create `{}`", folder.display()), err))?;

        let final_path = match temp_path.file_name() {
            Some(name) => folder.join(name),
            None => folder.join(filename),
        };
        tokio::fs::copy(&temp_path, &final_path)
            .await
            .map_err(|err| storage(&format!("cannot copy to `{}`", final_path.display()), err))?;

        tracing::info!(
            temp_path = %temp_path.display(),
            final_path = %final_path.display(),
            "audio copied to destination"
        );
        Ok(StoredAudio {
            temp_path,
            final_path,
        })
    }

    async fn find(&self, filename: &str) -> Option<PathBuf> {
        self.scratch.find(filename).await
    }

    async fn list(&self, prefix: &str) -> Result<Vec<StoredFile>, DomainError> {
        let entries = self
            .scratch
            .list_prefixed(prefix)
            .await
            .map_err(|err| storage("cannot list temp files", err))?;

        Ok(entries
            .into_iter()
            .map(|entry| StoredFile {
                filename: entry.name,
                size: entry.size,
                created: DateTime::<Local>::from(entry.created).to_rfc3339(),
            })
            .collect())
    }
}
