use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::Stdio,
};

use async_trait::async_trait;
use media_domain::{DomainError, MediaTranscoder};
use tokio::process::Command;

pub struct FfmpegTranscoder {
    binary: String,
}

impl FfmpegTranscoder {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

/// `-vn -acodec mp3 -ab 192k -ar 44100`, overwriting the output.
pub fn extract_audio_args(input: &Path, output: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-i".into(), input.into()];
    args.extend(
        ["-vn", "-acodec", "mp3", "-ab", "192k", "-ar", "44100", "-y"]
            .into_iter()
            .map(OsString::from),
    );
    args.push(output.into());
    args
}

#[async_trait]
impl MediaTranscoder for FfmpegTranscoder {
    async fn extract_audio(&self, input: &Path, output: &Path) -> Result<PathBuf, DomainError> {
        let result = Command::new(&self.binary)
            .args(extract_audio_args(input, output))
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|err| {
                tracing::error!(binary = %self.binary, error = %err, "could not start ffmpeg");
                DomainError::Transcode("Failed to convert video to audio".to_string())
            })?;

        if !result.status.success() {
            tracing::error!(
                status = ?result.status.code(),
                stderr = %String::from_utf8_lossy(&result.stderr),
                "ffmpeg exited with failure"
            );
            return Err(DomainError::Transcode(
                "Failed to convert video to audio".to_string(),
            ));
        }

        tracing::debug!(output = %output.display(), "ffmpeg extracted audio");
        Ok(output.to_path_buf())
    }
}
