use std::{path::Path, process::Stdio};

use async_trait::async_trait;
use media_domain::{DomainError, MediaProber};
use serde_json::Value;
use tokio::process::Command;

pub struct FfprobeProber {
    binary: String,
}

impl FfprobeProber {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

pub fn parse_probe_output(stdout: &[u8]) -> Result<Value, DomainError> {
    let value: Value = serde_json::from_slice(stdout)
        .map_err(|err| DomainError::Probe(format!("failed to parse ffprobe output: {err}")))?;
    if !value.is_object() {
        return Err(DomainError::Probe(
            "ffprobe output is not a JSON object".to_string(),
        ));
    }
    Ok(value)
}

#[async_trait]
impl MediaProber for FfprobeProber {
    async fn probe(&self, path: &Path) -> Result<Value, DomainError> {
        let output = Command::new(&self.binary)
            .args([
                "-v",
                "quiet",
                "-print_format",
                "json",
                "-show_format",
                "-show_streams",
            ])
            .arg(path)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|err| DomainError::Probe(format!("ffprobe execution failed: {err}")))?;

        if !output.status.success() {
            return Err(DomainError::Probe(format!(
                "ffprobe exited with {:?}",
                output.status.code()
            )));
        }

        parse_probe_output(&output.stdout)
    }
}
