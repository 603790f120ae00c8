use std::{fmt, path::PathBuf, str::FromStr};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::DomainError;

/// Per-request token. Never persisted, so nothing can resolve it later.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn short(&self) -> &str {
        self.0.get(..8).unwrap_or(&self.0)
    }
}

impl From<String> for JobId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Completed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Job {
    pub id: JobId,
    pub filename: String,
    pub status: JobStatus,
    pub created_at: DateTime<Local>,
}

impl Job {
    pub fn completed(id: JobId, filename: impl Into<String>) -> Self {
        Self {
            id,
            filename: filename.into(),
            status: JobStatus::Completed,
            created_at: Local::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceType {
    Male,
    Female,
}

impl VoiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceType::Male => "male",
            VoiceType::Female => "female",
        }
    }
}

impl FromStr for VoiceType {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "male" => Ok(VoiceType::Male),
            "female" => Ok(VoiceType::Female),
            other => Err(DomainError::InvalidVoiceType(other.to_string())),
        }
    }
}

/// An upload staged on local disk, ready to be forwarded.
#[derive(Debug, Clone)]
pub struct StagedMedia {
    pub job_id: JobId,
    pub filename: String,
    pub content_type: Option<String>,
    pub path: PathBuf,
}

/// JSON body the speech synthesizer expects on `/generate-speech`.
#[derive(Debug, Clone, Serialize)]
pub struct SpeechJob {
    pub job_id: JobId,
    pub text: String,
    pub voice_type: VoiceType,
    pub filename: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voice_type_only_accepts_known_values() {
        assert_eq!("male".parse::<VoiceType>().ok(), Some(VoiceType::Male));
        assert_eq!("female".parse::<VoiceType>().ok(), Some(VoiceType::Female));
        assert!(matches!(
            "robot".parse::<VoiceType>(),
            Err(DomainError::InvalidVoiceType(value)) if value == "robot"
        ));
        assert!("Male".parse::<VoiceType>().is_err());
    }

    #[test]
    fn job_id_short_form_is_eight_characters() {
        let id = JobId::generate();
        assert_eq!(id.as_str().len(), 36);
        assert_eq!(id.short().len(), 8);
        assert!(id.as_str().starts_with(id.short()));
    }
}
