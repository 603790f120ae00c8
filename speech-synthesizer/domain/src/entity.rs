use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::DomainError;

pub const MAX_TEXT_CHARS: usize = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceType {
    Male,
    Female,
}

impl VoiceType {
    pub fn as_str(self) -> &'static str {
        match self {
            VoiceType::Male => "male",
            VoiceType::Female => "female",
        }
    }

    pub fn all() -> [VoiceType; 2] {
        [VoiceType::Male, VoiceType::Female]
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

impl fmt::Display for VoiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Mp3,
    Wav,
}

impl AudioFormat {
    pub fn extension(self) -> &'static str {
        match self {
            AudioFormat::Mp3 => ".mp3",
            AudioFormat::Wav => ".wav",
        }
    }

    pub fn media_type(self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "audio/mpeg",
            AudioFormat::Wav => "audio/wav",
        }
    }

    /// Anything not ending in `.mp3` is served as WAV.
    pub fn from_filename(filename: &str) -> Self {
        if filename.ends_with(".mp3") {
            AudioFormat::Mp3
        } else {
            AudioFormat::Wav
        }
    }
}

/// Validated input for an engine call.
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    pub text: String,
    pub voice_type: VoiceType,
    pub language: String,
}

impl SpeechRequest {
    pub fn new(
        text: impl Into<String>,
        voice_type: VoiceType,
        language: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let text = text.into();
        if text.chars().count() > MAX_TEXT_CHARS {
            return Err(DomainError::TextTooLong {
                max: MAX_TEXT_CHARS,
            });
        }
        if text.trim().is_empty() {
            return Err(DomainError::EmptyText);
        }
        Ok(Self {
            text,
            voice_type,
            language: language.into(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    pub bytes: Vec<u8>,
    pub format: AudioFormat,
    pub engine: &'static str,
}

/// `<job_id>.mp3` unless the caller named the file; `.mp3` is appended when
/// missing.
pub fn requested_filename(job_id: &str, filename: Option<&str>) -> String {
    let name = filename
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("{job_id}.mp3"));
    if name.ends_with(".mp3") {
        name
    } else {
        format!("{name}.mp3")
    }
}

/// Swaps the trailing `.mp3` for the extension of `format`.
pub fn filename_for_format(requested: &str, format: AudioFormat) -> String {
    let stem = requested.strip_suffix(".mp3").unwrap_or(requested);
    format!("{stem}{}", format.extension())
}
