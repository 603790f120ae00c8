use std::path::PathBuf;

use serde::Serialize;

pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "flac", "aac", "ogg", "wma", "m4a"];
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "mkv", "flv", "wmv", "webm"];

/// How an upload is treated before transcription. Decided by extension only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Audio,
}

impl MediaKind {
    /// Anything that is not a known video container goes straight to the
    /// recognizer, including unknown extensions.
    pub fn from_filename(filename: &str) -> Self {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
            MediaKind::Video
        } else {
            MediaKind::Audio
        }
    }

    pub fn needs_transcode(self) -> bool {
        matches!(self, MediaKind::Video)
    }
}

#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub job_id: String,
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl MediaUpload {
    pub fn kind(&self) -> MediaKind {
        MediaKind::from_filename(&self.filename)
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Paths produced while handling one upload; all of them are removed once the
/// request finishes.
#[derive(Debug, Default)]
pub struct WorkFiles {
    paths: Vec<PathBuf>,
}

impl WorkFiles {
    pub fn track(&mut self, path: impl Into<PathBuf>) {
        self.paths.push(path.into());
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptSegment {
    pub id: usize,
    pub start: f64,
    pub end: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transcription {
    pub text: String,
    pub language: String,
    pub segments: Vec<TranscriptSegment>,
}

impl Transcription {
    pub fn from_segments(language: impl Into<String>, segments: Vec<TranscriptSegment>) -> Self {
        let text = segments
            .iter()
            .map(|segment| segment.text.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            text,
            language: language.into(),
            segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_lowercased_extension() {
        assert_eq!(MediaKind::from_filename("clip.MP4"), MediaKind::Video);
        assert_eq!(MediaKind::from_filename("talk.webm"), MediaKind::Video);
        assert_eq!(MediaKind::from_filename("voice.mp3"), MediaKind::Audio);
        assert_eq!(MediaKind::from_filename("archive.tar.mkv"), MediaKind::Video);
    }

    #[test]
    fn unknown_or_missing_extension_is_audio() {
        assert_eq!(MediaKind::from_filename("notes.txt"), MediaKind::Audio);
        assert_eq!(MediaKind::from_filename("recording"), MediaKind::Audio);
        assert!(!MediaKind::from_filename("recording").needs_transcode());
    }

    #[test]
    fn transcript_text_joins_trimmed_segments() {
        let transcription = Transcription::from_segments(
            "en",
            vec![
                TranscriptSegment {
                    id: 0,
                    start: 0.0,
                    end: 1.2,
                    text: " Hello".to_string(),
                },
                TranscriptSegment {
                    id: 1,
                    start: 1.2,
                    end: 2.0,
                    text: " ".to_string(),
                },
                TranscriptSegment {
                    id: 2,
                    start: 2.0,
                    end: 3.5,
                    text: "world. ".to_string(),
                },
            ],
        );
        assert_eq!(transcription.text, "Hello world.");
        assert_eq!(transcription.segments.len(), 3);
    }
}
