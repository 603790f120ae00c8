use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use pipeline_shared::ScratchDir;
use serde_json::{json, Value};
use tempfile::TempDir;

use media_application::{ApplicationError, ProcessMediaRequest, ProcessMediaUseCase, ProcessMediaUseCaseImpl};
use media_domain::{
    DomainError, MediaProber, MediaTranscoder, TranscriptSegment, Transcription, TranscriptionPort,
};

type CallLog = Arc<Mutex<Vec<String>>>;

struct RecordingTranscoder {
    log: CallLog,
    fail: bool,
}

#[async_trait]
impl MediaTranscoder for RecordingTranscoder {
    async fn extract_audio(&self, input: &Path, output: &Path) -> Result<PathBuf, DomainError> {
        assert!(input.exists(), "upload must be on disk before transcoding");
        self.log.lock().unwrap().push(format!(
            "transcode:{}",
            output.file_name().unwrap().to_string_lossy()
        ));
        if self.fail {
            return Err(DomainError::Transcode(
                "Failed to convert video to audio".to_string(),
            ));
        }
        std::fs::write(output, b"mp3").unwrap();
        Ok(output.to_path_buf())
    }
}

struct StaticProber {
    result: Option<Value>,
}

#[async_trait]
impl MediaProber for StaticProber {
    async fn probe(&self, _path: &Path) -> Result<Value, DomainError> {
        self.result
            .clone()
            .ok_or_else(|| DomainError::Probe("ffprobe exited with 1".to_string()))
    }
}

struct RecordingTranscriber {
    log: CallLog,
    fail: bool,
}

#[async_trait]
impl TranscriptionPort for RecordingTranscriber {
    async fn transcribe(&self, audio: &Path) -> Result<Transcription, DomainError> {
        assert!(audio.exists(), "audio must be on disk before transcription");
        self.log.lock().unwrap().push(format!(
            "transcribe:{}",
            audio.file_name().unwrap().to_string_lossy()
        ));
        if self.fail {
            return Err(DomainError::Transcription("model crashed".to_string()));
        }
        Ok(Transcription::from_segments(
            "en",
            vec![TranscriptSegment {
                id: 0,
                start: 0.0,
                end: 1.5,
                text: " hello world".to_string(),
            }],
        ))
    }
}

struct Harness {
    usecase: ProcessMediaUseCaseImpl,
    log: CallLog,
    temp: TempDir,
}

fn harness(max_upload_bytes: u64, transcode_fails: bool, transcribe_fails: bool) -> Harness {
    harness_with_probe(
        max_upload_bytes,
        transcode_fails,
        transcribe_fails,
        Some(json!({ "format": { "format_name": "mp3" } })),
    )
}

fn harness_with_probe(
    max_upload_bytes: u64,
    transcode_fails: bool,
    transcribe_fails: bool,
    probe: Option<Value>,
) -> Harness {
    let temp = TempDir::new().unwrap();
    let log: CallLog = Arc::default();
    let usecase = ProcessMediaUseCaseImpl::new(
        Arc::new(RecordingTranscoder {
            log: log.clone(),
            fail: transcode_fails,
        }),
        Arc::new(StaticProber { result: probe }),
        Arc::new(RecordingTranscriber {
            log: log.clone(),
            fail: transcribe_fails,
        }),
        ScratchDir::new(temp.path()),
        max_upload_bytes,
    );
    Harness { usecase, log, temp }
}

fn request(filename: &str, size: usize) -> ProcessMediaRequest {
    ProcessMediaRequest {
        job_id: "job-1".to_string(),
        filename: filename.to_string(),
        content_type: None,
        bytes: vec![7u8; size],
    }
}

fn job_request(job_id: &str, filename: &str) -> ProcessMediaRequest {
    ProcessMediaRequest {
        job_id: job_id.to_string(),
        ..request(filename, 8)
    }
}

fn remaining_files(temp: &TempDir) -> usize {
    std::fs::read_dir(temp.path()).unwrap().count()
}

#[tokio::test]
async fn video_is_transcoded_before_transcription() {
    let h = harness(1024, false, false);

    let response = h.usecase.process_media(request("talk.MP4", 64)).await.unwrap();

    assert_eq!(
        *h.log.lock().unwrap(),
        vec![
            "transcode:job-1_audio.mp3".to_string(),
            "transcribe:job-1_audio.mp3".to_string(),
        ]
    );
    assert_eq!(response.status, "completed");
    assert_eq!(response.file_size, 64);
    assert_eq!(response.transcription.text, "hello world");
    assert_eq!(response.file_info["format"]["format_name"], "mp3");
    assert_eq!(remaining_files(&h.temp), 0);
}

#[tokio::test]
async fn audio_skips_transcoding() {
    let h = harness(1024, false, false);

    let response = h.usecase.process_media(request("note.wav", 16)).await.unwrap();

    assert_eq!(
        *h.log.lock().unwrap(),
        vec!["transcribe:job-1_note.wav".to_string()]
    );
    assert_eq!(response.filename, "note.wav");
    assert_eq!(response.transcription.language, "en");
    assert_eq!(remaining_files(&h.temp), 0);
}

#[tokio::test]
async fn oversized_upload_never_reaches_the_pipeline() {
    let h = harness(32, false, false);

    let err = h.usecase.process_media(request("movie.mkv", 33)).await.unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::PayloadTooLarge { .. })
    ));
    assert!(h.log.lock().unwrap().is_empty());
    assert_eq!(remaining_files(&h.temp), 0);
}

#[tokio::test]
async fn transcode_failure_is_reported_and_cleaned_up() {
    let h = harness(1024, true, false);

    let err = h.usecase.process_media(request("clip.avi", 8)).await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to convert video to audio");
    assert_eq!(
        *h.log.lock().unwrap(),
        vec!["transcode:job-1_audio.mp3".to_string()]
    );
    assert_eq!(remaining_files(&h.temp), 0);
}

#[tokio::test]
async fn transcription_failure_still_removes_intermediate_audio() {
    let h = harness(1024, false, true);

    let err = h.usecase.process_media(request("clip.webm", 8)).await.unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Transcription(_))
    ));
    assert_eq!(remaining_files(&h.temp), 0);
}

#[tokio::test]
async fn probe_failure_yields_empty_file_info() {
    let h = harness_with_probe(1024, false, false, None);

    let response = h.usecase.process_media(request("memo.m4a", 8)).await.unwrap();

    assert_eq!(response.file_info, json!({}));
    assert_eq!(response.status, "completed");
}

#[tokio::test]
async fn supported_formats_reports_limit_in_megabytes() {
    let h = harness(150 * 1024 * 1024, false, false);

    let formats = h.usecase.supported_formats();

    assert_eq!(formats.max_file_size, "150MB");
    assert!(formats.video_formats.contains(&"mov"));
    assert!(formats.audio_formats.contains(&"flac"));
}

#[tokio::test]
async fn nested_client_filenames_stay_job_prefixed() {
    let h = harness(1024, false, false);

    let first = h
        .usecase
        .process_media(job_request("job-a", "dir/note.wav"))
        .await
        .unwrap();
    let second = h
        .usecase
        .process_media(job_request("job-b", "../note.wav"))
        .await
        .unwrap();

    assert_eq!(first.filename, "note.wav");
    assert_eq!(second.filename, "note.wav");
    assert_eq!(
        *h.log.lock().unwrap(),
        vec![
            "transcribe:job-a_note.wav".to_string(),
            "transcribe:job-b_note.wav".to_string(),
        ]
    );
    assert_eq!(remaining_files(&h.temp), 0);
}

#[tokio::test]
async fn filename_without_a_usable_component_is_rejected() {
    let h = harness(1024, false, false);

    let err = h
        .usecase
        .process_media(job_request("job-c", "uploads/.."))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::InvalidInput(_))
    ));
    assert!(h.log.lock().unwrap().is_empty());
    assert_eq!(remaining_files(&h.temp), 0);
}
