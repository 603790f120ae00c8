use std::{
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use async_trait::async_trait;
use media_application::ProcessMediaUseCaseImpl;
use media_domain::{
    DomainError, MediaProber, MediaTranscoder, TranscriptSegment, Transcription, TranscriptionPort,
};
use media_http_server::{create_app_routes, AppState};
use pipeline_shared::ScratchDir;
use reqwest::{multipart, Client, StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;

#[derive(Default)]
struct Counters {
    transcodes: AtomicUsize,
    transcriptions: AtomicUsize,
}

struct FakeTranscoder {
    counters: Arc<Counters>,
    fail: bool,
}

#[async_trait]
impl MediaTranscoder for FakeTranscoder {
    async fn extract_audio(&self, _input: &Path, output: &Path) -> Result<PathBuf, DomainError> {
        self.counters.transcodes.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DomainError::Transcode(
                "Failed to convert video to audio".to_string(),
            ));
        }
        tokio::fs::write(output, b"mp3")
            .await
            .map_err(|err| DomainError::Storage(err.to_string()))?;
        Ok(output.to_path_buf())
    }
}

struct FakeProber;

#[async_trait]
impl MediaProber for FakeProber {
    async fn probe(&self, _path: &Path) -> Result<Value, DomainError> {
        Ok(json!({ "format": { "format_name": "wav" } }))
    }
}

struct FakeTranscriber {
    counters: Arc<Counters>,
}

#[async_trait]
impl TranscriptionPort for FakeTranscriber {
    async fn transcribe(&self, _audio: &Path) -> Result<Transcription, DomainError> {
        self.counters.transcriptions.fetch_add(1, Ordering::SeqCst);
        Ok(Transcription::from_segments(
            "en",
            vec![TranscriptSegment {
                id: 0,
                start: 0.0,
                end: 2.0,
                text: "testing one two".to_string(),
            }],
        ))
    }
}

struct TestProcessor {
    base_url: String,
    client: Client,
    counters: Arc<Counters>,
    temp: TempDir,
}

async fn setup_test_server(
    max_upload_bytes: u64,
    transcode_fails: bool,
) -> Result<TestProcessor, Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let counters = Arc::new(Counters::default());
    let usecase = ProcessMediaUseCaseImpl::new(
        Arc::new(FakeTranscoder {
            counters: counters.clone(),
            fail: transcode_fails,
        }),
        Arc::new(FakeProber),
        Arc::new(FakeTranscriber {
            counters: counters.clone(),
        }),
        ScratchDir::new(temp.path()),
        max_upload_bytes,
    );
    let state = AppState {
        usecase: Arc::new(usecase),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;
    let router = create_app_routes(state, max_upload_bytes);
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok(TestProcessor {
        base_url: format!("http://{address}"),
        client: Client::new(),
        counters,
        temp,
    })
}

fn media_form(filename: &str, size: usize) -> multipart::Form {
    multipart::Form::new()
        .text("job_id", "job-42")
        .text("filename", filename.to_string())
        .part(
            "file",
            multipart::Part::bytes(vec![3u8; size]).file_name(filename.to_string()),
        )
}

#[tokio::test]
async fn health_names_the_service() -> Result<(), Box<dyn std::error::Error>> {
    let processor = setup_test_server(1024, false).await?;

    let body: Value = processor
        .client
        .get(format!("{}/health", processor.base_url))
        .send()
        .await?
        .json()
        .await?;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "media-processor");
    Ok(())
}

#[tokio::test]
async fn processes_video_upload() -> Result<(), Box<dyn std::error::Error>> {
    let processor = setup_test_server(1024, false).await?;

    let response = processor
        .client
        .post(format!("{}/process-media", processor.base_url))
        .multipart(media_form("lecture.mov", 128))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await?;
    assert_eq!(body["job_id"], "job-42");
    assert_eq!(body["filename"], "lecture.mov");
    assert_eq!(body["file_size"], 128);
    assert_eq!(body["status"], "completed");
    assert_eq!(body["transcription"]["text"], "testing one two");
    assert_eq!(body["transcription"]["segments"][0]["end"], 2.0);
    assert_eq!(body["file_info"]["format"]["format_name"], "wav");
    assert_eq!(processor.counters.transcodes.load(Ordering::SeqCst), 1);
    assert_eq!(processor.counters.transcriptions.load(Ordering::SeqCst), 1);
    assert_eq!(std::fs::read_dir(processor.temp.path())?.count(), 0);
    Ok(())
}

#[tokio::test]
async fn oversized_upload_is_413() -> Result<(), Box<dyn std::error::Error>> {
    let processor = setup_test_server(64, false).await?;

    let response = processor
        .client
        .post(format!("{}/process-media", processor.base_url))
        .multipart(media_form("lecture.mp4", 65))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body: Value = response.json().await?;
    assert_eq!(body["error"], "File size exceeds 0MB limit");
    assert_eq!(processor.counters.transcodes.load(Ordering::SeqCst), 0);
    assert_eq!(processor.counters.transcriptions.load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn failed_conversion_is_500() -> Result<(), Box<dyn std::error::Error>> {
    let processor = setup_test_server(1024, true).await?;

    let response = processor
        .client
        .post(format!("{}/process-media", processor.base_url))
        .multipart(media_form("lecture.flv", 16))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await?;
    assert_eq!(body["error"], "Failed to convert video to audio");
    assert_eq!(processor.counters.transcriptions.load(Ordering::SeqCst), 0);
    assert_eq!(std::fs::read_dir(processor.temp.path())?.count(), 0);
    Ok(())
}

#[tokio::test]
async fn missing_job_id_is_400() -> Result<(), Box<dyn std::error::Error>> {
    let processor = setup_test_server(1024, false).await?;

    let form = multipart::Form::new().part(
        "file",
        multipart::Part::bytes(vec![1u8; 4]).file_name("a.wav"),
    );
    let response = processor
        .client
        .post(format!("{}/process-media", processor.base_url))
        .multipart(form)
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    assert_eq!(body["error"], "Missing form field `job_id`");
    Ok(())
}

#[tokio::test]
async fn missing_filename_field_is_400() -> Result<(), Box<dyn std::error::Error>> {
    let processor = setup_test_server(1024, false).await?;

    let form = multipart::Form::new().text("job_id", "job-43").part(
        "file",
        multipart::Part::bytes(vec![1u8; 4]).file_name("part-name.wav"),
    );
    let response = processor
        .client
        .post(format!("{}/process-media", processor.base_url))
        .multipart(form)
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    assert_eq!(body["error"], "Missing form field `filename`");
    assert_eq!(processor.counters.transcriptions.load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn unusable_filename_is_400() -> Result<(), Box<dyn std::error::Error>> {
    let processor = setup_test_server(1024, false).await?;

    let response = processor
        .client
        .post(format!("{}/process-media", processor.base_url))
        .multipart(media_form("..", 4))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await?;
    assert_eq!(body["error"], "Invalid filename `..`");
    assert_eq!(std::fs::read_dir(processor.temp.path())?.count(), 0);
    Ok(())
}

#[tokio::test]
async fn lists_supported_formats() -> Result<(), Box<dyn std::error::Error>> {
    let processor = setup_test_server(150 * 1024 * 1024, false).await?;

    let body: Value = processor
        .client
        .get(format!("{}/supported-formats", processor.base_url))
        .send()
        .await?
        .json()
        .await?;

    assert_eq!(body["max_file_size"], "150MB");
    assert_eq!(body["video_formats"].as_array().map(Vec::len), Some(7));
    assert_eq!(body["audio_formats"].as_array().map(Vec::len), Some(7));
    assert!(body.get("audio").is_none());
    Ok(())
}
