use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use pipeline_shared::ScratchDir;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use speech_application::{SpeechUseCaseImpl, SynthesisWorkerPool, Synthesizer};
use speech_domain::{AudioFormat, EngineFailure, SpeechEngine, SpeechRequest};
use speech_http_server::{create_app_routes, AppState};
use speech_infra::LocalAudioStore;
use tempfile::TempDir;

struct FixedEngine {
    name: &'static str,
    format: AudioFormat,
    output: Option<&'static [u8]>,
    calls: AtomicUsize,
}

impl SpeechEngine for FixedEngine {
    fn name(&self) -> &'static str {
        self.name
    }

    fn output_format(&self) -> AudioFormat {
        self.format
    }

    fn synthesize(&self, _request: &SpeechRequest) -> Result<Vec<u8>, EngineFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.output.map(<[u8]>::to_vec).ok_or(EngineFailure::Rejected {
            engine: self.name,
            status: 503,
        })
    }
}

struct TestSynthesizer {
    base_url: String,
    client: Client,
    primary: Arc<FixedEngine>,
    fallback: Arc<FixedEngine>,
    temp: TempDir,
    downloads: TempDir,
}

async fn setup_test_server(
    primary_output: Option<&'static [u8]>,
    fallback_output: Option<&'static [u8]>,
) -> Result<TestSynthesizer, Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let downloads = TempDir::new()?;
    let primary = Arc::new(FixedEngine {
        name: "google-tts",
        format: AudioFormat::Mp3,
        output: primary_output,
        calls: AtomicUsize::new(0),
    });
    let fallback = Arc::new(FixedEngine {
        name: "espeak-ng",
        format: AudioFormat::Wav,
        output: fallback_output,
        calls: AtomicUsize::new(0),
    });

    let store = LocalAudioStore::new(ScratchDir::new(temp.path()), downloads.path());
    let usecase = SpeechUseCaseImpl::new(
        Synthesizer::new(primary.clone(), fallback.clone(), SynthesisWorkerPool::new(4)),
        Arc::new(store),
    );
    let state = AppState {
        usecase: Arc::new(usecase),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, create_app_routes(state)).await;
    });

    Ok(TestSynthesizer {
        base_url: format!("http://{address}"),
        client: Client::new(),
        primary,
        fallback,
        temp,
        downloads,
    })
}

#[tokio::test]
async fn generates_mp3_and_serves_it() -> Result<(), Box<dyn std::error::Error>> {
    let server = setup_test_server(Some(b"ID3mp3"), Some(b"RIFFwav")).await?;

    let response = server
        .client
        .post(format!("{}/generate-speech", server.base_url))
        .json(&json!({ "job_id": "job-1", "text": "hello world" }))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await?;
    assert_eq!(body["filename"], "job-1.mp3");
    assert_eq!(body["status"], "completed");
    assert_eq!(body["download_url"], "/download/job-1/job-1.mp3");
    assert!(server.downloads.path().join("job-1.mp3").is_file());
    assert_eq!(server.fallback.calls.load(Ordering::SeqCst), 0);

    let download = server
        .client
        .get(format!("{}/download/job-1/job-1.mp3", server.base_url))
        .send()
        .await?;
    assert_eq!(download.status(), StatusCode::OK);
    assert_eq!(download.headers()["content-type"].to_str()?, "audio/mpeg");
    assert_eq!(download.headers()["cache-control"].to_str()?, "no-cache");
    assert_eq!(
        download.headers()["content-disposition"].to_str()?,
        "attachment; filename=job-1.mp3"
    );
    assert_eq!(download.bytes().await?.as_ref(), b"ID3mp3");
    Ok(())
}

#[tokio::test]
async fn falls_back_to_wav_once() -> Result<(), Box<dyn std::error::Error>> {
    let server = setup_test_server(None, Some(b"RIFFwav")).await?;

    let body: Value = server
        .client
        .post(format!("{}/generate-speech", server.base_url))
        .json(&json!({
            "job_id": "job-2",
            "text": "offline please",
            "voice_type": "female",
            "filename": "note.mp3"
        }))
        .send()
        .await?
        .json()
        .await?;

    assert_eq!(body["filename"], "note.wav");
    assert_eq!(server.primary.calls.load(Ordering::SeqCst), 1);
    assert_eq!(server.fallback.calls.load(Ordering::SeqCst), 1);

    let download = server
        .client
        .get(format!("{}/download/job-2/note.wav", server.base_url))
        .send()
        .await?;
    assert_eq!(download.headers()["content-type"].to_str()?, "audio/wav");
    Ok(())
}

#[tokio::test]
async fn both_engines_failing_is_500() -> Result<(), Box<dyn std::error::Error>> {
    let server = setup_test_server(None, None).await?;

    let response = server
        .client
        .post(format!("{}/generate-speech", server.base_url))
        .json(&json!({ "job_id": "job-3", "text": "nobody home" }))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await?;
    let message = body["error"].as_str().unwrap_or_default();
    assert!(message.starts_with("Speech generation failed"));
    assert_eq!(std::fs::read_dir(server.temp.path())?.count(), 0);
    Ok(())
}

#[tokio::test]
async fn invalid_requests_are_400() -> Result<(), Box<dyn std::error::Error>> {
    let server = setup_test_server(Some(b"ID3"), Some(b"RIFF")).await?;
    let cases = [
        (
            json!({ "job_id": "j", "text": "hi", "voice_type": "robot" }),
            "Voice type must be 'male' or 'female'",
        ),
        (json!({ "job_id": "j", "text": "   " }), "Text cannot be empty"),
        (
            json!({ "job_id": "j", "text": "a".repeat(5001) }),
            "Text is too long (max 5000 characters)",
        ),
    ];

    for (payload, expected) in cases {
        let response = server
            .client
            .post(format!("{}/generate-speech", server.base_url))
            .json(&payload)
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await?;
        assert_eq!(body["error"], expected);
    }
    assert_eq!(server.primary.calls.load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn download_missing_or_escaping_is_404() -> Result<(), Box<dyn std::error::Error>> {
    let server = setup_test_server(Some(b"ID3"), None).await?;
    std::fs::write(server.downloads.path().join("secret.mp3"), b"x")?;

    for path in ["/download/job/missing.mp3", "/download/job/..%2Fsecret.mp3"] {
        let response = server
            .client
            .get(format!("{}{path}", server.base_url))
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = response.json().await?;
        assert_eq!(body["error"], "File not found");
    }
    Ok(())
}

#[tokio::test]
async fn lists_job_files_and_languages() -> Result<(), Box<dyn std::error::Error>> {
    let server = setup_test_server(Some(b"ID3"), None).await?;
    server
        .client
        .post(format!("{}/generate-speech", server.base_url))
        .json(&json!({ "job_id": "job-5", "text": "first" }))
        .send()
        .await?;

    let listing: Value = server
        .client
        .get(format!("{}/files/job-5", server.base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listing["job_id"], "job-5");
    assert_eq!(listing["files"][0]["filename"], "job-5.mp3");
    assert_eq!(listing["files"][0]["size"], 3);
    assert_eq!(listing["files"][0]["download_url"], "/download/job-5/job-5.mp3");

    let languages: Value = server
        .client
        .get(format!("{}/supported-languages", server.base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(languages["languages"]["fi"], "Finnish");
    assert_eq!(languages["max_text_length"], 5000);

    let health: Value = server
        .client
        .get(format!("{}/health", server.base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(health["service"], "text-to-speech");
    Ok(())
}
