use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use gateway_application::{JobQueryUseCaseImpl, MediaToTextUseCaseImpl, TextToAudioUseCaseImpl};
use gateway_domain::{
    DomainError, MediaProcessorPort, SpeechJob, SpeechSynthesizerPort, StagedMedia,
};
use gateway_http_server::{create_app_routes, AppState};
use pipeline_shared::ScratchDir;
use reqwest::Client;
use serde_json::{json, Value};
use tempfile::TempDir;

#[derive(Default)]
pub struct CountingProcessor {
    pub calls: AtomicUsize,
}

#[async_trait]
impl MediaProcessorPort for CountingProcessor {
    async fn process_media(&self, media: &StagedMedia) -> Result<Value, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(json!({
            "job_id": media.job_id.as_str(),
            "transcription": { "text": "hello", "language": "en", "segments": [] },
            "status": "completed",
        }))
    }
}

#[derive(Default)]
pub struct CountingSynthesizer {
    pub calls: AtomicUsize,
}

#[async_trait]
impl SpeechSynthesizerPort for CountingSynthesizer {
    async fn generate_speech(&self, job: &SpeechJob) -> Result<Value, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(json!({ "job_id": job.job_id.as_str(), "filename": job.filename }))
    }
}

pub struct TestGateway {
    pub base_url: String,
    pub client: Client,
    pub processor: Arc<CountingProcessor>,
    pub synthesizer: Arc<CountingSynthesizer>,
    pub temp: TempDir,
}

pub async fn setup_test_server(
    max_upload_bytes: u64,
) -> Result<TestGateway, Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let staging = ScratchDir::new(temp.path());
    let processor = Arc::new(CountingProcessor::default());
    let synthesizer = Arc::new(CountingSynthesizer::default());

    let state = AppState {
        media_to_text: Arc::new(MediaToTextUseCaseImpl::new(
            processor.clone(),
            staging.clone(),
            max_upload_bytes,
        )),
        text_to_audio: Arc::new(TextToAudioUseCaseImpl::new(synthesizer.clone())),
        jobs: Arc::new(JobQueryUseCaseImpl::new(staging)),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;
    let router = create_app_routes(state, max_upload_bytes);
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok(TestGateway {
        base_url: format!("http://{address}"),
        client: Client::new(),
        processor,
        synthesizer,
        temp,
    })
}
