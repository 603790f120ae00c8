use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use gateway_domain::{DomainError, SpeechJob, SpeechSynthesizerPort};

use crate::transport_error;

pub struct HttpSpeechSynthesizerClient {
    client: Client,
    base_url: String,
}

impl HttpSpeechSynthesizerClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl SpeechSynthesizerPort for HttpSpeechSynthesizerClient {
    async fn generate_speech(&self, job: &SpeechJob) -> Result<Value, DomainError> {
        let url = format!("{}/generate-speech", self.base_url);
        tracing::debug!(url = %url, job_id = %job.job_id, "posting text to synthesizer");

        let response = self
            .client
            .post(&url)
            .json(job)
            .send()
            .await
            .map_err(|err| transport_error("speech synthesizer", err))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                job_id = %job.job_id,
                status = status.as_u16(),
                body = %body,
                "speech synthesizer rejected job"
            );
            return Err(DomainError::Downstream {
                status: status.as_u16(),
                message: "Text-to-speech generation failed".to_string(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| transport_error("speech synthesizer", err))
    }
}
