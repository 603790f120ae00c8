use async_trait::async_trait;
use reqwest::{multipart, Client};
use serde_json::Value;

use gateway_domain::{DomainError, MediaProcessorPort, StagedMedia};

use crate::transport_error;

pub struct HttpMediaProcessorClient {
    client: Client,
    base_url: String,
}

impl HttpMediaProcessorClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl MediaProcessorPort for HttpMediaProcessorClient {
    async fn process_media(&self, media: &StagedMedia) -> Result<Value, DomainError> {
        let bytes = tokio::fs::read(&media.path)
            .await
            .map_err(|err| DomainError::Storage(format!("cannot read staged upload: {err}")))?;

        let mut file_part = multipart::Part::bytes(bytes).file_name(media.filename.clone());
        if let Some(content_type) = media.content_type.as_deref() {
            file_part = file_part
                .mime_str(content_type)
                .map_err(|err| DomainError::Transport(format!("invalid content type: {err}")))?;
        }
        let form = multipart::Form::new()
            .text("job_id", media.job_id.to_string())
            .text("filename", media.filename.clone())
            .part("file", file_part);

        let url = format!("{}/process-media", self.base_url);
        tracing::debug!(url = %url, job_id = %media.job_id, "posting media to processor");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|err| transport_error("media processor", err))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                job_id = %media.job_id,
                status = status.as_u16(),
                body = %body,
                "media processor rejected upload"
            );
            return Err(DomainError::Downstream {
                status: status.as_u16(),
                message: "Media processing failed".to_string(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| transport_error("media processor", err))
    }
}
