use std::{sync::Arc, time::Duration};

use anyhow::Error;
use gateway_application::{
    JobQueryUseCase, JobQueryUseCaseImpl, MediaToTextUseCase, MediaToTextUseCaseImpl,
    TextToAudioUseCase, TextToAudioUseCaseImpl,
};
use gateway_configuration::AppConfig;
use gateway_domain::{MediaProcessorPort, SpeechSynthesizerPort};
use gateway_http_server::{create_app_routes, AppState};
use gateway_infra::{build_http_client, HttpMediaProcessorClient, HttpSpeechSynthesizerClient};
use pipeline_shared::{serve, ScratchDir, ServerConfig};

pub async fn build_and_run(config: AppConfig, server_config: ServerConfig) -> Result<(), Error> {
    let app = Application::new(config).await?;
    app.run(server_config).await
}

pub struct Application {
    pub config: AppConfig,
    pub state: AppState,
}

impl Application {
    pub async fn new(config: AppConfig) -> Result<Self, Error> {
        let service = &config.service;
        tracing::info!(
            media_processor_url = %service.media_processor_url,
            speech_synthesizer_url = %service.speech_synthesizer_url,
            temp_dir = %service.temp_dir,
            "initializing gateway"
        );
        if config.storage.database_url.is_some() || config.storage.minio_url.is_some() {
            tracing::info!("storage settings present but not used by the gateway");
        }

        let staging = ScratchDir::new(&service.temp_dir);
        staging.ensure().await.map_err(|err| {
            anyhow::anyhow!("cannot create temp dir `{}`: {err}", service.temp_dir)
        })?;

        let client = build_http_client(Duration::from_secs(service.request_timeout_secs))?;
        let processor: Arc<dyn MediaProcessorPort> = Arc::new(HttpMediaProcessorClient::new(
            client.clone(),
            &service.media_processor_url,
        ));
        let synthesizer: Arc<dyn SpeechSynthesizerPort> = Arc::new(
            HttpSpeechSynthesizerClient::new(client, &service.speech_synthesizer_url),
        );

        let media_to_text: Arc<dyn MediaToTextUseCase> = Arc::new(MediaToTextUseCaseImpl::new(
            processor,
            staging.clone(),
            service.max_upload_bytes,
        ));
        let text_to_audio: Arc<dyn TextToAudioUseCase> =
            Arc::new(TextToAudioUseCaseImpl::new(synthesizer));
        let jobs: Arc<dyn JobQueryUseCase> = Arc::new(JobQueryUseCaseImpl::new(staging));

        Ok(Self {
            config,
            state: AppState {
                media_to_text,
                text_to_audio,
                jobs,
            },
        })
    }

    pub async fn run(self, server_config: ServerConfig) -> Result<(), Error> {
        tracing::info!(
            host = %server_config.host,
            port = server_config.port,
            "starting gateway HTTP server"
        );
        let router = create_app_routes(self.state, self.config.service.max_upload_bytes);
        serve(router, &server_config)
            .await
            .map_err(|err| anyhow::anyhow!("server startup failed: {err}"))
    }
}
