use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Error;
use pipeline_shared::{serve, ScratchDir, ServerConfig};
use speech_application::{SpeechUseCase, SpeechUseCaseImpl, SynthesisWorkerPool, Synthesizer};
use speech_configuration::AppConfig;
use speech_domain::{AudioStore, SpeechEngine};
use speech_http_server::{create_app_routes, AppState};
use speech_infra::{default_download_dir, EspeakEngine, GoogleTranslateEngine, LocalAudioStore};

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
        let download_dir = service
            .default_download_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(default_download_dir);
        tracing::info!(
            temp_dir = %service.temp_dir,
            download_dir = %download_dir.display(),
            pool_size = service.pool_size,
            espeak = %service.espeak.binary,
            "initializing speech synthesizer"
        );

        let scratch = ScratchDir::new(&service.temp_dir);
        scratch.ensure().await.map_err(|err| {
            anyhow::anyhow!("cannot create temp dir `{}`: {err}", service.temp_dir)
        })?;

        let primary: Arc<dyn SpeechEngine> = Arc::new(GoogleTranslateEngine::new(
            &service.google.url,
            Duration::from_secs(service.google.timeout_secs),
        ));
        let fallback: Arc<dyn SpeechEngine> = Arc::new(EspeakEngine::new(
            &service.espeak.binary,
            service.espeak.rate_wpm,
            service.espeak.volume,
        ));
        let pool = SynthesisWorkerPool::new(service.pool_size);
        let store: Arc<dyn AudioStore> = Arc::new(LocalAudioStore::new(scratch, download_dir));

        let usecase: Arc<dyn SpeechUseCase> = Arc::new(SpeechUseCaseImpl::new(
            Synthesizer::new(primary, fallback, pool),
            store,
        ));

        Ok(Self {
            config,
            state: AppState { usecase },
        })
    }

    pub async fn run(self, server_config: ServerConfig) -> Result<(), Error> {
        tracing::info!(
            host = %server_config.host,
            port = server_config.port,
            "starting speech synthesizer HTTP server"
        );
        serve(create_app_routes(self.state), &server_config)
            .await
            .map_err(|err| anyhow::anyhow!("server startup failed: {err}"))
    }
}
