use std::sync::Arc;

use anyhow::Error;
use media_application::{ProcessMediaUseCase, ProcessMediaUseCaseImpl};
use media_configuration::AppConfig;
use media_domain::{MediaProber, MediaTranscoder, TranscriptionPort};
use media_http_server::{create_app_routes, AppState};
use media_infra::{FfmpegTranscoder, FfprobeProber};
use media_infra_asr_whisper::{WhisperAdapterConfig, WhisperTranscriptionAdapter};
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
        #[cfg(feature = "whisper-runtime")]
        tracing::info!("whisper runtime feature enabled");
        #[cfg(not(feature = "whisper-runtime"))]
        tracing::warn!(
            "service compiled without `whisper-runtime`; transcription will return fallback text"
        );
        #[cfg(feature = "whisper-cuda")]
        tracing::info!("whisper backend: CUDA");
        #[cfg(feature = "whisper-vulkan")]
        tracing::info!("whisper backend: Vulkan");
        #[cfg(all(
            feature = "whisper-runtime",
            not(feature = "whisper-cuda"),
            not(feature = "whisper-vulkan")
        ))]
        tracing::info!("whisper backend: CPU");

        let service = &config.service;
        tracing::info!(
            temp_dir = %service.temp_dir,
            model_path = %service.asr.model_path,
            language = %service.asr.language,
            "initializing media processor"
        );

        let scratch = ScratchDir::new(&service.temp_dir);
        scratch.ensure().await.map_err(|err| {
            anyhow::anyhow!("cannot create temp dir `{}`: {err}", service.temp_dir)
        })?;

        let transcoder: Arc<dyn MediaTranscoder> =
            Arc::new(FfmpegTranscoder::new(&service.media.ffmpeg_binary));
        let prober: Arc<dyn MediaProber> =
            Arc::new(FfprobeProber::new(&service.media.ffprobe_binary));
        let transcription: Arc<dyn TranscriptionPort> =
            Arc::new(WhisperTranscriptionAdapter::new(WhisperAdapterConfig {
                model_path: service.asr.model_path.clone(),
                language: service.asr.language.clone(),
                temperature: service.asr.temperature,
                threads: service.asr.threads,
                ffmpeg_binary: service.media.ffmpeg_binary.clone(),
            })?);

        let usecase: Arc<dyn ProcessMediaUseCase> = Arc::new(ProcessMediaUseCaseImpl::new(
            transcoder,
            prober,
            transcription,
            scratch,
            service.max_upload_bytes,
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
            "starting media processor HTTP server"
        );
        let router = create_app_routes(self.state, self.config.service.max_upload_bytes);
        serve(router, &server_config)
            .await
            .map_err(|err| anyhow::anyhow!("server startup failed: {err}"))
    }
}
