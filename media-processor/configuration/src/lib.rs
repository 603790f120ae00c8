use serde::{Deserialize, Serialize};

use pipeline_shared::{
    load_config as load_layered, ConfigError, ConfigLoader, HasLoggingConfig, HasServerConfig,
    LoggingConfig, ServerConfig,
};

pub use pipeline_shared::setup_logging;

pub type AppConfig = MediaProcessorConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaProcessorConfig {
    #[serde(default = "default_server")]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_temp_dir")]
    pub temp_dir: String,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,
    #[serde(default)]
    pub media: MediaToolsConfig,
    #[serde(default)]
    pub asr: AsrConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaToolsConfig {
    #[serde(default = "default_ffmpeg_binary")]
    pub ffmpeg_binary: String,
    #[serde(default = "default_ffprobe_binary")]
    pub ffprobe_binary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsrConfig {
    #[serde(default = "default_model_path")]
    pub model_path: String,
    /// `auto` lets the model detect the spoken language.
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub temperature: f32,
    #[serde(default = "default_threads")]
    pub threads: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default)]
    pub minio_url: Option<String>,
    #[serde(default)]
    pub minio_access_key: Option<String>,
    #[serde(default)]
    pub minio_secret_key: Option<String>,
}

impl Default for MediaProcessorConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            logging: LoggingConfig::default(),
            service: ServiceConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            temp_dir: default_temp_dir(),
            max_upload_bytes: default_max_upload_bytes(),
            media: MediaToolsConfig::default(),
            asr: AsrConfig::default(),
        }
    }
}

impl Default for MediaToolsConfig {
    fn default() -> Self {
        Self {
            ffmpeg_binary: default_ffmpeg_binary(),
            ffprobe_binary: default_ffprobe_binary(),
        }
    }
}

impl Default for AsrConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            language: default_language(),
            temperature: 0.0,
            threads: default_threads(),
        }
    }
}

impl ConfigLoader for MediaProcessorConfig {
    fn config_prefix() -> &'static str {
        "MEDIA_PROCESSOR"
    }

    fn env_overrides() -> &'static [(&'static str, &'static str)] {
        &[
            ("WHISPER_MODEL_PATH", "service.asr.model_path"),
            ("DATABASE_URL", "storage.database_url"),
            ("MINIO_URL", "storage.minio_url"),
            ("MINIO_ACCESS_KEY", "storage.minio_access_key"),
            ("MINIO_SECRET_KEY", "storage.minio_secret_key"),
        ]
    }
}

impl HasServerConfig for MediaProcessorConfig {
    fn server_config(&self) -> &ServerConfig {
        &self.server
    }

    fn set_server_config(&mut self, config: ServerConfig) {
        self.server = config;
    }
}

impl HasLoggingConfig for MediaProcessorConfig {
    fn logging_config(&self) -> &LoggingConfig {
        &self.logging
    }

    fn set_logging_config(&mut self, config: LoggingConfig) {
        self.logging = config;
    }
}

pub fn load_config() -> Result<MediaProcessorConfig, ConfigError> {
    load_layered::<MediaProcessorConfig>()
}

fn default_server() -> ServerConfig {
    ServerConfig::with_port(8001)
}

fn default_temp_dir() -> String {
    "temp_files".to_string()
}

fn default_max_upload_bytes() -> u64 {
    150 * 1024 * 1024
}

fn default_ffmpeg_binary() -> String {
    "ffmpeg".to_string()
}

fn default_ffprobe_binary() -> String {
    "ffprobe".to_string()
}

fn default_model_path() -> String {
    "models/ggml-base.bin".to_string()
}

fn default_language() -> String {
    "auto".to_string()
}

fn default_threads() -> usize {
    4
}
