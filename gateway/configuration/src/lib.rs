use serde::{Deserialize, Serialize};

use pipeline_shared::{
    load_config as load_layered, ConfigError, ConfigLoader, HasLoggingConfig, HasServerConfig,
    LoggingConfig, ServerConfig,
};

pub use pipeline_shared::setup_logging;

pub type AppConfig = GatewayConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
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
    #[serde(default = "default_media_processor_url")]
    pub media_processor_url: String,
    #[serde(default = "default_speech_synthesizer_url")]
    pub speech_synthesizer_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_temp_dir")]
    pub temp_dir: String,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,
}

/// Declared for deployments that wire a database and object store. Nothing
/// reads these yet.
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

impl Default for GatewayConfig {
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
            media_processor_url: default_media_processor_url(),
            speech_synthesizer_url: default_speech_synthesizer_url(),
            request_timeout_secs: default_request_timeout_secs(),
            temp_dir: default_temp_dir(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl ConfigLoader for GatewayConfig {
    fn config_prefix() -> &'static str {
        "GATEWAY"
    }

    fn env_overrides() -> &'static [(&'static str, &'static str)] {
        &[
            ("MEDIA_PROCESSOR_URL", "service.media_processor_url"),
            ("TEXT_TO_SPEECH_URL", "service.speech_synthesizer_url"),
            ("DATABASE_URL", "storage.database_url"),
            ("MINIO_URL", "storage.minio_url"),
            ("MINIO_ACCESS_KEY", "storage.minio_access_key"),
            ("MINIO_SECRET_KEY", "storage.minio_secret_key"),
        ]
    }
}

impl HasServerConfig for GatewayConfig {
    fn server_config(&self) -> &ServerConfig {
        &self.server
    }

    fn set_server_config(&mut self, config: ServerConfig) {
        self.server = config;
    }
}

impl HasLoggingConfig for GatewayConfig {
    fn logging_config(&self) -> &LoggingConfig {
        &self.logging
    }

    fn set_logging_config(&mut self, config: LoggingConfig) {
        self.logging = config;
    }
}

pub fn load_config() -> Result<GatewayConfig, ConfigError> {
    load_layered::<GatewayConfig>()
}

fn default_server() -> ServerConfig {
    ServerConfig::with_port(8000)
}

fn default_media_processor_url() -> String {
    "http://media-processor:8001".to_string()
}

fn default_speech_synthesizer_url() -> String {
    "http://text-to-speech:8002".to_string()
}

fn default_request_timeout_secs() -> u64 {
    300
}

fn default_temp_dir() -> String {
    "temp_files".to_string()
}

fn default_max_upload_bytes() -> u64 {
    150 * 1024 * 1024
}
