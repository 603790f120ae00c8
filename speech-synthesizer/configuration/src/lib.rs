use serde::{Deserialize, Serialize};

use pipeline_shared::{
    load_config as load_layered, ConfigError, ConfigLoader, HasLoggingConfig, HasServerConfig,
    LoggingConfig, ServerConfig,
};

pub use pipeline_shared::setup_logging;

pub type AppConfig = SpeechSynthesizerConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechSynthesizerConfig {
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
    /// Used when a request carries no `download_path`; `<home>/Downloads`
    /// when unset.
    #[serde(default)]
    pub default_download_dir: Option<String>,
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
    #[serde(default)]
    pub google: GoogleTtsConfig,
    #[serde(default)]
    pub espeak: EspeakConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleTtsConfig {
    #[serde(default = "default_google_url")]
    pub url: String,
    #[serde(default = "default_google_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EspeakConfig {
    #[serde(default = "default_espeak_binary")]
    pub binary: String,
    #[serde(default = "default_rate_wpm")]
    pub rate_wpm: u32,
    #[serde(default = "default_volume")]
    pub volume: f32,
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

impl Default for SpeechSynthesizerConfig {
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
            default_download_dir: None,
            pool_size: default_pool_size(),
            google: GoogleTtsConfig::default(),
            espeak: EspeakConfig::default(),
        }
    }
}

impl Default for GoogleTtsConfig {
    fn default() -> Self {
        Self {
            url: default_google_url(),
            timeout_secs: default_google_timeout_secs(),
        }
    }
}

impl Default for EspeakConfig {
    fn default() -> Self {
        Self {
            binary: default_espeak_binary(),
            rate_wpm: default_rate_wpm(),
            volume: default_volume(),
        }
    }
}

impl ConfigLoader for SpeechSynthesizerConfig {
    fn config_prefix() -> &'static str {
        "SPEECH_SYNTHESIZER"
    }

    fn env_overrides() -> &'static [(&'static str, &'static str)] {
        &[
            ("DATABASE_URL", "storage.database_url"),
            ("MINIO_URL", "storage.minio_url"),
            ("MINIO_ACCESS_KEY", "storage.minio_access_key"),
            ("MINIO_SECRET_KEY", "storage.minio_secret_key"),
        ]
    }
}

impl HasServerConfig for SpeechSynthesizerConfig {
    fn server_config(&self) -> &ServerConfig {
        &self.server
    }

    fn set_server_config(&mut self, config: ServerConfig) {
        self.server = config;
    }
}

impl HasLoggingConfig for SpeechSynthesizerConfig {
    fn logging_config(&self) -> &LoggingConfig {
        &self.logging
    }

    fn set_logging_config(&mut self, config: LoggingConfig) {
        self.logging = config;
    }
}

pub fn load_config() -> Result<SpeechSynthesizerConfig, ConfigError> {
    load_layered::<SpeechSynthesizerConfig>()
}

fn default_server() -> ServerConfig {
    ServerConfig::with_port(8002)
}

fn default_temp_dir() -> String {
    "temp_files".to_string()
}

fn default_pool_size() -> usize {
    4
}

fn default_google_url() -> String {
    "https://translate.google.com/translate_tts".to_string()
}

fn default_google_timeout_secs() -> u64 {
    30
}

fn default_espeak_binary() -> String {
    "espeak-ng".to_string()
}

fn default_rate_wpm() -> u32 {
    150
}

fn default_volume() -> f32 {
    0.9
}
