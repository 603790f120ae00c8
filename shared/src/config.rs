use config::{Config, Environment, File};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    pub fn with_port(port: u16) -> Self {
        Self {
            host: default_host(),
            port,
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

pub trait HasServerConfig {
    fn server_config(&self) -> &ServerConfig;
    fn set_server_config(&mut self, config: ServerConfig);
}

pub trait HasLoggingConfig {
    fn logging_config(&self) -> &LoggingConfig;
    fn set_logging_config(&mut self, config: LoggingConfig);
}

/// Layered loading for a service configuration.
///
/// Sources, later ones winning: the `Default` impl, `config/default.toml`,
/// `config/<RUN_ENV>.toml`, `<PREFIX>__SECTION__KEY` environment variables and
/// finally the plain variables listed by [`ConfigLoader::env_overrides`].
pub trait ConfigLoader: Default + Serialize + DeserializeOwned {
    fn config_prefix() -> &'static str;

    /// `(ENV_VAR, config.key)` pairs for unprefixed variables.
    fn env_overrides() -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

pub fn load_config<T: ConfigLoader>() -> Result<T, ConfigError> {
    let _ = dotenvy::dotenv();
    let run_env = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".to_string());

    let mut builder = Config::builder()
        .add_source(Config::try_from(&T::default())?)
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{run_env}")).required(false))
        .add_source(
            Environment::with_prefix(T::config_prefix())
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

    for (variable, key) in T::env_overrides() {
        builder = builder.set_override_option(*key, std::env::var(variable).ok())?;
    }

    let loaded = builder.build()?.try_deserialize::<T>()?;
    tracing::debug!(
        prefix = T::config_prefix(),
        run_env = %run_env,
        "configuration loaded"
    );
    Ok(loaded)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_level() -> String {
    "info".to_string()
}
