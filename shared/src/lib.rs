pub mod config;
pub mod health;
pub mod logging;
pub mod scratch;
pub mod server;
pub mod validation;

pub use config::{
    load_config, ConfigError, ConfigLoader, HasLoggingConfig, HasServerConfig, LoggingConfig,
    ServerConfig,
};
pub use health::HealthResponse;
pub use logging::setup_logging;
pub use scratch::{client_file_name, ScratchDir, ScratchEntry};
pub use server::{serve, shutdown_signal};
pub use validation::{ValidatedJson, ValidationRejection};
