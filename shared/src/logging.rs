use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::HasLoggingConfig;

/// Installs the global subscriber. `RUST_LOG` wins over the configured level.
pub fn setup_logging<C: HasLoggingConfig>(config: &C) {
    let logging = config.logging_config();
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},tower_http=info", logging.level)));

    let installed = if logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_target(true))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(true))
            .try_init()
    };

    if let Err(err) = installed {
        tracing::warn!(error = %err, "tracing subscriber already installed");
    }
}
