use anyhow::Result;
use speech_configuration::{load_config, setup_logging};
use speech_setup::build_and_run;

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config()?;
    setup_logging(&config);
    let server_config = config.server.clone();
    build_and_run(config, server_config).await?;
    Ok(())
}
