mod media_processor;
mod speech_synthesizer;

use std::time::Duration;

use gateway_domain::DomainError;

pub use media_processor::HttpMediaProcessorClient;
pub use speech_synthesizer::HttpSpeechSynthesizerClient;

pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, DomainError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|err| DomainError::Transport(format!("failed to build http client: {err}")))
}

fn transport_error(service: &str, err: reqwest::Error) -> DomainError {
    if err.is_timeout() {
        DomainError::Transport(format!("{service} timed out: {err}"))
    } else {
        DomainError::Transport(format!("{service} unreachable: {err}"))
    }
}
