use std::time::Duration;

use reqwest::{blocking::Client, Url};
use speech_domain::{AudioFormat, EngineFailure, SpeechEngine, SpeechRequest};

const ENGINE: &str = "google-tts";

/// The endpoint refuses longer `q` values.
pub const MAX_CHUNK_CHARS: usize = 100;

/// Online MP3 synthesis through the Google Translate TTS endpoint.
pub struct GoogleTranslateEngine {
    url: String,
    timeout: Duration,
}

impl GoogleTranslateEngine {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    fn chunk_url(
        &self,
        chunk: &str,
        language: &str,
        idx: usize,
        total: usize,
    ) -> Result<Url, EngineFailure> {
        let params = [
            ("ie", "UTF-8".to_string()),
            ("q", chunk.to_string()),
            ("tl", language.to_string()),
            ("client", "tw-ob".to_string()),
            ("total", total.to_string()),
            ("idx", idx.to_string()),
            ("textlen", chunk.chars().count().to_string()),
        ];
        Url::parse_with_params(&self.url, &params).map_err(|err| EngineFailure::Network {
            engine: ENGINE,
            message: format!("invalid endpoint `{}`: {err}", self.url),
        })
    }
}

/// Splits on whitespace into chunks of at most `max_chars` characters. Words
/// longer than the limit are cut.
pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if word_len > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars = word.chars().collect::<Vec<_>>();
            chunks.extend(chars.chunks(max_chars).map(|piece| piece.iter().collect()));
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            chunks.push(std::mem::replace(&mut current, word.to_string()));
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

impl SpeechEngine for GoogleTranslateEngine {
    fn name(&self) -> &'static str {
        ENGINE
    }

    fn output_format(&self) -> AudioFormat {
        AudioFormat::Mp3
    }

    fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, EngineFailure> {
        let network = |err: reqwest::Error| EngineFailure::Network {
            engine: ENGINE,
            message: err.to_string(),
        };

        // Built per call: the blocking client must not outlive this worker thread.
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent("Mozilla/5.0")
            .build()
            .map_err(network)?;

        let chunks = split_text(&request.text, MAX_CHUNK_CHARS);
        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let url = self.chunk_url(chunk, &request.language, idx, chunks.len())?;
            let response = client.get(url).send().map_err(network)?;
            let status = response.status();
            if !status.is_success() {
                return Err(EngineFailure::Rejected {
                    engine: ENGINE,
                    status: status.as_u16(),
                });
            }
            audio.extend_from_slice(&response.bytes().map_err(network)?);
        }

        if audio.is_empty() {
            return Err(EngineFailure::InvalidOutput {
                engine: ENGINE,
                message: "empty audio".to_string(),
            });
        }

        tracing::debug!(chunks = chunks.len(), bytes = audio.len(), "google tts synthesized");
        Ok(audio)
    }
}
