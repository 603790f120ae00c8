use std::sync::Arc;

use media_domain::{DomainError, TranscriptSegment, Transcription};
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::WhisperAdapterConfig;

#[derive(Debug, Clone)]
struct DecodeSettings {
    language: Option<String>,
    temperature: f32,
    threads: usize,
}

pub(crate) struct WhisperRuntime {
    context: Arc<WhisperContext>,
    settings: DecodeSettings,
}

impl WhisperRuntime {
    pub(crate) fn load(config: &WhisperAdapterConfig) -> Result<Self, DomainError> {
        tracing::info!(model_path = %config.model_path, "loading whisper model");
        let context =
            WhisperContext::new_with_params(&config.model_path, WhisperContextParameters::default())
                .map_err(|err| {
                    DomainError::Transcription(format!(
                        "failed to load model `{}`: {err}",
                        config.model_path
                    ))
                })?;
        tracing::info!("whisper model loaded");

        Ok(Self {
            context: Arc::new(context),
            settings: DecodeSettings {
                language: config.decode_language(),
                temperature: config.temperature,
                threads: config.threads.max(1),
            },
        })
    }

    pub(crate) async fn transcribe(&self, samples: Vec<f32>) -> Result<Transcription, DomainError> {
        let context = Arc::clone(&self.context);
        let settings = self.settings.clone();
        tokio::task::spawn_blocking(move || run_full(&context, &settings, &samples))
            .await
            .map_err(|err| DomainError::internal_error(&format!("whisper task join error: {err}")))?
    }
}

fn centiseconds_to_secs(raw: i64) -> f64 {
    raw.max(0) as f64 / 100.0
}

fn run_full(
    context: &WhisperContext,
    settings: &DecodeSettings,
    samples: &[f32],
) -> Result<Transcription, DomainError> {
    let mut state = context
        .create_state()
        .map_err(|err| DomainError::Transcription(format!("failed to create state: {err}")))?;

    let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
    params.set_n_threads(i32::try_from(settings.threads).unwrap_or(i32::MAX));
    params.set_language(Some(settings.language.as_deref().unwrap_or("auto")));
    params.set_translate(false);
    params.set_temperature(settings.temperature);
    params.set_no_timestamps(false);
    params.set_single_segment(false);
    params.set_print_special(false);
    params.set_print_realtime(false);
    params.set_print_progress(false);
    params.set_print_timestamps(false);

    state
        .full(params, samples)
        .map_err(|err| DomainError::Transcription(format!("full decode failed: {err}")))?;

    let mut segments = Vec::new();
    for idx in 0..state.full_n_segments() {
        let Some(segment) = state.get_segment(idx) else {
            continue;
        };
        let text = segment
            .to_str_lossy()
            .map(|cow| cow.to_string())
            .unwrap_or_default();
        segments.push(TranscriptSegment {
            id: segments.len(),
            start: centiseconds_to_secs(segment.start_timestamp()),
            end: centiseconds_to_secs(segment.end_timestamp()),
            text,
        });
    }

    let language = whisper_rs::get_lang_str(state.full_lang_id_from_state())
        .map(str::to_string)
        .or_else(|| settings.language.clone())
        .unwrap_or_else(|| "unknown".to_string());

    tracing::debug!(
        segment_count = segments.len(),
        language = %language,
        "whisper decode complete"
    );
    Ok(Transcription::from_segments(language, segments))
}
