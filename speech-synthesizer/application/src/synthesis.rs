use std::sync::Arc;

use speech_domain::{
    EngineFailure, SpeechEngine, SpeechRequest, SynthesisError, SynthesizedAudio,
};

use crate::SynthesisWorkerPool;

/// Outcome of one synthesis request.
#[derive(Debug, Clone)]
pub enum SynthesisAttempt {
    Primary(SynthesizedAudio),
    Fallback {
        audio: SynthesizedAudio,
        primary_failure: EngineFailure,
    },
}

impl SynthesisAttempt {
    pub fn audio(&self) -> &SynthesizedAudio {
        match self {
            SynthesisAttempt::Primary(audio) => audio,
            SynthesisAttempt::Fallback { audio, .. } => audio,
        }
    }

    pub fn into_audio(self) -> SynthesizedAudio {
        match self {
            SynthesisAttempt::Primary(audio) => audio,
            SynthesisAttempt::Fallback { audio, .. } => audio,
        }
    }

    pub fn used_fallback(&self) -> bool {
        matches!(self, SynthesisAttempt::Fallback { .. })
    }
}

/// Primary engine first; on any failure the fallback runs exactly once.
pub struct Synthesizer {
    primary: Arc<dyn SpeechEngine>,
    fallback: Arc<dyn SpeechEngine>,
    pool: SynthesisWorkerPool,
}

impl Synthesizer {
    pub fn new(
        primary: Arc<dyn SpeechEngine>,
        fallback: Arc<dyn SpeechEngine>,
        pool: SynthesisWorkerPool,
    ) -> Self {
        Self {
            primary,
            fallback,
            pool,
        }
    }

    pub async fn synthesize(
        &self,
        request: &SpeechRequest,
    ) -> Result<SynthesisAttempt, SynthesisError> {
        let primary_failure = match self.attempt(&self.primary, request).await {
            Ok(audio) => return Ok(SynthesisAttempt::Primary(audio)),
            Err(failure) => failure,
        };

        tracing::warn!(
            primary = self.primary.name(),
            fallback = self.fallback.name(),
            error = %primary_failure,
            "primary engine failed; falling back"
        );

        match self.attempt(&self.fallback, request).await {
            Ok(audio) => Ok(SynthesisAttempt::Fallback {
                audio,
                primary_failure,
            }),
            Err(fallback) => Err(SynthesisError::Exhausted {
                primary: primary_failure,
                fallback,
            }),
        }
    }

    async fn attempt(
        &self,
        engine: &Arc<dyn SpeechEngine>,
        request: &SpeechRequest,
    ) -> Result<SynthesizedAudio, EngineFailure> {
        let worker_engine = Arc::clone(engine);
        let worker_request = request.clone();
        let bytes = self
            .pool
            .run(move || worker_engine.synthesize(&worker_request))
            .await?;

        tracing::debug!(engine = engine.name(), bytes = bytes.len(), "engine produced audio");
        Ok(SynthesizedAudio {
            bytes,
            format: engine.output_format(),
            engine: engine.name(),
        })
    }
}
