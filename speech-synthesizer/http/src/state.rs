use std::sync::Arc;

use speech_application::SpeechUseCase;

#[derive(Clone)]
pub struct AppState {
    pub usecase: Arc<dyn SpeechUseCase>,
}
