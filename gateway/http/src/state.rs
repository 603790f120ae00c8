use std::sync::Arc;

use gateway_application::{JobQueryUseCase, MediaToTextUseCase, TextToAudioUseCase};

#[derive(Clone)]
pub struct AppState {
    pub media_to_text: Arc<dyn MediaToTextUseCase>,
    pub text_to_audio: Arc<dyn TextToAudioUseCase>,
    pub jobs: Arc<dyn JobQueryUseCase>,
}
