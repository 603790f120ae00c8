use std::sync::Arc;

use media_application::ProcessMediaUseCase;

#[derive(Clone)]
pub struct AppState {
    pub usecase: Arc<dyn ProcessMediaUseCase>,
}
