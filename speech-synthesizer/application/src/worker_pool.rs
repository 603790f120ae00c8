use std::sync::Arc;

use speech_domain::EngineFailure;
use tokio::sync::Semaphore;

/// Caps the number of engine calls running at once. Work runs on the blocking
/// thread pool while a permit is held.
#[derive(Debug, Clone)]
pub struct SynthesisWorkerPool {
    permits: Arc<Semaphore>,
    size: usize,
}

impl SynthesisWorkerPool {
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            permits: Arc::new(Semaphore::new(size)),
            size,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    pub async fn run<F, T>(&self, job: F) -> Result<T, EngineFailure>
    where
        F: FnOnce() -> Result<T, EngineFailure> + Send + 'static,
        T: Send + 'static,
    {
        let permit = Arc::clone(&self.permits)
            .acquire_owned()
            .await
            .map_err(|err| EngineFailure::Worker(err.to_string()))?;

        tokio::task::spawn_blocking(move || {
            let _permit = permit;
            job()
        })
        .await
        .map_err(|err| EngineFailure::Worker(err.to_string()))?
    }
}
