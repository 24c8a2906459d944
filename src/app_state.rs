use std::sync::Arc;

use crate::{
    config::Config,
    services::{model_service::ModelBackend, ContentSession, GeminiClient, GenerationService},
};

#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
    pub session: Arc<ContentSession>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let backend = Arc::new(GeminiClient::new(&config));
        Self::with_backend(config, backend)
    }

    /// Seam for tests and alternative backends.
    pub fn with_backend(config: Config, backend: Arc<dyn ModelBackend>) -> Self {
        let session = Arc::new(ContentSession::new());
        let generation_service = Arc::new(GenerationService::new(backend, Arc::clone(&session)));

        Self {
            generation_service,
            session,
            config: Arc::new(config),
        }
    }
}
