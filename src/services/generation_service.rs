use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;

use crate::constants::prompts::PING_PROMPT;
use crate::errors::{AppError, AppResult};
use crate::models::domain::metrics::GenerationMetrics;
use crate::models::domain::options::{ContentType, GenerateOptions};
use crate::models::domain::outcome::GenerationOutcome;
use crate::services::model_service::{quiz_response_schema, ModelBackend, ModelRequest};
use crate::services::prompt_builder::build_prompt;
use crate::services::render_service::{self, RenderOutcome};
use crate::services::session::ContentSession;

/// Orchestrates one generate-and-display cycle: validate, gate on the busy
/// flag, build the prompt, make the single outbound call, render, store.
pub struct GenerationService {
    backend: Arc<dyn ModelBackend>,
    session: Arc<ContentSession>,
}

impl GenerationService {
    pub fn new(backend: Arc<dyn ModelBackend>, session: Arc<ContentSession>) -> Self {
        Self { backend, session }
    }

    pub async fn generate(&self, options: GenerateOptions) -> AppResult<GenerationOutcome> {
        // A blank topic is a no-op: rejected before the busy flag is taken,
        // leaving prior state untouched.
        if options.topic.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Topic must not be empty".to_string(),
            ));
        }

        if !self.session.try_begin() {
            return Err(AppError::Busy);
        }
        self.session.clear().await;

        let request = match options.content_type {
            ContentType::Quiz => ModelRequest::structured(
                build_prompt(&options),
                options.content_type.temperature(),
                quiz_response_schema(),
            ),
            ContentType::StudyGuide => ModelRequest::text(
                build_prompt(&options),
                options.content_type.temperature(),
            ),
        };

        let started = Instant::now();
        let result = self.backend.generate(request).await;
        let metrics = GenerationMetrics {
            elapsed: started.elapsed(),
            completed_at: Utc::now(),
        };

        let raw = match result {
            Ok(raw) => raw,
            Err(err) => {
                self.session.release();
                return Err(err);
            }
        };

        let RenderOutcome { rendered, warning } =
            render_service::render(options.content_type, &raw);
        let outcome = GenerationOutcome {
            options,
            raw,
            rendered,
            warning,
            metrics,
        };
        self.session.complete(outcome.clone()).await;
        Ok(outcome)
    }

    /// Connectivity probe: one trivial zero-temperature call, text discarded.
    pub async fn ping(&self) -> AppResult<()> {
        self.backend
            .generate(ModelRequest::text(PING_PROMPT, 0.0))
            .await
            .map(|_| ())
    }
}
