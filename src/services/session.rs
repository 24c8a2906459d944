//! Coordinator-owned state for the single generate-and-display cycle: the
//! busy flag, the last outcome, per-question answer visibility, and the
//! copy-confirmation window. At most one generation is outstanding; the busy
//! flag is the only gate, no request is ever cancelled.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::errors::{AppError, AppResult};
use crate::models::domain::outcome::{GenerationOutcome, RenderedContent};
use crate::models::domain::quiz::{parse_answer_key, QuestionSection};

pub const COPY_LABEL_IDLE: &str = "Copy to Clipboard";
pub const COPY_LABEL_CONFIRMED: &str = "Copied!";
pub const COPY_CONFIRMATION_WINDOW: Duration = Duration::from_secs(2);

pub const NO_CONTENT_MESSAGE: &str = "No content has been generated yet";

#[derive(Default)]
struct SessionInner {
    outcome: Option<GenerationOutcome>,
    revealed: HashSet<String>,
    copied_at: Option<Instant>,
}

#[derive(Default)]
pub struct ContentSession {
    busy: AtomicBool,
    inner: RwLock<SessionInner>,
}

impl ContentSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the busy flag. Returns false when a generation is already in
    /// flight; the caller must not touch session state in that case.
    pub fn try_begin(&self) -> bool {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Overwrites all prior result, warning, metrics, and visibility state.
    /// Called at the start of each accepted cycle, before the outbound call.
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        *inner = SessionInner::default();
    }

    /// Stores the outcome of a finished cycle and releases the busy flag.
    pub async fn complete(&self, outcome: GenerationOutcome) {
        let mut inner = self.inner.write().await;
        inner.outcome = Some(outcome);
        self.busy.store(false, Ordering::Release);
    }

    /// Releases the busy flag after a failed cycle. The cleared state stands;
    /// recovery is a fresh submission.
    pub fn release(&self) {
        self.busy.store(false, Ordering::Release);
    }

    pub async fn outcome(&self) -> Option<GenerationOutcome> {
        self.inner.read().await.outcome.clone()
    }

    pub async fn revealed_answers(&self) -> Vec<String> {
        let inner = self.inner.read().await;
        let mut keys: Vec<String> = inner.revealed.iter().cloned().collect();
        keys.sort();
        keys
    }

    /// Flips visibility for exactly one question's answer and returns the new
    /// state. Keys are independent; toggling one never affects another.
    pub async fn toggle_answer(&self, key: &str) -> AppResult<bool> {
        let (section, index) = parse_answer_key(key).ok_or_else(|| {
            AppError::ValidationError(format!("Malformed answer key '{key}'"))
        })?;

        let mut inner = self.inner.write().await;
        let question_count = {
            let outcome = inner
                .outcome
                .as_ref()
                .ok_or_else(|| AppError::NotFound(NO_CONTENT_MESSAGE.to_string()))?;
            let quiz = match &outcome.rendered {
                RenderedContent::Quiz { quiz } => quiz,
                _ => {
                    return Err(AppError::NotFound(
                        "No quiz is currently rendered".to_string(),
                    ))
                }
            };
            match section {
                QuestionSection::MultipleChoice => quiz.multiple_choice.len(),
                QuestionSection::ShortAnswer => quiz.short_answer.len(),
            }
        };

        if index >= question_count {
            return Err(AppError::ValidationError(format!(
                "Answer key '{key}' is out of range"
            )));
        }

        let revealed = if inner.revealed.remove(key) {
            false
        } else {
            inner.revealed.insert(key.to_string());
            true
        };
        Ok(revealed)
    }

    /// Records a clipboard copy; the confirmation label reverts on its own
    /// after [`COPY_CONFIRMATION_WINDOW`].
    pub async fn note_copied(&self) {
        let mut inner = self.inner.write().await;
        inner.copied_at = Some(Instant::now());
    }

    pub async fn copy_label(&self) -> &'static str {
        let inner = self.inner.read().await;
        label_for(inner.copied_at, Instant::now())
    }
}

fn label_for(copied_at: Option<Instant>, now: Instant) -> &'static str {
    match copied_at {
        Some(at) if now.duration_since(at) < COPY_CONFIRMATION_WINDOW => COPY_LABEL_CONFIRMED,
        _ => COPY_LABEL_IDLE,
    }
}
