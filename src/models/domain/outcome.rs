use serde::Serialize;

use crate::models::domain::document::Block;
use crate::models::domain::metrics::GenerationMetrics;
use crate::models::domain::options::{ContentType, GenerateOptions};
use crate::models::domain::quiz::QuizView;

/// The rendering strategy actually applied to a response. `Raw` is the
/// non-fatal fallback when a quiz response fails the shape check.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedContent {
    StudyGuide { blocks: Vec<Block> },
    Quiz { quiz: QuizView },
    Raw { text: String },
}

/// Everything one completed generation cycle produced. Replaced wholesale on
/// the next submission; never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationOutcome {
    pub options: GenerateOptions,
    pub raw: String,
    pub rendered: RenderedContent,
    pub warning: Option<String>,
    pub metrics: GenerationMetrics,
}

impl GenerationOutcome {
    pub fn content_type(&self) -> ContentType {
        self.options.content_type
    }
}
