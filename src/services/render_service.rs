//! Render dispatch over the raw response text. A quiz response that fails
//! the shape check downgrades to the raw fallback with a visible warning
//! instead of failing the request.

use crate::models::domain::options::ContentType;
use crate::models::domain::outcome::RenderedContent;
use crate::models::domain::quiz::QuizPayload;
use crate::services::{markdown_renderer, quiz_renderer};

pub const QUIZ_FORMAT_WARNING: &str =
    "Could not render quiz. The AI returned an invalid format. Showing raw output instead.";

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOutcome {
    pub rendered: RenderedContent,
    pub warning: Option<String>,
}

pub fn render(content_type: ContentType, raw: &str) -> RenderOutcome {
    match content_type {
        ContentType::StudyGuide => RenderOutcome {
            rendered: RenderedContent::StudyGuide {
                blocks: markdown_renderer::render(raw),
            },
            warning: None,
        },
        ContentType::Quiz => match QuizPayload::parse(raw) {
            Ok(payload) => RenderOutcome {
                rendered: RenderedContent::Quiz {
                    quiz: quiz_renderer::render(&payload),
                },
                warning: None,
            },
            Err(err) => {
                log::warn!("failed to parse quiz response: {err}");
                RenderOutcome {
                    rendered: RenderedContent::Raw {
                        text: raw.to_string(),
                    },
                    warning: Some(QUIZ_FORMAT_WARNING.to_string()),
                }
            }
        },
    }
}
