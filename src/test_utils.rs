#[cfg(test)]
pub mod fixtures {
    use std::time::Duration;

    use chrono::Utc;

    use crate::models::domain::metrics::GenerationMetrics;
    use crate::models::domain::options::{
        ContentType, Difficulty, GenerateOptions, Grade, Length, Tone,
    };
    use crate::models::domain::outcome::GenerationOutcome;
    use crate::services::render_service;

    /// The end-to-end scenario options: Photosynthesis quiz, Standard length.
    pub fn quiz_options() -> GenerateOptions {
        GenerateOptions {
            topic: "Photosynthesis".to_string(),
            content_type: ContentType::Quiz,
            difficulty: Difficulty::Beginner,
            length: Length::Standard,
            grade: Grade::Grade10,
            tone: Tone::Academic,
            instructions: String::new(),
        }
    }

    pub fn study_guide_options() -> GenerateOptions {
        GenerateOptions {
            content_type: ContentType::StudyGuide,
            ..quiz_options()
        }
    }

    /// A conforming quiz response with the requested question counts.
    pub fn valid_quiz_json(multiple_choice: usize, short_answer: usize) -> String {
        let mc: Vec<serde_json::Value> = (0..multiple_choice)
            .map(|i| {
                serde_json::json!({
                    "question": format!("Question {}?", i + 1),
                    "options": ["first", "second", "third", "fourth"],
                    "answer": "first"
                })
            })
            .collect();
        let sa: Vec<serde_json::Value> = (0..short_answer)
            .map(|i| {
                serde_json::json!({
                    "question": format!("Short question {}?", i + 1),
                    "answer": "a concise answer"
                })
            })
            .collect();

        serde_json::json!({
            "title": "Photosynthesis Quiz",
            "multipleChoice": mc,
            "shortAnswer": sa
        })
        .to_string()
    }

    pub fn metrics() -> GenerationMetrics {
        GenerationMetrics {
            elapsed: Duration::from_millis(1200),
            completed_at: Utc::now(),
        }
    }

    pub fn quiz_outcome(raw: String) -> GenerationOutcome {
        let render = render_service::render(ContentType::Quiz, &raw);
        GenerationOutcome {
            options: quiz_options(),
            raw,
            rendered: render.rendered,
            warning: render.warning,
            metrics: metrics(),
        }
    }

    pub fn study_guide_outcome(raw: &str) -> GenerationOutcome {
        let render = render_service::render(ContentType::StudyGuide, raw);
        GenerationOutcome {
            options: study_guide_options(),
            raw: raw.to_string(),
            rendered: render.rendered,
            warning: render.warning,
            metrics: metrics(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::outcome::RenderedContent;

    #[test]
    fn test_fixtures_quiz_json_counts() {
        let raw = valid_quiz_json(5, 3);
        let outcome = quiz_outcome(raw);

        match outcome.rendered {
            RenderedContent::Quiz { quiz } => {
                assert_eq!(quiz.multiple_choice.len(), 5);
                assert_eq!(quiz.short_answer.len(), 3);
            }
            other => panic!("expected quiz rendering, got {other:?}"),
        }
        assert!(outcome.warning.is_none());
    }

    #[test]
    fn test_fixtures_options_topic() {
        assert_eq!(quiz_options().topic, "Photosynthesis");
        assert_eq!(
            study_guide_options().content_type,
            crate::models::domain::options::ContentType::StudyGuide
        );
    }
}
