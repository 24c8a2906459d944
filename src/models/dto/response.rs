use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::options::{ContentType, Difficulty, Grade, Length, Tone};
use crate::models::domain::outcome::{GenerationOutcome, RenderedContent};

#[derive(Debug, Serialize)]
pub struct GeneratedContentDto {
    pub topic: String,
    pub content_type: ContentType,
    pub raw: String,
    pub rendered: RenderedContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub revealed_answers: Vec<String>,
    pub metrics: MetricsDto,
}

#[derive(Debug, Serialize)]
pub struct MetricsDto {
    /// Elapsed seconds with two decimals, as displayed by the client.
    pub generation_time: String,
    pub completed_at: DateTime<Utc>,
}

impl GeneratedContentDto {
    pub fn from_outcome(outcome: GenerationOutcome, revealed_answers: Vec<String>) -> Self {
        Self {
            topic: outcome.options.topic.clone(),
            content_type: outcome.options.content_type,
            raw: outcome.raw,
            rendered: outcome.rendered,
            warning: outcome.warning,
            revealed_answers,
            metrics: MetricsDto {
                generation_time: outcome.metrics.display_seconds(),
                completed_at: outcome.metrics.completed_at,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CopyContentDto {
    pub text: String,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CopyLabelDto {
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ToggleAnswerDto {
    pub key: String,
    pub revealed: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ModelHealthDto {
    pub status: &'static str,
    pub model: String,
}

#[derive(Debug, Serialize)]
pub struct OptionEntryDto {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct OptionDefaultsDto {
    pub content_type: String,
    pub difficulty: String,
    pub length: String,
    pub grade: String,
    pub tone: String,
}

/// Selectable values and defaults for every form option, so the browser form
/// stays in lockstep with the server's closed variants.
#[derive(Debug, Serialize)]
pub struct OptionsCatalogDto {
    pub content_types: Vec<OptionEntryDto>,
    pub difficulties: Vec<OptionEntryDto>,
    pub lengths: Vec<OptionEntryDto>,
    pub grades: Vec<OptionEntryDto>,
    pub tones: Vec<OptionEntryDto>,
    pub defaults: OptionDefaultsDto,
}

impl OptionsCatalogDto {
    pub fn catalog() -> Self {
        Self {
            content_types: ContentType::ALL
                .iter()
                .map(|ct| OptionEntryDto {
                    value: ct.wire_value().to_string(),
                    label: ct.label().to_string(),
                })
                .collect(),
            difficulties: display_entries(&Difficulty::ALL),
            lengths: display_entries(&Length::ALL),
            grades: display_entries(&Grade::ALL),
            tones: display_entries(&Tone::ALL),
            defaults: OptionDefaultsDto {
                content_type: ContentType::default().wire_value().to_string(),
                difficulty: Difficulty::default().to_string(),
                length: Length::default().to_string(),
                grade: Grade::default().to_string(),
                tone: Tone::default().to_string(),
            },
        }
    }
}

fn display_entries<T: ToString>(values: &[T]) -> Vec<OptionEntryDto> {
    values
        .iter()
        .map(|value| OptionEntryDto {
            value: value.to_string(),
            label: value.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    #[test]
    fn dto_carries_raw_text_untouched() {
        let outcome = fixtures::quiz_outcome(fixtures::valid_quiz_json(2, 1));
        let raw = outcome.raw.clone();

        let dto = GeneratedContentDto::from_outcome(outcome, Vec::new());

        assert_eq!(dto.raw, raw);
        assert_eq!(dto.content_type, ContentType::Quiz);
        assert!(dto.revealed_answers.is_empty());
    }

    #[test]
    fn warning_is_omitted_from_json_when_absent() {
        let outcome = fixtures::study_guide_outcome("# Title");
        let dto = GeneratedContentDto::from_outcome(outcome, Vec::new());
        let json = serde_json::to_value(&dto).expect("dto should serialize");

        assert!(json.get("warning").is_none());
        assert_eq!(json["content_type"], "study_guide");
    }

    #[test]
    fn catalog_lists_every_variant_with_defaults() {
        let catalog = OptionsCatalogDto::catalog();

        assert_eq!(catalog.content_types.len(), 2);
        assert_eq!(catalog.difficulties.len(), 3);
        assert_eq!(catalog.lengths.len(), 3);
        assert_eq!(catalog.grades.len(), 3);
        assert_eq!(catalog.tones.len(), 3);
        assert_eq!(catalog.defaults.content_type, "study_guide");
        assert_eq!(catalog.defaults.length, "Standard");
        assert_eq!(catalog.defaults.grade, "Grade 10");
    }
}
