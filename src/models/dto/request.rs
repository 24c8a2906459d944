use serde::Deserialize;
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::options::{
    ContentType, Difficulty, GenerateOptions, Grade, Length, Tone,
};

/// Form submission for one generation cycle. Option fields arrive as the
/// form's wire strings and are parsed into the closed enums; anything
/// unrecognized falls back to that option's default, except the content type,
/// which decides the whole output shape and therefore must be valid.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequestDto {
    #[validate(length(min = 1, max = 200, message = "Topic must be between 1 and 200 characters"))]
    pub topic: String,

    pub content_type: String,

    #[serde(default)]
    pub difficulty: String,

    #[serde(default)]
    pub length: String,

    #[serde(default)]
    pub grade: String,

    #[serde(default)]
    pub tone: String,

    #[serde(default)]
    pub instructions: String,
}

impl GenerateContentRequestDto {
    pub fn into_options(self) -> AppResult<GenerateOptions> {
        let content_type = parse_content_type(&self.content_type).ok_or_else(|| {
            AppError::ValidationError(format!("Unknown content type '{}'", self.content_type))
        })?;

        Ok(GenerateOptions {
            topic: self.topic,
            content_type,
            difficulty: parse_difficulty(&self.difficulty),
            length: parse_length(&self.length),
            grade: parse_grade(&self.grade),
            tone: parse_tone(&self.tone),
            instructions: self.instructions,
        })
    }
}

fn parse_content_type(raw: &str) -> Option<ContentType> {
    match raw {
        "study_guide" => Some(ContentType::StudyGuide),
        "quiz" => Some(ContentType::Quiz),
        _ => None,
    }
}

fn parse_difficulty(raw: &str) -> Difficulty {
    match raw {
        "Beginner" => Difficulty::Beginner,
        "Intermediate" => Difficulty::Intermediate,
        "Advanced" => Difficulty::Advanced,
        _ => Difficulty::default(),
    }
}

fn parse_length(raw: &str) -> Length {
    match raw {
        "Brief" => Length::Brief,
        "Standard" => Length::Standard,
        "Detailed" => Length::Detailed,
        _ => Length::default(),
    }
}

fn parse_grade(raw: &str) -> Grade {
    match raw {
        "Grade 10" => Grade::Grade10,
        "Grade 11" => Grade::Grade11,
        "Grade 12" => Grade::Grade12,
        _ => Grade::default(),
    }
}

fn parse_tone(raw: &str) -> Tone {
    match raw {
        "Academic" => Tone::Academic,
        "Simple" => Tone::Simple,
        "Conversational" => Tone::Conversational,
        _ => Tone::default(),
    }
}
