use std::fmt;

use serde::{Deserialize, Serialize};

/// The two supported output shapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    #[default]
    StudyGuide,
    Quiz,
}

impl ContentType {
    pub const ALL: [ContentType; 2] = [ContentType::StudyGuide, ContentType::Quiz];

    /// Fixed sampling temperature per content type.
    pub fn temperature(self) -> f32 {
        match self {
            ContentType::StudyGuide => 0.6,
            ContentType::Quiz => 0.7,
        }
    }

    pub fn file_extension(self) -> &'static str {
        match self {
            ContentType::StudyGuide => "md",
            ContentType::Quiz => "json",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ContentType::StudyGuide => "text/markdown",
            ContentType::Quiz => "application/json",
        }
    }

    /// Wire value accepted from the form client.
    pub fn wire_value(self) -> &'static str {
        match self {
            ContentType::StudyGuide => "study_guide",
            ContentType::Quiz => "quiz",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentType::StudyGuide => "Study Guide",
            ContentType::Quiz => "Quiz",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "Beginner"),
            Difficulty::Intermediate => write!(f, "Intermediate"),
            Difficulty::Advanced => write!(f, "Advanced"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Grade {
    #[default]
    Grade10,
    Grade11,
    Grade12,
}

impl Grade {
    pub const ALL: [Grade; 3] = [Grade::Grade10, Grade::Grade11, Grade::Grade12];
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::Grade10 => write!(f, "Grade 10"),
            Grade::Grade11 => write!(f, "Grade 11"),
            Grade::Grade12 => write!(f, "Grade 12"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Tone {
    #[default]
    Academic,
    Simple,
    Conversational,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Academic, Tone::Simple, Tone::Conversational];
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tone::Academic => write!(f, "Academic"),
            Tone::Simple => write!(f, "Simple"),
            Tone::Conversational => write!(f, "Conversational"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Length {
    Brief,
    #[default]
    Standard,
    Detailed,
}

impl Length {
    pub const ALL: [Length; 3] = [Length::Brief, Length::Standard, Length::Detailed];
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Brief => write!(f, "Brief"),
            Length::Standard => write!(f, "Standard"),
            Length::Detailed => write!(f, "Detailed"),
        }
    }
}

/// Everything the form collects for one generation cycle. Immutable once
/// handed to the generation call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
    pub topic: String,
    pub content_type: ContentType,
    pub difficulty: Difficulty,
    pub length: Length,
    pub grade: Grade,
    pub tone: Tone,
    pub instructions: String,
}

impl GenerateOptions {
    pub fn has_instructions(&self) -> bool {
        !self.instructions.trim().is_empty()
    }
}
