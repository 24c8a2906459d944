//! Deterministic mapping from form options to the natural-language prompt
//! sent to the model. Pure functions, total over the closed option enums.

use crate::constants::prompts::{MARKDOWN_FORMAT_INSTRUCTIONS, QUIZ_FORMAT_INSTRUCTIONS};
use crate::models::domain::options::{ContentType, GenerateOptions, Length};

pub fn build_prompt(options: &GenerateOptions) -> String {
    match options.content_type {
        ContentType::Quiz => quiz_prompt(options),
        ContentType::StudyGuide => study_guide_prompt(options),
    }
}

/// Question counts requested per length. Anything unrecognized at the DTO
/// boundary parses to `Standard`, so Standard's counts are the effective
/// fallback.
pub fn question_count_phrase(length: Length) -> &'static str {
    match length {
        Length::Brief => "3 multiple-choice questions and 2 short-answer questions",
        Length::Standard => "5 multiple-choice questions and 3 short-answer questions",
        Length::Detailed => "8 multiple-choice questions and 5 short-answer questions",
    }
}

pub fn detail_level_phrase(length: Length) -> &'static str {
    match length {
        Length::Brief => {
            "a concise summary focusing on the most critical key points, definitions, and concepts. Keep it high-level."
        }
        Length::Standard => {
            "a balanced overview that covers main topics, explains key terms with examples, and summarizes important processes or events."
        }
        Length::Detailed => {
            "a comprehensive and in-depth guide. It should include detailed explanations, multiple examples for each concept, historical context if applicable, and potential areas of confusion or common mistakes."
        }
    }
}

fn quiz_prompt(options: &GenerateOptions) -> String {
    let mut prompt = format!(
        "Generate a quiz about \"{}\" for a {} student at a {} difficulty level.\n\
         The tone of the quiz should be {}.\n\
         The quiz should include {}.\n\
         {}",
        options.topic,
        options.grade,
        options.difficulty,
        options.tone,
        question_count_phrase(options.length),
        QUIZ_FORMAT_INSTRUCTIONS,
    );

    append_instructions(&mut prompt, options);
    prompt
}

fn study_guide_prompt(options: &GenerateOptions) -> String {
    let mut prompt = format!(
        "Generate a study guide about \"{}\" for a {} student at a {} difficulty level.\n\
         The tone of the guide should be {}.\n\
         The guide should be structured with clear headings and bullet points.\n\
         Provide {}\n\
         {}",
        options.topic,
        options.grade,
        options.difficulty,
        options.tone,
        detail_level_phrase(options.length),
        MARKDOWN_FORMAT_INSTRUCTIONS,
    );

    append_instructions(&mut prompt, options);
    prompt
}

fn append_instructions(prompt: &mut String, options: &GenerateOptions) {
    if options.has_instructions() {
        prompt.push_str("\n\nAdditional Instructions: ");
        prompt.push_str(&options.instructions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::options::{Difficulty, Grade, Tone};

    fn options(content_type: ContentType, length: Length) -> GenerateOptions {
        GenerateOptions {
            topic: "Photosynthesis".to_string(),
            content_type,
            difficulty: Difficulty::Beginner,
            length,
            grade: Grade::Grade10,
            tone: Tone::Academic,
            instructions: String::new(),
        }
    }

    #[test]
    fn question_counts_per_length() {
        assert_eq!(
            question_count_phrase(Length::Brief),
            "3 multiple-choice questions and 2 short-answer questions"
        );
        assert_eq!(
            question_count_phrase(Length::Standard),
            "5 multiple-choice questions and 3 short-answer questions"
        );
        assert_eq!(
            question_count_phrase(Length::Detailed),
            "8 multiple-choice questions and 5 short-answer questions"
        );
    }

    #[test]
    fn quiz_prompt_embeds_topic_and_demographics() {
        let prompt = build_prompt(&options(ContentType::Quiz, Length::Standard));

        assert!(prompt.contains("Generate a quiz about \"Photosynthesis\""));
        assert!(prompt.contains("for a Grade 10 student"));
        assert!(prompt.contains("at a Beginner difficulty level"));
        assert!(prompt.contains("The tone of the quiz should be Academic."));
        assert!(prompt.contains("5 multiple-choice questions and 3 short-answer questions"));
        assert!(prompt.contains("strictly adheres to the provided schema"));
    }

    #[test]
    fn study_guide_prompt_requests_markdown() {
        let prompt = build_prompt(&options(ContentType::StudyGuide, Length::Detailed));

        assert!(prompt.contains("Generate a study guide about \"Photosynthesis\""));
        assert!(prompt.contains("a comprehensive and in-depth guide"));
        assert!(prompt.contains("Format the entire response in Markdown."));
    }

    #[test]
    fn instructions_appended_only_when_non_blank() {
        let mut opts = options(ContentType::Quiz, Length::Brief);
        let prompt = build_prompt(&opts);
        assert!(!prompt.contains("Additional Instructions:"));

        opts.instructions = "   ".to_string();
        let prompt = build_prompt(&opts);
        assert!(!prompt.contains("Additional Instructions:"));

        opts.instructions = "Focus on the historical context".to_string();
        let prompt = build_prompt(&opts);
        assert!(prompt.ends_with("Additional Instructions: Focus on the historical context"));
    }
}
