use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The quiz document the model is asked to emit. Wire names are camelCase to
/// match the declared response schema.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizPayload {
    /// The title of the quiz.
    pub title: String,
    /// An array of multiple-choice questions.
    pub multiple_choice: Vec<MultipleChoiceQuestion>,
    /// An array of short-answer questions.
    pub short_answer: Vec<ShortAnswerQuestion>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct MultipleChoiceQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct ShortAnswerQuestion {
    pub question: String,
    pub answer: String,
}

impl QuizPayload {
    /// Parses the raw model response. The response is not guaranteed to
    /// satisfy the declared schema; callers fall back to the raw text on
    /// failure. Option-list arity is not enforced.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Presentation form of a parsed quiz: numbered questions, lettered options,
/// answers carried alongside but revealed only through the session's
/// answer-visibility state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizView {
    pub title: String,
    pub multiple_choice: Vec<MultipleChoiceView>,
    pub short_answer: Vec<ShortAnswerView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MultipleChoiceView {
    pub number: usize,
    pub question: String,
    pub options: Vec<OptionView>,
    pub answer: String,
    pub key: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub letter: char,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShortAnswerView {
    pub number: usize,
    pub question: String,
    pub answer: String,
    pub key: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionSection {
    MultipleChoice,
    ShortAnswer,
}

impl QuestionSection {
    pub fn key_prefix(self) -> &'static str {
        match self {
            QuestionSection::MultipleChoice => "mc",
            QuestionSection::ShortAnswer => "sa",
        }
    }
}

/// Toggle-state key for one question, e.g. `mc-0` or `sa-2`.
pub fn answer_key(section: QuestionSection, index: usize) -> String {
    format!("{}-{}", section.key_prefix(), index)
}

pub fn parse_answer_key(key: &str) -> Option<(QuestionSection, usize)> {
    let (prefix, index) = key.split_once('-')?;
    let section = match prefix {
        "mc" => QuestionSection::MultipleChoice,
        "sa" => QuestionSection::ShortAnswer,
        _ => return None,
    };
    let index = index.parse().ok()?;
    Some((section, index))
}
