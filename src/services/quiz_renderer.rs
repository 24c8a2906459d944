//! Presentation pass over a parsed quiz payload: 1-based numbering and
//! lettered options. Answer visibility lives in the session, not here.

use crate::models::domain::quiz::{
    answer_key, MultipleChoiceView, OptionView, QuestionSection, QuizPayload, QuizView,
    ShortAnswerView,
};

pub fn render(payload: &QuizPayload) -> QuizView {
    QuizView {
        title: payload.title.clone(),
        multiple_choice: payload
            .multiple_choice
            .iter()
            .enumerate()
            .map(|(index, question)| MultipleChoiceView {
                number: index + 1,
                question: question.question.clone(),
                options: question
                    .options
                    .iter()
                    .enumerate()
                    .map(|(option_index, text)| OptionView {
                        letter: option_letter(option_index),
                        text: text.clone(),
                    })
                    .collect(),
                answer: question.answer.clone(),
                key: answer_key(QuestionSection::MultipleChoice, index),
            })
            .collect(),
        short_answer: payload
            .short_answer
            .iter()
            .enumerate()
            .map(|(index, question)| ShortAnswerView {
                number: index + 1,
                question: question.question.clone(),
                answer: question.answer.clone(),
                key: answer_key(QuestionSection::ShortAnswer, index),
            })
            .collect(),
    }
}

// Wraps past 'z'; option lists are expected to hold 4 entries.
fn option_letter(index: usize) -> char {
    (b'a' + (index % 26) as u8) as char
}
