pub mod document;
pub mod metrics;
pub mod options;
pub mod outcome;
pub mod quiz;

pub use options::{ContentType, Difficulty, GenerateOptions, Grade, Length, Tone};
pub use outcome::{GenerationOutcome, RenderedContent};
pub use quiz::QuizPayload;
