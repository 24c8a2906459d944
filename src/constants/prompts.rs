//! Fixed prompt fragments shared by the two templates.

pub const QUIZ_FORMAT_INSTRUCTIONS: &str = "For multiple-choice questions, provide 4 options with only one correct answer.\nFor short-answer questions, provide a concise, correct answer.\nReturn the output as a single JSON object that strictly adheres to the provided schema. Do not include any markdown formatting like ```json.";

pub const MARKDOWN_FORMAT_INSTRUCTIONS: &str = "Format the entire response in Markdown. Use headings (#, ##), bold text, italics, and lists as appropriate to create a well-organized and readable document.";

/// Trivial zero-temperature prompt used by the connectivity probe.
pub const PING_PROMPT: &str = "Say \"Hello World\"";
