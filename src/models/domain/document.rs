use serde::{Deserialize, Serialize};

/// One rendered line of a study guide. The markdown-subset renderer emits an
/// ordered sequence of these; it is not a general markdown parser.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading { level: u8, text: String },
    ListItem { text: String },
    Break,
    Paragraph { spans: Vec<Span> },
}

/// Inline run within a paragraph. Only `**bold**` and `*italic*` are
/// recognized, markers stripped.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Span {
    Text(String),
    Strong(String),
    Emphasis(String),
}
