//! Line-oriented markdown-subset renderer for study guides. Classifies each
//! line by prefix and emits structured blocks; not a general markdown parser
//! (no nested lists, links, code blocks, or escaping). Inline HTML injection
//! hardening is a known follow-up for any client that renders spans as HTML.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::document::{Block, Span};

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold pattern"));
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("valid italic pattern"));

pub fn render(text: &str) -> Vec<Block> {
    text.lines().map(classify_line).collect()
}

fn classify_line(line: &str) -> Block {
    if let Some(rest) = line.strip_prefix("### ") {
        Block::Heading {
            level: 3,
            text: rest.to_string(),
        }
    } else if let Some(rest) = line.strip_prefix("## ") {
        Block::Heading {
            level: 2,
            text: rest.to_string(),
        }
    } else if let Some(rest) = line.strip_prefix("# ") {
        Block::Heading {
            level: 1,
            text: rest.to_string(),
        }
    } else if let Some(rest) = line
        .strip_prefix("* ")
        .or_else(|| line.strip_prefix("- "))
    {
        Block::ListItem {
            text: rest.to_string(),
        }
    } else if line.trim().is_empty() {
        Block::Break
    } else {
        Block::Paragraph {
            spans: inline_spans(line),
        }
    }
}

/// Bold first, then italics in the remaining runs, matching the substitution
/// order of the two regex replacements.
fn inline_spans(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut cursor = 0;
    for found in BOLD.find_iter(line) {
        if found.start() > cursor {
            italic_spans(&line[cursor..found.start()], &mut spans);
        }
        let inner = &line[found.start() + 2..found.end() - 2];
        spans.push(Span::Strong(inner.to_string()));
        cursor = found.end();
    }
    if cursor < line.len() {
        italic_spans(&line[cursor..], &mut spans);
    }
    spans
}

fn italic_spans(segment: &str, spans: &mut Vec<Span>) {
    let mut cursor = 0;
    for found in ITALIC.find_iter(segment) {
        if found.start() > cursor {
            spans.push(Span::Text(segment[cursor..found.start()].to_string()));
        }
        let inner = &segment[found.start() + 1..found.end() - 1];
        spans.push(Span::Emphasis(inner.to_string()));
        cursor = found.end();
    }
    if cursor < segment.len() {
        spans.push(Span::Text(segment[cursor..].to_string()));
    }
}
