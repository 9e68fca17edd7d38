//! Heuristic task extraction from free text.
//!
//! The pipeline runs in two passes:
//! - a line pass: normalize each line, drop non-task lines, extract drafts
//! - a sentence pass, only when the line pass found nothing: split the whole
//!   text into sentences and extract from each one directly
//!
//! Everything here is pure and synchronous.

pub mod extract;
pub mod filter;
pub mod normalize;
pub mod sentences;
pub mod vocabulary;

use std::collections::HashSet;

use serde_json::Value;

use crate::entities::{TaskDraft, MIN_TITLE_CHARS};

pub use extract::{extract_task, infer_priority, is_action, is_imperative};
pub use filter::{is_non_task, rejection, Rejection};
pub use normalize::normalize_line;
pub use sentences::split_sentences;

/// Extract task drafts from free text.
///
/// Never fails; text with nothing task-like yields an empty vector.
pub fn parse(text: &str) -> Vec<TaskDraft> {
    let drafts = extract_from_lines(text);
    if !drafts.is_empty() {
        return drafts;
    }

    tracing::debug!("Line pass found no tasks, falling back to sentences");
    extract_from_sentences(text)
}

/// Extract drafts from a JSON body field.
///
/// Missing, `null` and non-string values yield an empty vector.
pub fn parse_value(value: Option<&Value>) -> Vec<TaskDraft> {
    match value {
        Some(Value::String(text)) => parse(text),
        Some(other) => {
            tracing::debug!(kind = value_kind(other), "Ignoring non-string text value");
            Vec::new()
        }
        None => Vec::new(),
    }
}

/// Line pass: one draft per surviving, distinct line.
pub fn extract_from_lines(text: &str) -> Vec<TaskDraft> {
    let mut seen = HashSet::new();
    let mut drafts = Vec::new();

    for raw in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if !seen.insert(raw) {
            continue;
        }

        let line = normalize_line(raw);
        if line.chars().count() < MIN_TITLE_CHARS {
            continue;
        }
        if let Some(reason) = rejection(&line) {
            tracing::trace!(line = %line, %reason, "Rejected line");
            continue;
        }
        if let Some(draft) = extract_task(&line) {
            drafts.push(draft);
        }
    }

    tracing::debug!(tasks = drafts.len(), "Line pass complete");
    drafts
}

/// Sentence pass: extract from each sentence without normalizing or filtering.
pub fn extract_from_sentences(text: &str) -> Vec<TaskDraft> {
    let drafts: Vec<TaskDraft> = split_sentences(text)
        .into_iter()
        .filter_map(extract_task)
        .collect();

    tracing::debug!(tasks = drafts.len(), "Sentence pass complete");
    drafts
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
