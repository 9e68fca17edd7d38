//! Task extractor: classification and priority inference for one line.

use crate::entities::{TaskDraft, TaskPriority};

use super::vocabulary::{
    ACTION_VERBS, HIGH_PRIORITY_KEYWORDS, IMPERATIVE_CUES, LOW_PRIORITY_KEYWORDS,
};

/// Lines longer than this are accepted even without an action or imperative cue.
const ACCEPT_MIN_CHARS: usize = 10;

/// Whether the first word starts with a known action verb.
pub fn is_action(line: &str) -> bool {
    line.split_whitespace()
        .next()
        .map(str::to_lowercase)
        .is_some_and(|word| ACTION_VERBS.iter().any(|verb| word.starts_with(verb)))
}

/// Whether the line reads as an instruction or obligation.
pub fn is_imperative(line: &str) -> bool {
    if line.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
        return true;
    }
    let lower = line.to_lowercase();
    IMPERATIVE_CUES.iter().any(|cue| lower.contains(cue))
}

/// Infer a priority from keywords anywhere in the line. High wins over low.
pub fn infer_priority(line: &str) -> TaskPriority {
    let lower = line.to_lowercase();
    if HIGH_PRIORITY_KEYWORDS.iter().any(|k| lower.contains(k)) {
        TaskPriority::High
    } else if LOW_PRIORITY_KEYWORDS.iter().any(|k| lower.contains(k)) {
        TaskPriority::Low
    } else {
        TaskPriority::Medium
    }
}

/// Turn one cleaned line or sentence into a draft, if it reads like a task.
pub fn extract_task(line: &str) -> Option<TaskDraft> {
    let line = line.trim();
    let accepted =
        is_action(line) || is_imperative(line) || line.chars().count() > ACCEPT_MIN_CHARS;
    if !accepted {
        return None;
    }
    TaskDraft::from_line(line, infer_priority(line))
}
