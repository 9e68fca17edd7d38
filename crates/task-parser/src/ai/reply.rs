//! Interpreting free-text model replies as task drafts.
//!
//! Models wrap JSON in prose or markdown fences often enough that the reply
//! is searched for the first well-formed JSON array instead of being parsed
//! whole. Both steps report failure as a value so the caller can fall back.

use serde_json::{Map, Value};

use crate::entities::{TaskDraft, TaskPriority};
use crate::errors::{ParserError, ParserResult};

/// Find the first substring of `text` that is a well-formed JSON array.
pub fn find_json_array(text: &str) -> Option<&str> {
    text.match_indices('[').find_map(|(start, _)| {
        let end = matching_bracket(text, start)?;
        let candidate = &text[start..=end];
        match serde_json::from_str::<Value>(candidate) {
            Ok(Value::Array(_)) => Some(candidate),
            _ => None,
        }
    })
}

/// Byte index of the `]` closing the `[` at `start`, skipping JSON strings.
fn matching_bracket(text: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &byte) in text.as_bytes()[start..].iter().enumerate() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parse a model reply into drafts.
///
/// Entries that are not objects or have no non-empty string `title` are
/// dropped. A well-formed empty array is a valid, empty answer.
pub fn parse_model_reply(text: &str) -> ParserResult<Vec<TaskDraft>> {
    let json = find_json_array(text).ok_or(ParserError::NoJsonArray)?;
    let entries: Vec<Value> = serde_json::from_str(json)?;

    let total = entries.len();
    let drafts: Vec<TaskDraft> = entries
        .iter()
        .filter_map(Value::as_object)
        .filter_map(draft_from_entry)
        .collect();

    if drafts.len() < total {
        tracing::debug!(
            kept = drafts.len(),
            dropped = total - drafts.len(),
            "Dropped malformed model entries"
        );
    }
    Ok(drafts)
}

fn draft_from_entry(entry: &Map<String, Value>) -> Option<TaskDraft> {
    let title = entry.get("title")?.as_str()?.trim();
    if title.is_empty() {
        return None;
    }
    let description = entry
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let priority = entry
        .get("priority")
        .and_then(Value::as_str)
        .map(TaskPriority::coerce)
        .unwrap_or_default();

    TaskDraft::from_parts(title, description, priority)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_bare_array() {
        assert_eq!(find_json_array(r#"[{"title":"a"}]"#), Some(r#"[{"title":"a"}]"#));
    }

    #[test]
    fn test_find_array_in_prose_and_fences() {
        let reply = "Sure! Here you go:\n```json\n[{\"title\": \"Buy milk\"}]\n```\nAnything else?";
        assert_eq!(find_json_array(reply), Some("[{\"title\": \"Buy milk\"}]"));
    }

    #[test]
    fn test_skips_malformed_bracket_runs() {
        let reply = r#"Tasks [see below]: [{"title": "Pay rent"}]"#;
        assert_eq!(find_json_array(reply), Some(r#"[{"title": "Pay rent"}]"#));
    }

    #[test]
    fn test_brackets_inside_strings() {
        let reply = r#"[{"title": "Fix ] bracket [ bug"}]"#;
        assert_eq!(find_json_array(reply), Some(reply));
    }

    #[test]
    fn test_escaped_quotes_inside_strings() {
        let reply = r#"[{"title": "Say \"hi]\" to Ann"}]"#;
        assert_eq!(find_json_array(reply), Some(reply));
    }

    #[test]
    fn test_no_array() {
        assert_eq!(find_json_array("no tasks here"), None);
        assert_eq!(find_json_array("[unterminated"), None);
        assert_eq!(find_json_array(r#"{"tasks": 1}"#), None);
    }

    #[test]
    fn test_parse_reply_coerces_fields() {
        let reply = r#"[
            {"title": "  Book flights  ", "description": " for May ", "priority": "HIGH"},
            {"title": "Renew passport", "priority": "whenever"},
            {"title": "Water plants", "priority": 3}
        ]"#;
        let drafts = parse_model_reply(reply).unwrap();
        assert_eq!(drafts.len(), 3);
        assert_eq!(drafts[0].title, "Book flights");
        assert_eq!(drafts[0].description, "for May");
        assert_eq!(drafts[0].priority, TaskPriority::High);
        assert_eq!(drafts[1].description, "");
        assert_eq!(drafts[1].priority, TaskPriority::Medium);
        assert_eq!(drafts[2].priority, TaskPriority::Medium);
    }

    #[test]
    fn test_parse_reply_drops_bad_entries() {
        let reply = r#"[{"title": ""}, {"description": "no title"}, "loose string", {"title": 5}, {"title": "Keep me"}]"#;
        let drafts = parse_model_reply(reply).unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].title, "Keep me");
    }

    #[test]
    fn test_parse_reply_empty_array() {
        assert!(parse_model_reply("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_reply_without_array() {
        assert!(matches!(
            parse_model_reply("I could not find any tasks."),
            Err(ParserError::NoJsonArray)
        ));
    }
}
