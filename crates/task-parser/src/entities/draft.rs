//! Task draft entity and priority levels.

use serde::{Deserialize, Serialize};

use crate::errors::ParserError;

/// Maximum number of characters in a draft title.
pub const MAX_TITLE_CHARS: usize = 100;

/// Minimum number of characters in a draft title.
pub const MIN_TITLE_CHARS: usize = 3;

/// Marker appended to titles cut at the budget.
const ELLIPSIS: &str = "...";

/// Task priority levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    /// Lenient coercion used for model replies: anything unrecognised is `Medium`.
    pub fn coerce(value: &str) -> Self {
        value.trim().parse().unwrap_or_default()
    }

    /// Get the priority as a lowercase string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TaskPriority {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" | "med" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParserError::InvalidPriority {
                priority: s.to_string(),
            }),
        }
    }
}

/// A task extracted from free text, before the caller persists it.
///
/// Drafts carry no identity or timestamps; the route layer owns that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    /// Short title, at most [`MAX_TITLE_CHARS`] characters
    pub title: String,

    /// Full source text when the title had to be cut, otherwise empty
    #[serde(default)]
    pub description: String,

    /// Inferred priority
    #[serde(default)]
    pub priority: TaskPriority,
}

impl TaskDraft {
    /// Build a draft from a source line, applying the title budget.
    ///
    /// Returns `None` when the resulting title is shorter than
    /// [`MIN_TITLE_CHARS`].
    pub fn from_line(line: &str, priority: TaskPriority) -> Option<Self> {
        let line = line.trim();
        let (title, description) = split_title(line);
        Self::checked(title, description, priority)
    }

    /// Build a draft from an already separated title and description.
    ///
    /// Over-long titles are cut; when that happens and no description was
    /// given, the full title moves into the description.
    pub fn from_parts(title: &str, description: &str, priority: TaskPriority) -> Option<Self> {
        let title = title.trim();
        let description = description.trim();

        if title.chars().count() <= MAX_TITLE_CHARS {
            return Self::checked(title.to_string(), description.to_string(), priority);
        }

        let description = if description.is_empty() {
            title
        } else {
            description
        };
        Self::checked(truncate_title(title), description.to_string(), priority)
    }

    fn checked(title: String, description: String, priority: TaskPriority) -> Option<Self> {
        let title = title.trim().to_string();
        if title.chars().count() < MIN_TITLE_CHARS {
            return None;
        }
        Some(Self {
            title,
            description,
            priority,
        })
    }
}

/// Split a line into `(title, description)` following the title budget.
fn split_title(line: &str) -> (String, String) {
    if line.chars().count() <= MAX_TITLE_CHARS {
        (strip_lone_period(line).to_string(), String::new())
    } else {
        (truncate_title(line), line.to_string())
    }
}

/// Strip one trailing period when it is the only period in the text.
fn strip_lone_period(text: &str) -> &str {
    match text.strip_suffix('.') {
        Some(rest) if !rest.contains('.') => rest,
        _ => text,
    }
}

/// Cut to the budget on a character boundary and append the ellipsis.
fn truncate_title(text: &str) -> String {
    let keep = MAX_TITLE_CHARS - ELLIPSIS.len();
    let mut title: String = text.chars().take(keep).collect();
    title.push_str(ELLIPSIS);
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_parse() {
        assert_eq!("HIGH".parse::<TaskPriority>().unwrap(), TaskPriority::High);
        assert_eq!("med".parse::<TaskPriority>().unwrap(), TaskPriority::Medium);
        assert!("critical".parse::<TaskPriority>().is_err());
    }

    #[test]
    fn test_priority_coerce() {
        assert_eq!(TaskPriority::coerce(" Low "), TaskPriority::Low);
        assert_eq!(TaskPriority::coerce("urgent"), TaskPriority::Medium);
        assert_eq!(TaskPriority::coerce(""), TaskPriority::Medium);
    }

    #[test]
    fn test_priority_serde() {
        let json = serde_json::to_string(&TaskPriority::High).unwrap();
        assert_eq!(json, "\"high\"");
    }

    #[test]
    fn test_short_line_keeps_title() {
        let draft = TaskDraft::from_line("Water the plants", TaskPriority::Medium).unwrap();
        assert_eq!(draft.title, "Water the plants");
        assert!(draft.description.is_empty());
    }

    #[test]
    fn test_lone_trailing_period_stripped() {
        let draft = TaskDraft::from_line("Call the dentist.", TaskPriority::Medium).unwrap();
        assert_eq!(draft.title, "Call the dentist");
    }

    #[test]
    fn test_trailing_period_kept_with_other_periods() {
        let draft = TaskDraft::from_line("Email Dr. Smith re. results.", TaskPriority::Medium)
            .unwrap();
        assert_eq!(draft.title, "Email Dr. Smith re. results.");
    }

    #[test]
    fn test_long_line_truncated() {
        let line = "x".repeat(150);
        let draft = TaskDraft::from_line(&line, TaskPriority::Low).unwrap();
        assert_eq!(draft.title.chars().count(), MAX_TITLE_CHARS);
        assert!(draft.title.ends_with("..."));
        assert_eq!(draft.description, line);
    }

    #[test]
    fn test_exactly_budget_not_truncated() {
        let line = "a".repeat(MAX_TITLE_CHARS);
        let draft = TaskDraft::from_line(&line, TaskPriority::Medium).unwrap();
        assert_eq!(draft.title, line);
        assert!(draft.description.is_empty());
    }

    #[test]
    fn test_one_over_budget_truncated() {
        let line = format!("{}b", "a".repeat(MAX_TITLE_CHARS));
        let draft = TaskDraft::from_line(&line, TaskPriority::Medium).unwrap();
        assert_eq!(draft.title, format!("{}...", "a".repeat(97)));
        assert_eq!(draft.description, line);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let line = "é".repeat(120);
        let draft = TaskDraft::from_line(&line, TaskPriority::Medium).unwrap();
        assert_eq!(draft.title.chars().count(), MAX_TITLE_CHARS);
    }

    #[test]
    fn test_too_short_title_rejected() {
        assert!(TaskDraft::from_line("Go.", TaskPriority::Medium).is_none());
        assert!(TaskDraft::from_line("  ", TaskPriority::Medium).is_none());
    }

    #[test]
    fn test_from_parts_moves_long_title_to_description() {
        let title = "t".repeat(130);
        let draft = TaskDraft::from_parts(&title, "", TaskPriority::High).unwrap();
        assert!(draft.title.ends_with("..."));
        assert_eq!(draft.description, title);

        let draft = TaskDraft::from_parts(&title, " details ", TaskPriority::High).unwrap();
        assert_eq!(draft.description, "details");
    }
}
