//! Extract-tasks prompt template.
//!
//! Asks the model to turn pasted free text into a JSON array of tasks.

use serde::Serialize;

use super::PromptTemplate;

/// Context for the extract-tasks prompt.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractTasksContext {
    /// Raw text pasted by the user
    pub text: String,
}

impl ExtractTasksContext {
    /// Create a context for the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Get the extract-tasks template.
pub fn template() -> PromptTemplate {
    PromptTemplate::new("extract-tasks", SYSTEM_PROMPT, USER_PROMPT)
}

const SYSTEM_PROMPT: &str = r"You are a task extraction assistant. You read notes, emails, meeting minutes and lists that people paste in, and you pull out the concrete things they need to do.

Rules:
1. Only include actionable items. Skip headings, dates, contact details, links and commentary.
2. Keep each title short and action-oriented (under 100 characters).
3. Put any extra context in the description; leave it empty when there is none.
4. Use priority 'high' for urgent or important items, 'low' for optional or someday items, and 'medium' otherwise.
5. Preserve the order in which tasks appear in the text.";

const USER_PROMPT: &str = r#"Extract the tasks from the following text:

---
{{text}}
---

Respond with ONLY a JSON array in this exact shape, with no markdown and no explanation:

[
  {
    "title": "Task title",
    "description": "Optional details",
    "priority": "low" | "medium" | "high"
  }
]

If there are no tasks, respond with []."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_embedded() {
        let context = ExtractTasksContext::new("buy milk & eggs");
        let (system, user) = template().render(&context).unwrap();
        assert!(system.contains("task extraction assistant"));
        assert!(user.contains("buy milk & eggs"));
        assert!(user.contains("JSON array"));
    }
}
