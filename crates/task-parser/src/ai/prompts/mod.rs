//! Prompt templates for the completion-model path.
//!
//! Templates are Handlebars strings rendered against a serializable context.

use handlebars::Handlebars;
use serde::Serialize;

use crate::errors::{ParserError, ParserResult};

mod extract_tasks;

pub use extract_tasks::{template as extract_tasks_template, ExtractTasksContext};

/// A prompt template with system and user messages.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// Template ID
    pub id: String,
    /// System prompt template
    pub system: String,
    /// User prompt template
    pub user: String,
}

impl PromptTemplate {
    /// Create a new prompt template.
    pub fn new(id: impl Into<String>, system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            system: system.into(),
            user: user.into(),
        }
    }

    /// Render the template with the given context.
    pub fn render<T: Serialize>(&self, context: &T) -> ParserResult<(String, String)> {
        let mut handlebars = create_handlebars();

        handlebars
            .register_template_string("system", &self.system)
            .map_err(|e| ParserError::Template {
                reason: format!("Invalid system template '{}': {e}", self.id),
            })?;

        handlebars
            .register_template_string("user", &self.user)
            .map_err(|e| ParserError::Template {
                reason: format!("Invalid user template '{}': {e}", self.id),
            })?;

        let system = handlebars
            .render("system", context)
            .map_err(|e| ParserError::Template {
                reason: format!("Failed to render system prompt: {e}"),
            })?;

        let user = handlebars
            .render("user", context)
            .map_err(|e| ParserError::Template {
                reason: format!("Failed to render user prompt: {e}"),
            })?;

        Ok((system, user))
    }
}

/// Create a Handlebars instance for prompt rendering.
fn create_handlebars() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();

    // Disable HTML escaping for prompts
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.set_strict_mode(true);

    handlebars
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_substitutes_without_escaping() {
        let template = PromptTemplate::new("t", "sys {{name}}", "user <{{name}}>");
        let (system, user) = template.render(&json!({ "name": "a & b" })).unwrap();
        assert_eq!(system, "sys a & b");
        assert_eq!(user, "user <a & b>");
    }

    #[test]
    fn test_missing_variable_is_an_error() {
        let template = PromptTemplate::new("t", "{{missing}}", "");
        let result = template.render(&json!({}));
        assert!(matches!(result, Err(ParserError::Template { .. })));
    }

    #[test]
    fn test_extract_template_metadata() {
        let template = extract_tasks_template();
        assert_eq!(template.id, "extract-tasks");
    }
}
