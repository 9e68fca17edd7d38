//! AI integration for task extraction.
//!
//! This module provides:
//! - Completion provider abstraction and an OpenAI-compatible client
//! - Handlebars prompt templates
//! - Parsing of free-text replies into task drafts

pub mod openai;
pub mod prompts;
pub mod provider;
pub mod reply;

// Re-exports
pub use openai::OpenAIProvider;
pub use prompts::{ExtractTasksContext, PromptTemplate};
pub use provider::{AIMessage, AIProvider, AIResponse, AIRole, GenerateOptions, TokenUsage};
pub use reply::{find_json_array, parse_model_reply};
