//! Error types for the task parser.
//!
//! None of these escape the public parsing entry points: the heuristic
//! pipeline is infallible and the model adapter turns every error into a
//! fallback. They exist so the fallible steps can be composed with `?`.

use thiserror::Error;

/// Errors raised by the completion-model path and strict value parsing.
#[derive(Error, Debug, Clone)]
pub enum ParserError {
    // AI errors
    #[error("AI error: {0}")]
    Ai(String),

    #[error("AI provider not configured: {provider}")]
    ProviderNotConfigured { provider: String },

    #[error("AI request timed out after {secs}s")]
    AiTimeout { secs: u64 },

    #[error("AI response parse error: {reason}")]
    AiResponseParseError { reason: String },

    #[error("No JSON array found in model reply")]
    NoJsonArray,

    // Value errors
    #[error("Invalid priority: '{priority}'")]
    InvalidPriority { priority: String },

    #[error("Prompt template error: {reason}")]
    Template { reason: String },
}

impl From<serde_json::Error> for ParserError {
    fn from(err: serde_json::Error) -> Self {
        Self::AiResponseParseError {
            reason: err.to_string(),
        }
    }
}

/// Result type alias for parser operations.
pub type ParserResult<T> = Result<T, ParserError>;
