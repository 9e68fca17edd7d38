//! Core data structures for task extraction.

mod config;
mod draft;

pub use config::{
    ParserConfig, API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, MODEL_ENV, TIMEOUT_ENV,
};
pub use draft::{TaskDraft, TaskPriority, MAX_TITLE_CHARS, MIN_TITLE_CHARS};
