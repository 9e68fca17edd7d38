#![warn(clippy::pedantic)]
// Allow common pedantic lints that don't affect correctness
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

//! # Task Parser
//!
//! Turns unstructured pasted text into task drafts.
//!
//! This crate provides:
//! - A heuristic pipeline: line normalization, non-task filtering, action and
//!   priority inference, with a sentence-level fallback
//! - An optional completion-model path that always falls back to the
//!   heuristics on failure
//! - A CLI for parsing files or stdin
//!
//! ## Example
//!
//! ```rust
//! use task_parser::{parse, TaskPriority};
//!
//! let drafts = parse("1. Buy milk\n2. Fix the fence asap\n3. TOTAL: 500");
//! assert_eq!(drafts.len(), 2);
//! assert_eq!(drafts[1].priority, TaskPriority::High);
//! ```

// Core entities
pub mod entities;

// Error types
pub mod errors;

// Heuristic pipeline
pub mod heuristics;

// AI integration
pub mod ai;

// Domain facades
pub mod domain;

// Terminal UI helpers
pub mod ui;

// Re-export key types for convenience
pub use domain::{DraftSource, ParseOutcome, TaskParser};
pub use entities::{ParserConfig, TaskDraft, TaskPriority};
pub use errors::{ParserError, ParserResult};
pub use heuristics::{parse, parse_value};

// Re-export AI types
pub use ai::{AIMessage, AIProvider, AIResponse, AIRole, GenerateOptions, TokenUsage};
