//! Domain facades for task extraction.
//!
//! These facades combine the heuristic pipeline with the optional
//! completion-model path.

pub mod intake;

pub use intake::{DraftSource, ParseOutcome, TaskParser};
