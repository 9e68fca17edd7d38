//! Terminal UI helpers for draft display.
//!
//! Status lines go to stderr so that JSON on stdout stays machine-readable.

#![allow(clippy::disallowed_macros)]

use colored::Colorize;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use crate::domain::DraftSource;
use crate::entities::{TaskDraft, TaskPriority};

/// Create a table for displaying drafts
pub fn draft_table(drafts: &[TaskDraft]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").fg(Color::Cyan),
        Cell::new("Title").fg(Color::Cyan),
        Cell::new("Priority").fg(Color::Cyan),
        Cell::new("Description").fg(Color::Cyan),
    ]);

    for (index, draft) in drafts.iter().enumerate() {
        let priority_color = match draft.priority {
            TaskPriority::Low => Color::DarkGrey,
            TaskPriority::Medium => Color::White,
            TaskPriority::High => Color::Yellow,
        };

        let description = if draft.description.is_empty() {
            "-"
        } else {
            draft.description.as_str()
        };

        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&draft.title),
            Cell::new(draft.priority.to_string()).fg(priority_color),
            Cell::new(description),
        ]);
    }

    table
}

/// One-line summary of a parse run.
pub fn summary(count: usize, source: DraftSource) -> String {
    let source = match source {
        DraftSource::Model => source.to_string().magenta().to_string(),
        DraftSource::Heuristic => source.to_string().cyan().to_string(),
    };
    format!("{count} task(s) extracted ({source})")
}

/// Print error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue().bold(), message);
}

/// Print warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message);
}
