//! Line normalizer: strips list markers and task boilerplate.

use regex::Regex;
use std::sync::LazyLock;

use super::vocabulary::TASK_PREFIXES;

/// Leading markers, applied in order. Each removes at most one match.
static LINE_MARKERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let prefixes = TASK_PREFIXES
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");

    vec![
        Regex::new(r"^[-*•]\s*").unwrap(),          // - item, * item, • item
        Regex::new(r"^\d+[.)]\s*").unwrap(),        // 1. item, 12) item
        Regex::new(r"(?i)^[a-z][.)]\s*").unwrap(),  // a. item, B) item
        Regex::new(r"(?i)^[ivx]+[.)]\s*").unwrap(), // iv. item, also "xi." and friends
        Regex::new(&format!(r"(?i)^(?:{prefixes}):?\s*")).unwrap(),
    ]
});

/// Strip list markers and boilerplate prefixes from one line.
///
/// The input is trimmed first and the result is trimmed again, so the
/// output may be empty when the line held nothing but a marker.
pub fn normalize_line(line: &str) -> String {
    let mut current = line.trim().to_string();
    for marker in LINE_MARKERS.iter() {
        if let Some(m) = marker.find(&current) {
            current = current[m.end()..].to_string();
        }
    }
    current.trim().to_string()
}
