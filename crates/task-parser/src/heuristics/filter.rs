//! Task-likeness filter: rejects headers, timestamps, addresses and labels.

use regex::Regex;
use std::sync::LazyLock;

static LEADING_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}[/-]\d{1,2}[/-]\d{2,4}").unwrap());

static LEADING_TIME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{1,2}:\d{2}").unwrap());

static SHOUTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z\s]+$").unwrap());

/// Lines shorter than this are headers when they hold a colon or are all caps.
const HEADER_MAX_CHARS: usize = 20;

/// Single-token lines shorter than this are labels.
const LABEL_MAX_CHARS: usize = 10;

/// Why a normalized line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Short line with a colon, or all uppercase
    Header,
    /// Starts with a date such as `12/05/2024`
    Date,
    /// Starts with a clock time such as `9:30`
    Time,
    /// Looks like an email address
    Email,
    /// Contains a URL
    Url,
    /// Short single token
    Label,
}

impl Rejection {
    /// Get the rejection reason as a lowercase string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Date => "date",
            Self::Time => "time",
            Self::Email => "email",
            Self::Url => "url",
            Self::Label => "label",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a normalized line, returning the first rule it trips.
pub fn rejection(line: &str) -> Option<Rejection> {
    let len = line.chars().count();

    if len < HEADER_MAX_CHARS && (line.contains(':') || SHOUTED.is_match(line)) {
        return Some(Rejection::Header);
    }
    if LEADING_DATE.is_match(line) {
        return Some(Rejection::Date);
    }
    if LEADING_TIME.is_match(line) {
        return Some(Rejection::Time);
    }
    if line.contains('@') && line.contains('.') {
        return Some(Rejection::Email);
    }
    if line.contains("http://") || line.contains("https://") {
        return Some(Rejection::Url);
    }
    if len < LABEL_MAX_CHARS && !line.contains(' ') {
        return Some(Rejection::Label);
    }
    None
}

/// Whether a normalized line should be dropped as not-a-task.
pub fn is_non_task(line: &str) -> bool {
    rejection(line).is_some()
}
