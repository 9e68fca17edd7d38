//! Sentence segmentation for the fallback pass.

use regex::Regex;
use std::sync::LazyLock;

static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+\s+").unwrap());

/// Split text on terminal punctuation followed by whitespace.
///
/// The punctuation that ends a break is consumed; a final sentence keeps
/// its trailing mark because nothing follows it.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
