//! Keyword tables driving the heuristic classifier.
//!
//! Matching is always done against lowercased text, so every entry here is
//! lowercase. Extending a table changes behaviour without touching the
//! control flow in the sibling modules.

/// Verbs that mark a line as an action when its first word starts with one.
///
/// Matching is by prefix, so `review` also covers `reviewing` and `reviews`.
pub const ACTION_VERBS: &[&str] = &[
    "review",
    "send",
    "update",
    "create",
    "write",
    "read",
    "check",
    "complete",
    "finish",
    "start",
    "prepare",
    "schedule",
    "call",
    "meet",
    "discuss",
    "analyze",
    "design",
    "develop",
    "test",
    "fix",
    "improve",
    "implement",
    "organize",
    "plan",
    "research",
    "study",
    "learn",
    "practice",
    "build",
    "deploy",
    "install",
    "configure",
    "setup",
    "clean",
    "buy",
    "purchase",
    "return",
    "visit",
    "attend",
    "submit",
    "apply",
    "register",
    "sign",
    "upload",
    "download",
    "share",
    "publish",
    "edit",
    "delete",
    "remove",
    "add",
    "change",
    "modify",
    "replace",
    "upgrade",
    "downgrade",
];

/// Boilerplate words stripped from the start of a line.
pub const TASK_PREFIXES: &[&str] = &[
    "todo", "task", "action", "item", "step", "do", "need to", "should", "must",
];

/// Phrases that mark a line as an obligation wherever they appear.
pub const IMPERATIVE_CUES: &[&str] = &["need to", "should", "must", "have to"];

/// Substrings that raise a task to high priority.
pub const HIGH_PRIORITY_KEYWORDS: &[&str] = &["urgent", "asap", "important", "critical"];

/// Substrings that lower a task to low priority.
pub const LOW_PRIORITY_KEYWORDS: &[&str] = &["optional", "later", "someday", "maybe"];
