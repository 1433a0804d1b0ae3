//! Formatting helpers for terminal output.

use regex::Regex;
use std::sync::LazyLock;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern"));

/// Remove ANSI colour sequences, leaving the visible text.
pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Visible width in chars, ignoring colour codes.
pub fn visible_len(s: &str) -> usize {
    strip_ansi(s).chars().count()
}

/// Cut a plain string to `max` visible chars, ending in "..." when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

/// Text progress bar, e.g. `[■■■□□□□□]` for 3 of 8.
pub fn progress_bar(filled: usize, total: usize) -> String {
    let filled = filled.min(total);
    format!("[{}{}]", "■".repeat(filled), "□".repeat(total - filled))
}
