// src/core/sanitize.rs
use std::sync::LazyLock;

use regex::Regex;

static PAREN_QUALIFIER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" \(.*\)").unwrap());

/// Line breaks inside badge text become single spaces.
pub fn collapse_newlines(s: &str) -> String {
    s.replace('\n', " ")
}

/// Drop a trailing ` (...)` qualifier from a leg name.
/// Greedy up to the last `)`: `A (x) b (y)` → `A`.
pub fn strip_paren_qualifier(s: &str) -> String {
    PAREN_QUALIFIER_RE.replace_all(s, "").trim().to_string()
}

/// FanDuel rows land in a comma-delimited file.
pub fn commas_to_semicolons(s: &str) -> String {
    s.replace(',', ";")
}

pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualifier_is_removed_greedily() {
        assert_eq!(strip_paren_qualifier("Boston Celtics (-4.5)"), "Boston Celtics");
        assert_eq!(strip_paren_qualifier("A (x) b (y)"), "A");
        assert_eq!(strip_paren_qualifier("No qualifier"), "No qualifier");
        // needs the leading space
        assert_eq!(strip_paren_qualifier("Over(2.5)"), "Over(2.5)");
    }

    #[test]
    fn badge_text_is_flattened() {
        assert_eq!(collapse_newlines("Super\nBoost"), "Super Boost");
    }

    #[test]
    fn case_insensitive_contains() {
        assert!(contains_ci("Profit BOOSTED", "boost"));
        assert!(!contains_ci("vs Team X", "boost"));
    }
}
