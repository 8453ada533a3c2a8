// Tokenization — two deliberately different token streams.
//
// The Jaccard path splits on whitespace and keeps punctuation attached, so
// "food." and "food" are distinct tokens. The vectorizer path extracts word
// tokens of two or more word characters and drops everything else. Both
// lower-case first. The mismatch is preserved behavior, not an oversight:
// the pinned regression fixture in tests/unit_similarity.rs depends on it.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex_lite::Regex;

/// The vectorizer's term pattern: two or more word characters.
/// Single-character tokens and punctuation-only runs are dropped.
fn term_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("term pattern is a valid regex"))
}

/// Tokenize a sentence for the Jaccard path: lower-case, split on
/// whitespace, collapse duplicates. Punctuation stays attached to tokens.
pub fn token_set(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Extract the vectorizer's terms from a sentence: lower-case, then every
/// run of two or more word characters, in order of appearance and with
/// duplicates kept (term frequency needs them).
pub fn vector_terms(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    term_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
