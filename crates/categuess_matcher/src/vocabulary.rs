//! Fixed word lists used by normalization and concept filtering.
//!
//! Both lists are kept sorted so membership is a binary search.

/// Words dropped from every phrase during normalization.
pub const STOPWORDS: &[&str] = &[
    "a", "an", "come", "comes", "of", "that", "the", "things", "to", "which", "words",
];

/// Structural words that never count as concept tokens.
///
/// These show up in the phrasing of many category names ("words after
/// bread", "types of dogs") and say nothing about which category is meant.
pub const BLOCKED_CONCEPT_TOKENS: &[&str] = &[
    "after", "before", "come", "comes", "end", "ending", "ends", "kind", "kinds", "start",
    "starting", "starts", "that", "thing", "things", "type", "types", "which", "with", "word",
    "words",
];

/// Minimum length of a concept token.
pub const MIN_CONCEPT_TOKEN_LEN: usize = 3;

/// Returns true if `word` is dropped during normalization.
#[must_use]
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.binary_search(&word).is_ok()
}

/// Returns true if `word` is a structural word excluded from concepts.
#[must_use]
pub fn is_blocked_concept_token(word: &str) -> bool {
    BLOCKED_CONCEPT_TOKENS.binary_search(&word).is_ok()
}
