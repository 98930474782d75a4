//! Matcher pattern generation.
//!
//! Expands a [`CategoryMatcher`] into the finite set of phrases it is
//! considered equivalent to. Phrases are compared only after normalization,
//! so word order and stopwords inside them do not matter.

use categuess_foundation::CategoryMatcher;

use crate::concept::concept_tokens;

/// Generates the phrases a matcher accepts.
///
/// Duplicates are collapsed; the first occurrence keeps its position.
#[must_use]
pub fn patterns_for(matcher: &CategoryMatcher) -> Vec<String> {
    let patterns = match matcher {
        CategoryMatcher::WordsAfter { token, .. } => {
            words_after(token, matcher.accepts_token_alone())
        }
        CategoryMatcher::TypesOf { token, .. } => types_of(token, matcher.accepts_token_alone()),
        CategoryMatcher::StartsWith { token } => starts_with(token),
        CategoryMatcher::EndsWith { token } => ends_with(token),
    };
    dedup(patterns)
}

fn words_after(token: &str, accept_token_alone: bool) -> Vec<String> {
    let mut patterns = vec![format!("words after {token}"), format!("after {token}")];
    if accept_token_alone {
        patterns.push(token.to_string());
    }
    patterns
}

fn types_of(token: &str, accept_token_alone: bool) -> Vec<String> {
    let mut patterns = vec![
        format!("types of {token}"),
        format!("kinds of {token}"),
        format!("{token} types"),
    ];
    if accept_token_alone {
        patterns.push(token.to_string());
        patterns.extend(concept_tokens(token));
    }
    patterns
}

fn starts_with(token: &str) -> Vec<String> {
    vec![
        format!("starts with {token}"),
        format!("words starting with {token}"),
        format!("begin with {token}"),
    ]
}

fn ends_with(token: &str) -> Vec<String> {
    vec![
        format!("ends with {token}"),
        format!("words ending with {token}"),
        format!("finish with {token}"),
    ]
}

fn dedup(patterns: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        if !unique.contains(&pattern) {
            unique.push(pattern);
        }
    }
    unique
}
