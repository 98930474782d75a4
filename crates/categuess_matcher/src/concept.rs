//! Concept tokens and the overlap fallback.
//!
//! A concept token is a normalized token of at least
//! [`MIN_CONCEPT_TOKEN_LEN`] characters that is not a structural word.
//! When no exact strategy matches, a guess can still be accepted if enough of
//! its concept tokens appear among the category's concept tokens.

use std::collections::BTreeSet;

use categuess_foundation::Category;

use crate::normalize::{normalize, tokens};
use crate::vocabulary::{MIN_CONCEPT_TOKEN_LEN, is_blocked_concept_token};

/// Returns true if a normalized token counts as a concept token.
#[must_use]
pub fn is_concept_token(token: &str) -> bool {
    token.len() >= MIN_CONCEPT_TOKEN_LEN && !is_blocked_concept_token(token)
}

/// Keeps only the concept tokens, preserving order and duplicates.
pub fn filter_concept_tokens<'a, I>(tokens: I) -> impl Iterator<Item = &'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    tokens.into_iter().filter(|token| is_concept_token(token))
}

/// Normalizes `text` and returns its concept tokens.
#[must_use]
pub fn concept_tokens(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    filter_concept_tokens(tokens(&normalized))
        .map(str::to_string)
        .collect()
}

/// Collects the concept tokens of a category's canonical name, aliases, and
/// concept phrases.
#[must_use]
pub fn category_concept_tokens(category: &Category) -> BTreeSet<String> {
    std::iter::once(&category.canonical)
        .chain(&category.aliases)
        .chain(&category.concepts)
        .flat_map(|phrase| concept_tokens(phrase))
        .collect()
}

/// Figures computed by the concept overlap fallback.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConceptOverlap {
    /// Concept tokens of the guess, in guess order, without duplicates.
    pub guess_tokens: Vec<String>,
    /// Concept tokens of the category.
    pub category_tokens: BTreeSet<String>,
    /// Number of distinct guess concept tokens found in the category.
    pub hit_count: usize,
    /// Hits needed to accept the guess.
    pub required_hits: usize,
}

impl ConceptOverlap {
    /// Computes the overlap between a normalized guess and a category.
    ///
    /// A single-token guess needs one hit. Any longer guess needs two, counted
    /// against its token count before structural words are filtered out, so
    /// "dog thing" still needs two hits even though "thing" can never hit.
    #[must_use]
    pub fn compute(normalized_guess: &str, category: &Category) -> Self {
        let raw_count = tokens(normalized_guess).count();
        let required_hits = if raw_count >= 2 { 2 } else { 1 };

        let mut guess_tokens: Vec<String> = Vec::new();
        for token in filter_concept_tokens(tokens(normalized_guess)) {
            if !guess_tokens.iter().any(|seen| seen == token) {
                guess_tokens.push(token.to_string());
            }
        }

        let category_tokens = category_concept_tokens(category);
        let hit_count = guess_tokens
            .iter()
            .filter(|token| category_tokens.contains(*token))
            .count();

        Self {
            guess_tokens,
            category_tokens,
            hit_count,
            required_hits,
        }
    }

    /// Returns true if the overlap is enough to accept the guess.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        !self.guess_tokens.is_empty()
            && !self.category_tokens.is_empty()
            && self.hit_count >= self.required_hits
    }
}
