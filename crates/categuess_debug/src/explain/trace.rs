//! Match traces.
//!
//! A trace wraps the verdict of [`categuess_matcher::evaluate`] with the
//! derived values behind it. The concept overlap figures are always
//! computed, even when an earlier strategy already decided the verdict.
//!
//! # Example
//!
//! ```text
//! guess:     "dog thing"
//! verdict:   no match (none)
//! normalized "dog thing"
//! guess concept tokens:    [dog]
//! category concept tokens: [breed, dog]
//! hits: 1 / 2
//! ```

use categuess_foundation::{Category, MatchVerdict};
use categuess_matcher::{ConceptOverlap, evaluate_normalized, normalize, patterns_for};
use serde::Serialize;

/// Diagnostic breakdown of one match evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchTrace {
    /// The guess as submitted.
    pub guess: String,

    /// The verdict, identical to what the plain evaluator returns.
    pub verdict: MatchVerdict,

    /// The normalized guess.
    pub normalized_guess: String,

    /// Concept tokens of the guess, in guess order, without duplicates.
    pub guess_concept_tokens: Vec<String>,

    /// Concept tokens of the category, sorted.
    pub category_concept_tokens: Vec<String>,

    /// Phrases generated by the category matcher, if it has one.
    pub matcher_patterns: Option<Vec<String>>,

    /// Distinct guess concept tokens found in the category.
    pub hit_count: usize,

    /// Hits the concept fallback requires.
    pub required_hits: usize,
}

impl MatchTrace {
    /// Returns whether the guess matched.
    #[must_use]
    pub fn matched(&self) -> bool {
        self.verdict.matched
    }

    /// Returns true if the concept fallback alone would have accepted the guess.
    #[must_use]
    pub fn concept_threshold_met(&self) -> bool {
        !self.guess_concept_tokens.is_empty()
            && !self.category_concept_tokens.is_empty()
            && self.hit_count >= self.required_hits
    }
}

/// Builds the full trace for `guess` against `category`.
#[must_use]
pub fn explain_match(guess: &str, category: &Category) -> MatchTrace {
    let normalized_guess = normalize(guess);
    let verdict = evaluate_normalized(&normalized_guess, category);
    let overlap = ConceptOverlap::compute(&normalized_guess, category);

    MatchTrace {
        guess: guess.to_string(),
        verdict,
        normalized_guess,
        guess_concept_tokens: overlap.guess_tokens,
        category_concept_tokens: overlap.category_tokens.into_iter().collect(),
        matcher_patterns: category.matcher.as_ref().map(patterns_for),
        hit_count: overlap.hit_count,
        required_hits: overlap.required_hits,
    }
}
