//! Match evaluation.
//!
//! Strategies are tried in a fixed order and the first one that holds
//! decides the verdict:
//!
//! 1. Canonical name
//! 2. Aliases
//! 3. Matcher patterns
//! 4. Related single-word concepts
//! 5. Concept overlap fallback
//!
//! A guess that normalizes to nothing never matches.

use categuess_foundation::{Category, CategoryMatcher, MatchReason, MatchVerdict};

use crate::concept::{ConceptOverlap, concept_tokens, is_concept_token};
use crate::normalize::{normalize, tokens};
use crate::pattern::patterns_for;

/// Returns true if `guess` names `category`.
#[must_use]
pub fn is_match(guess: &str, category: &Category) -> bool {
    evaluate(guess, category).matched
}

/// Evaluates a guess against a category.
#[must_use]
pub fn evaluate(guess: &str, category: &Category) -> MatchVerdict {
    evaluate_normalized(&normalize(guess), category)
}

/// Evaluates an already normalized guess against a category.
#[must_use]
pub fn evaluate_normalized(normalized_guess: &str, category: &Category) -> MatchVerdict {
    if normalized_guess.is_empty() {
        return MatchVerdict::no_match();
    }

    if normalize(&category.canonical) == normalized_guess {
        return MatchVerdict::by(MatchReason::Canonical);
    }

    if category
        .aliases
        .iter()
        .any(|alias| normalize(alias) == normalized_guess)
    {
        return MatchVerdict::by(MatchReason::Alias);
    }

    if let Some(matcher) = &category.matcher {
        if matches_patterns(normalized_guess, matcher) {
            return MatchVerdict::by(MatchReason::Matcher);
        }
    }

    if matches_related(normalized_guess, category) {
        return MatchVerdict::by(MatchReason::Related);
    }

    if ConceptOverlap::compute(normalized_guess, category).is_satisfied() {
        return MatchVerdict::by(MatchReason::Concept);
    }

    MatchVerdict::no_match()
}

fn matches_patterns(normalized_guess: &str, matcher: &CategoryMatcher) -> bool {
    // A token with nothing to spell would leave bare structural phrases like
    // "after". Stopword tokens ("a", "things") are still real tokens.
    if !matcher.token().chars().any(|c| c.is_ascii_alphanumeric()) {
        return false;
    }
    patterns_for(matcher)
        .iter()
        .any(|pattern| normalize(pattern) == normalized_guess)
}

fn matches_related(normalized_guess: &str, category: &Category) -> bool {
    let mut guess_tokens = tokens(normalized_guess);
    let (Some(token), None) = (guess_tokens.next(), guess_tokens.next()) else {
        return false;
    };
    if !is_concept_token(token) {
        return false;
    }

    category.related_concepts.iter().any(|related| {
        let related_tokens = concept_tokens(related);
        related_tokens.len() == 1 && related_tokens[0] == token
    })
}
