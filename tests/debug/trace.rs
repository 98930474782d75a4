//! Integration tests for match traces

use categuess_debug::explain_match;
use categuess_foundation::{Category, CategoryMatcher, MatchReason};

fn dog_breeds() -> Category {
    Category::new("Dog breeds")
        .with_aliases(["breeds of dogs", "dog breed", "types of dogs"])
        .with_matcher(CategoryMatcher::types_of("dog breeds"))
}

#[test]
fn matcher_trace_lists_patterns() {
    let trace = explain_match("dog", &dog_breeds());
    assert!(trace.matched());
    assert_eq!(trace.verdict.reason, MatchReason::Matcher);
    let patterns = trace.matcher_patterns.as_ref().unwrap();
    assert!(patterns.contains(&"dog".to_string()));
    assert!(patterns.contains(&"types of dog breeds".to_string()));
}

#[test]
fn trace_without_matcher_has_no_patterns() {
    let trace = explain_match("dog", &Category::new("Dog breeds"));
    assert_eq!(trace.matcher_patterns, None);
    assert_eq!(trace.verdict.reason, MatchReason::Concept);
}

#[test]
fn rejected_trace_explains_the_shortfall() {
    let trace = explain_match("Dog-thing!", &dog_breeds());
    assert!(!trace.matched());
    assert_eq!(trace.guess, "Dog-thing!");
    assert_eq!(trace.normalized_guess, "dog thing");
    assert_eq!(trace.guess_concept_tokens, vec!["dog"]);
    assert_eq!(trace.category_concept_tokens, vec!["breed", "dog"]);
    assert_eq!((trace.hit_count, trace.required_hits), (1, 2));
    assert!(!trace.concept_threshold_met());
}

#[test]
fn empty_guess_trace() {
    let trace = explain_match("  ", &dog_breeds());
    assert!(!trace.matched());
    assert_eq!(trace.normalized_guess, "");
    assert!(trace.guess_concept_tokens.is_empty());
    assert!(!trace.concept_threshold_met());
}

#[test]
fn guess_concept_tokens_are_deduplicated_in_order() {
    let trace = explain_match("wolf dogs wolves dog", &Category::new("Pack animals"));
    assert_eq!(trace.guess_concept_tokens, vec!["dog", "wolf", "wolve"]);
    assert_eq!(trace.required_hits, 2);
    assert_eq!(trace.hit_count, 0);
}
