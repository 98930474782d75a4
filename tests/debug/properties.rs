//! Property tests: traces never disagree with the plain evaluator

use categuess_debug::{DebugConfig, MatchExplainer, explain_match};
use categuess_foundation::{Category, CategoryMatcher};
use categuess_matcher::{evaluate, is_match};
use proptest::prelude::*;

const VOCABULARY: &[&str] = &[
    "dog", "dogs", "breed", "breeds", "types", "of", "the", "bread", "after", "words", "cat",
    "toys", "re", "starts", "with", "ing", "ending", "kitchen", "tools", "wolf", "thing",
];

fn phrase() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 0..5).prop_map(|words| words.join(" "))
}

fn category() -> impl Strategy<Value = Category> {
    let token = prop::sample::select(VOCABULARY);
    let matcher = prop_oneof![
        (token.clone(), any::<bool>()).prop_map(|(t, alone)| CategoryMatcher::words_after(t, alone)),
        token.clone().prop_map(CategoryMatcher::types_of),
        token.clone().prop_map(CategoryMatcher::starts_with),
        token.prop_map(CategoryMatcher::ends_with),
    ];
    (
        phrase(),
        prop::collection::vec(phrase(), 0..3),
        prop::collection::vec(phrase(), 0..2),
        prop::collection::vec(prop::sample::select(VOCABULARY).prop_map(String::from), 0..2),
        prop::option::of(matcher),
    )
        .prop_map(|(canonical, aliases, concepts, related_concepts, matcher)| Category {
            canonical,
            aliases,
            concepts,
            related_concepts,
            matcher,
        })
}

proptest! {
    #[test]
    fn trace_agrees_with_is_match(guess in phrase(), category in category()) {
        prop_assert_eq!(is_match(&guess, &category), explain_match(&guess, &category).matched());
    }

    #[test]
    fn trace_verdict_equals_evaluate(guess in phrase(), category in category()) {
        prop_assert_eq!(explain_match(&guess, &category).verdict, evaluate(&guess, &category));
    }

    #[test]
    fn explainer_verdict_independent_of_config(
        guess in phrase(),
        category in category(),
        enabled in any::<bool>(),
    ) {
        let explainer = MatchExplainer::new(DebugConfig::default().with_enabled(enabled));
        let explained = explainer.evaluate(&guess, &category);
        prop_assert_eq!(explained.verdict, evaluate(&guess, &category));
        prop_assert_eq!(explained.trace.is_some(), enabled);
    }
}
