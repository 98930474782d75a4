//! Integration tests for phrase normalization

use categuess_matcher::{concept_tokens, normalize, singularize};

// =============================================================================
// Canonical Form
// =============================================================================

#[test]
fn punctuation_case_and_plurals_collapse() {
    assert_eq!(normalize("Dog-breeds!"), "breed dog");
    assert_eq!(normalize("the breeds of dogs"), "breed dog");
    assert_eq!(normalize("  DOG   BREED  "), "breed dog");
}

#[test]
fn word_order_does_not_matter() {
    assert_eq!(normalize("dog breed"), normalize("breed dog"));
    assert_eq!(normalize("words after bread"), normalize("bread after"));
}

#[test]
fn ampersand_is_spelled_out() {
    assert_eq!(normalize("Salt & pepper"), normalize("salt and pepper"));
    assert_eq!(normalize("R&B"), "randb");
}

#[test]
fn stopword_only_phrases_are_empty() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   "), "");
    assert_eq!(normalize("the of a"), "");
    assert_eq!(normalize("Things that come"), "");
}

#[test]
fn digits_are_kept() {
    assert_eq!(normalize("Top 10 songs"), "10 song top");
}

// =============================================================================
// Singularization
// =============================================================================

#[test]
fn singularize_rules() {
    assert_eq!(singularize("puppies"), "puppy");
    assert_eq!(singularize("dogs"), "dog");
    assert_eq!(singularize("glass"), "glass");
    assert_eq!(singularize("cactus"), "cactus");
    assert_eq!(singularize("bus"), "bus");
    assert_eq!(singularize("ies"), "ies");
}

#[test]
fn singularized_stopwords_are_dropped() {
    assert_eq!(normalize("thes dogs"), "dog");
    assert_eq!(normalize(&normalize("thes dogs")), "dog");
}

// =============================================================================
// Concept Tokens
// =============================================================================

#[test]
fn concept_tokens_skip_short_and_structural_words() {
    assert_eq!(concept_tokens("Types of big dogs"), vec!["big", "dog"]);
    assert_eq!(concept_tokens("Words ending with ing"), vec!["ing"]);
    assert!(concept_tokens("go to it").is_empty());
}
