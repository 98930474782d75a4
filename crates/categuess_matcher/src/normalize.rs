//! Phrase normalization.
//!
//! Converts any phrase into a canonical, order-independent form so that
//! "Dog-breeds!", "the breeds of dogs" and "dog breed" compare equal.

use crate::vocabulary::is_stopword;

/// Normalizes a phrase for comparison.
///
/// - Lowercases, and spells `&` as `and`
/// - Treats every run of non-ASCII-alphanumeric characters as a separator
/// - Drops stopwords and singularizes what remains
/// - Sorts the tokens and joins them with single spaces
///
/// Returns an empty string only when every token was filtered out.
#[must_use]
pub fn normalize(text: &str) -> String {
    let cleaned = text.to_lowercase().replace('&', "and");

    let mut tokens: Vec<String> = cleaned
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty() && !is_stopword(token))
        .map(singularize)
        // Filtering only before singularizing leaves "thes" as "the", which a
        // second normalize would drop. Filter again so normalize is idempotent.
        .filter(|token| !token.is_empty() && !is_stopword(token))
        .collect();

    tokens.sort_unstable();
    tokens.join(" ")
}

/// Reduces a plural token to a singular form.
///
/// A deliberately crude heuristic, not a stemmer:
/// - "ies" becomes "y" ("puppies" → "puppy")
/// - a trailing "s" is dropped unless the token ends in "ss" or "us"
///
/// Tokens of three characters or fewer are never changed.
#[must_use]
pub fn singularize(token: &str) -> String {
    if token.len() > 3 {
        if let Some(stem) = token.strip_suffix("ies") {
            return format!("{stem}y");
        }
        if token.ends_with('s') && !token.ends_with("ss") && !token.ends_with("us") {
            return token[..token.len() - 1].to_string();
        }
    }
    token.to_string()
}

/// Splits a normalized phrase into its tokens.
pub fn tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}
