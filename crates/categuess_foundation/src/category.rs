//! Category definitions.
//!
//! A category is named by a canonical phrase and may carry aliases, concept
//! phrases, single-word related concepts, and one structured matcher.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =============================================================================
// Category Matcher
// =============================================================================

/// A structured description of how a category is usually phrased.
///
/// Each variant expands into a small, finite set of natural-language phrases
/// that are considered equivalent to the category.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum CategoryMatcher {
    /// "Words after {token}", e.g. words that follow "bread".
    WordsAfter {
        /// The anchor word.
        token: String,
        /// Whether the bare token is itself a correct guess (default: no).
        #[cfg_attr(
            feature = "serde",
            serde(
                rename = "acceptTokenAlone",
                default,
                skip_serializing_if = "Option::is_none"
            )
        )]
        accept_token_alone: Option<bool>,
    },

    /// "Types of {token}", e.g. types of dog breeds.
    TypesOf {
        /// The head phrase.
        token: String,
        /// Whether the bare token and its concept words are correct guesses
        /// (default: yes).
        #[cfg_attr(
            feature = "serde",
            serde(
                rename = "acceptTokenAlone",
                default,
                skip_serializing_if = "Option::is_none"
            )
        )]
        accept_token_alone: Option<bool>,
    },

    /// "Starts with {token}".
    StartsWith {
        /// The prefix.
        token: String,
    },

    /// "Ends with {token}".
    EndsWith {
        /// The suffix.
        token: String,
    },
}

impl CategoryMatcher {
    /// Creates a `WORDS_AFTER` matcher.
    #[must_use]
    pub fn words_after(token: impl Into<String>, accept_token_alone: bool) -> Self {
        Self::WordsAfter {
            token: token.into(),
            accept_token_alone: Some(accept_token_alone),
        }
    }

    /// Creates a `TYPES_OF` matcher with the default token acceptance.
    #[must_use]
    pub fn types_of(token: impl Into<String>) -> Self {
        Self::TypesOf {
            token: token.into(),
            accept_token_alone: None,
        }
    }

    /// Creates a `STARTS_WITH` matcher.
    #[must_use]
    pub fn starts_with(token: impl Into<String>) -> Self {
        Self::StartsWith {
            token: token.into(),
        }
    }

    /// Creates an `ENDS_WITH` matcher.
    #[must_use]
    pub fn ends_with(token: impl Into<String>) -> Self {
        Self::EndsWith {
            token: token.into(),
        }
    }

    /// Returns the kind tag of this matcher.
    #[must_use]
    pub const fn kind(&self) -> MatcherKind {
        match self {
            Self::WordsAfter { .. } => MatcherKind::WordsAfter,
            Self::TypesOf { .. } => MatcherKind::TypesOf,
            Self::StartsWith { .. } => MatcherKind::StartsWith,
            Self::EndsWith { .. } => MatcherKind::EndsWith,
        }
    }

    /// Returns the token this matcher is parameterized by.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::WordsAfter { token, .. }
            | Self::TypesOf { token, .. }
            | Self::StartsWith { token }
            | Self::EndsWith { token } => token,
        }
    }

    /// Returns whether the bare token counts as a correct guess.
    ///
    /// `WORDS_AFTER` defaults to off, `TYPES_OF` defaults to on, and the
    /// prefix/suffix matchers never accept the bare token.
    #[must_use]
    pub fn accepts_token_alone(&self) -> bool {
        match self {
            Self::WordsAfter {
                accept_token_alone, ..
            } => accept_token_alone.unwrap_or(false),
            Self::TypesOf {
                accept_token_alone, ..
            } => accept_token_alone.unwrap_or(true),
            Self::StartsWith { .. } | Self::EndsWith { .. } => false,
        }
    }
}

/// Kind tag of a [`CategoryMatcher`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum MatcherKind {
    /// `WORDS_AFTER`
    WordsAfter,
    /// `TYPES_OF`
    TypesOf,
    /// `STARTS_WITH`
    StartsWith,
    /// `ENDS_WITH`
    EndsWith,
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordsAfter => write!(f, "WORDS_AFTER"),
            Self::TypesOf => write!(f, "TYPES_OF"),
            Self::StartsWith => write!(f, "STARTS_WITH"),
            Self::EndsWith => write!(f, "ENDS_WITH"),
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// The entity a player is trying to name.
///
/// Only `canonical` is required. Every other field is independently optional;
/// leaving one empty never disables another match strategy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Category {
    /// Primary human-readable name.
    pub canonical: String,

    /// Phrases considered exactly equivalent to the canonical name.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub aliases: Vec<String>,

    /// Auxiliary phrases whose tokens count toward concept overlap.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub concepts: Vec<String>,

    /// Single-word concepts accepted when the guess is exactly that word.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub related_concepts: Vec<String>,

    /// Optional structured matcher.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub matcher: Option<CategoryMatcher>,
}

impl Category {
    /// Creates a category with only a canonical name.
    #[must_use]
    pub fn new(canonical: impl Into<String>) -> Self {
        Self {
            canonical: canonical.into(),
            ..Self::default()
        }
    }

    /// Builder method to add an alias.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Builder method to add several aliases in order.
    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Builder method to add a concept phrase.
    #[must_use]
    pub fn with_concept(mut self, concept: impl Into<String>) -> Self {
        self.concepts.push(concept.into());
        self
    }

    /// Builder method to add a related single-word concept.
    #[must_use]
    pub fn with_related_concept(mut self, concept: impl Into<String>) -> Self {
        self.related_concepts.push(concept.into());
        self
    }

    /// Builder method to set the matcher.
    #[must_use]
    pub fn with_matcher(mut self, matcher: CategoryMatcher) -> Self {
        self.matcher = Some(matcher);
        self
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical)
    }
}
