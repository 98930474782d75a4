//! Match verdicts.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which strategy produced a verdict.
///
/// Variants are listed in evaluation precedence order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MatchReason {
    /// Guess equals the canonical name.
    Canonical,
    /// Guess equals an alias.
    Alias,
    /// Guess equals a phrase generated by the category matcher.
    Matcher,
    /// Guess is a single related concept word.
    Related,
    /// Guess overlaps the category's concept tokens.
    Concept,
    /// No strategy matched.
    None,
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canonical => write!(f, "canonical"),
            Self::Alias => write!(f, "alias"),
            Self::Matcher => write!(f, "matcher"),
            Self::Related => write!(f, "related"),
            Self::Concept => write!(f, "concept"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Outcome of comparing a guess against a category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchVerdict {
    /// Whether the guess names the category.
    pub matched: bool,
    /// The strategy that decided the verdict.
    pub reason: MatchReason,
}

impl MatchVerdict {
    /// A verdict produced by `reason`.
    ///
    /// `matched` is derived from the reason, so the two can never disagree.
    #[must_use]
    pub const fn by(reason: MatchReason) -> Self {
        Self {
            matched: !matches!(reason, MatchReason::None),
            reason,
        }
    }

    /// The non-matching verdict.
    #[must_use]
    pub const fn no_match() -> Self {
        Self::by(MatchReason::None)
    }
}

impl fmt::Display for MatchVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matched {
            write!(f, "match ({})", self.reason)
        } else {
            write!(f, "no match")
        }
    }
}
