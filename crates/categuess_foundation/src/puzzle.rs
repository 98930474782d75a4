//! Puzzle records.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{Error, Result};

/// Number of display words every puzzle carries.
pub const PUZZLE_WORD_COUNT: usize = 5;

/// Opaque puzzle identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PuzzleId(String);

impl PuzzleId {
    /// Creates a puzzle id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PuzzleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A single puzzle: five words and the category they share.
///
/// Puzzles are immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Puzzle {
    /// Identifier, unique within a collection.
    pub id: PuzzleId,
    /// Display words, revealed one at a time.
    pub words: Vec<String>,
    /// The hidden category.
    pub category: Category,
}

impl Puzzle {
    /// Creates a puzzle.
    #[must_use]
    pub fn new<I, S>(id: impl Into<String>, words: I, category: Category) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: PuzzleId::new(id),
            words: words.into_iter().map(Into::into).collect(),
            category,
        }
    }

    /// Returns the number of display words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Checks the data model invariants for this puzzle.
    ///
    /// # Errors
    ///
    /// Returns an error if the puzzle does not have exactly
    /// [`PUZZLE_WORD_COUNT`] non-blank words or its canonical name is blank.
    pub fn validate(&self) -> Result<()> {
        if self.words.len() != PUZZLE_WORD_COUNT {
            return Err(Error::invalid_puzzle(
                &self.id,
                format!(
                    "expected {PUZZLE_WORD_COUNT} words, found {}",
                    self.words.len()
                ),
            ));
        }
        if let Some(index) = self.words.iter().position(|w| w.trim().is_empty()) {
            return Err(Error::invalid_puzzle(
                &self.id,
                format!("word {} is blank", index + 1),
            ));
        }
        if self.category.canonical.trim().is_empty() {
            return Err(Error::invalid_puzzle(&self.id, "canonical name is blank"));
        }
        Ok(())
    }
}
