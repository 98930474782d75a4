//! Random puzzle selection.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use categuess_foundation::{Error, Puzzle, PuzzleId, Result};

use crate::source::PuzzleCollection;

/// Picks puzzles at random, optionally avoiding the one just played.
///
/// Selection is deterministic for a given seed.
#[derive(Clone, Debug)]
pub struct PuzzleSelector {
    rng: ChaCha8Rng,
}

impl PuzzleSelector {
    /// Creates a selector with a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a selector seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Creates a selector from an optional seed.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::with_seed)
    }

    /// Picks a puzzle, skipping `exclude` when anything else is available.
    ///
    /// If excluding leaves nothing to choose from, the whole collection is
    /// used instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is empty.
    pub fn pick<'a>(
        &mut self,
        collection: &'a PuzzleCollection,
        exclude: Option<&PuzzleId>,
    ) -> Result<&'a Puzzle> {
        let puzzles = collection.puzzles();
        if puzzles.is_empty() {
            return Err(Error::no_puzzles());
        }

        let candidates: Vec<&Puzzle> = puzzles
            .iter()
            .filter(|puzzle| Some(&puzzle.id) != exclude)
            .collect();

        if candidates.is_empty() {
            let index = self.rng.gen_range(0..puzzles.len());
            return Ok(&puzzles[index]);
        }

        let index = self.rng.gen_range(0..candidates.len());
        Ok(candidates[index])
    }
}

impl Default for PuzzleSelector {
    fn default() -> Self {
        Self::from_entropy()
    }
}
