//! Runtime configuration.

use std::path::PathBuf;

use categuess_debug::DebugConfig;

/// Configuration for a game session.
#[derive(Clone, Debug, Default)]
pub struct RuntimeConfig {
    /// Puzzle collection to load; the built-in collection when `None`.
    pub puzzles_path: Option<PathBuf>,

    /// Seed for puzzle selection; fresh entropy when `None`.
    pub seed: Option<u64>,

    /// Match diagnostics.
    pub debug: DebugConfig,
}

impl RuntimeConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the puzzle collection path.
    #[must_use]
    pub fn with_puzzles_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.puzzles_path = Some(path.into());
        self
    }

    /// Builder method to set the selection seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method to set the diagnostics configuration.
    #[must_use]
    pub fn with_debug(mut self, debug: DebugConfig) -> Self {
        self.debug = debug;
        self
    }
}
