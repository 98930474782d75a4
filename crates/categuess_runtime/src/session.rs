//! Session state: the loaded collection, the selector, and the round in play.

use categuess_debug::MatchExplainer;
use categuess_foundation::{PuzzleId, Result};

use crate::config::RuntimeConfig;
use crate::round::{GuessOutcome, Round};
use crate::selector::PuzzleSelector;
use crate::source::{LoadOptions, PuzzleCollection};

/// State for one player's session.
pub struct Session {
    /// Puzzles available to play.
    collection: PuzzleCollection,

    /// Picks the next puzzle.
    selector: PuzzleSelector,

    /// Evaluates guesses, with traces in development mode.
    explainer: MatchExplainer,

    /// The round in play, if one has started.
    round: Option<Round>,
}

impl Session {
    /// Creates a session over an already loaded collection.
    #[must_use]
    pub fn new(collection: PuzzleCollection, selector: PuzzleSelector, explainer: MatchExplainer) -> Self {
        Self {
            collection,
            selector,
            explainer,
            round: None,
        }
    }

    /// Creates a session from configuration, loading the puzzle collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be loaded.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        let collection = match &config.puzzles_path {
            Some(path) => PuzzleCollection::load_from_file(path, LoadOptions::default())?,
            None => PuzzleCollection::builtin()?,
        };
        Ok(Self::new(
            collection,
            PuzzleSelector::new(config.seed),
            MatchExplainer::new(config.debug.clone()),
        ))
    }

    /// Returns the puzzle collection.
    #[must_use]
    pub fn collection(&self) -> &PuzzleCollection {
        &self.collection
    }

    /// Returns the explainer.
    #[must_use]
    pub fn explainer(&self) -> &MatchExplainer {
        &self.explainer
    }

    /// Turns match diagnostics on or off.
    pub fn set_debug(&mut self, enabled: bool) {
        self.explainer.set_enabled(enabled);
    }

    /// Returns the round in play.
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Starts a new round with a puzzle other than the current one.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection is empty.
    pub fn start_new_round(&mut self) -> Result<&Round> {
        let current = self.round.as_ref().map(|round| round.puzzle().id.clone());
        let puzzle = self.selector.pick(&self.collection, current.as_ref())?;
        Ok(self.round.insert(Round::new(puzzle.clone())))
    }

    /// Starts a round with a specific puzzle.
    ///
    /// # Errors
    ///
    /// Returns an error if no puzzle has this id.
    pub fn start_round_with(&mut self, id: &PuzzleId) -> Result<&Round> {
        let puzzle = self.collection.require(id)?.clone();
        Ok(self.round.insert(Round::new(puzzle)))
    }

    /// Submits a guess to the current round.
    ///
    /// Returns [`GuessOutcome::Ignored`] when no round has started.
    pub fn guess(&mut self, guess: &str) -> GuessOutcome {
        match &mut self.round {
            Some(round) => round.submit_guess(guess, &self.explainer),
            None => GuessOutcome::Ignored,
        }
    }

    /// Gives up on the current round.
    pub fn give_up(&mut self) {
        if let Some(round) = &mut self.round {
            round.give_up();
        }
    }
}
