//! Round state: one puzzle, revealed a word at a time.
//!
//! A round starts with the first word showing. Every miss reveals one more
//! word; once all words are showing the player gets one last guess. A
//! correct guess reveals everything.

use std::fmt;

use categuess_debug::{MatchExplainer, MatchTrace};
use categuess_foundation::{MatchVerdict, Puzzle};

// =============================================================================
// Guess Status
// =============================================================================

/// Player-facing status of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GuessStatus {
    /// No guess yet.
    Idle,
    /// The category was named.
    Correct,
    /// A miss; another word was revealed.
    Incorrect,
    /// A miss that revealed the final word; one guess remains.
    Last,
    /// A miss with every word already showing.
    Lost,
}

impl GuessStatus {
    /// Returns true once no more guesses are accepted.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Correct | Self::Lost)
    }

    /// Returns the status copy shown to the player.
    #[must_use]
    pub const fn message(self) -> StatusMessage {
        match self {
            Self::Idle => StatusMessage {
                title: "Ready when you are",
                full: "Make a guess when the words start to click.",
                compact: "Take a guess.",
            },
            Self::Correct => StatusMessage {
                title: "You solved it",
                full: "Nicely spotted. Ready for the next one?",
                compact: "Ready for another?",
            },
            Self::Lost => StatusMessage {
                title: "Round over",
                full: "No worries. Try a fresh puzzle when you want.",
                compact: "Try a new puzzle.",
            },
            Self::Last => StatusMessage {
                title: "Last chance",
                full: "One more guess with all the words revealed.",
                compact: "One more guess.",
            },
            Self::Incorrect => StatusMessage {
                title: "Not quite",
                full: "Another word appears to help.",
                compact: "Another word appears.",
            },
        }
    }
}

impl fmt::Display for GuessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Correct => write!(f, "correct"),
            Self::Incorrect => write!(f, "incorrect"),
            Self::Last => write!(f, "last"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Status copy for one [`GuessStatus`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    /// Short heading.
    pub title: &'static str,
    /// Full sentence for wide layouts.
    pub full: &'static str,
    /// One-line version for narrow layouts.
    pub compact: &'static str,
}

// =============================================================================
// Reveal Transitions
// =============================================================================

/// Reveal counter and status after a guess is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuessResult {
    /// Words showing after the guess.
    pub revealed_count: usize,
    /// Status after the guess.
    pub status: GuessStatus,
}

/// Applies a correct guess: every word is revealed.
#[must_use]
pub fn apply_correct_guess(total_words: usize) -> GuessResult {
    GuessResult {
        revealed_count: total_words,
        status: GuessStatus::Correct,
    }
}

/// Applies a missed guess to the reveal counter.
///
/// Reveals one more word, reporting [`GuessStatus::Last`] when that was the
/// final word. A miss with every word already showing (or no words at all)
/// is [`GuessStatus::Lost`] and leaves the count unchanged.
#[must_use]
pub fn apply_incorrect_guess(revealed_count: usize, total_words: usize) -> GuessResult {
    if total_words == 0 || revealed_count >= total_words {
        return GuessResult {
            revealed_count,
            status: GuessStatus::Lost,
        };
    }

    let next = (revealed_count + 1).min(total_words);
    GuessResult {
        revealed_count: next,
        status: if next == total_words {
            GuessStatus::Last
        } else {
            GuessStatus::Incorrect
        },
    }
}

// =============================================================================
// Round
// =============================================================================

/// What happened to a submitted guess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess was blank or the round was already over.
    Ignored,
    /// The guess was evaluated.
    Evaluated {
        /// The verdict.
        verdict: MatchVerdict,
        /// Status after the guess.
        status: GuessStatus,
        /// Diagnostic trace, when diagnostics are on.
        trace: Option<MatchTrace>,
    },
}

/// A single round of play.
#[derive(Clone, Debug)]
pub struct Round {
    puzzle: Puzzle,
    revealed_count: usize,
    status: GuessStatus,
    guesses: Vec<String>,
}

impl Round {
    /// Starts a round with the first word showing.
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        let revealed_count = puzzle.words.len().min(1);
        Self {
            puzzle,
            revealed_count,
            status: GuessStatus::Idle,
            guesses: Vec::new(),
        }
    }

    /// Returns the puzzle being played.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the number of words showing.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed_count
    }

    /// Returns the current status.
    #[must_use]
    pub fn status(&self) -> GuessStatus {
        self.status
    }

    /// Returns the evaluated guesses, oldest first.
    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    /// Returns true once no more guesses are accepted.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the words currently showing.
    #[must_use]
    pub fn visible_words(&self) -> &[String] {
        &self.puzzle.words[..self.revealed_count]
    }

    /// Submits a guess.
    ///
    /// Blank guesses, and any guess after the round is over, are ignored.
    pub fn submit_guess(&mut self, guess: &str, explainer: &MatchExplainer) -> GuessOutcome {
        let trimmed = guess.trim();
        if trimmed.is_empty() || self.is_over() {
            return GuessOutcome::Ignored;
        }

        let explained = explainer.evaluate(trimmed, &self.puzzle.category);
        self.guesses.push(trimmed.to_string());

        let total = self.puzzle.words.len();
        let next = if explained.verdict.matched {
            apply_correct_guess(total)
        } else {
            apply_incorrect_guess(self.revealed_count, total)
        };
        self.revealed_count = next.revealed_count;
        self.status = next.status;

        GuessOutcome::Evaluated {
            verdict: explained.verdict,
            status: self.status,
            trace: explained.trace,
        }
    }

    /// Ends the round as lost and reveals every word.
    pub fn give_up(&mut self) {
        if !self.is_over() {
            self.revealed_count = self.puzzle.words.len();
            self.status = GuessStatus::Lost;
        }
    }
}
