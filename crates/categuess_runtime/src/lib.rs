//! Puzzle loading, rounds, REPL, and CLI for Categuess.
//!
//! This crate provides:
//! - [`PuzzleCollection`] - Loading and saving puzzle collections (JSON, `MessagePack`)
//! - [`PuzzleSelector`] - Seeded random puzzle selection
//! - [`Round`] - The reveal-one-word-per-miss round state machine
//! - [`Repl`] - Interactive terminal game loop

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod repl;
pub mod round;
pub mod selector;
pub mod session;
pub mod source;

pub use config::RuntimeConfig;
pub use repl::Repl;
pub use round::{
    GuessOutcome, GuessResult, GuessStatus, Round, apply_correct_guess, apply_incorrect_guess,
};
pub use selector::PuzzleSelector;
pub use session::Session;
pub use source::{LoadOptions, PuzzleCollection, PuzzleFormat};
