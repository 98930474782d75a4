//! Core types for Categuess.
//!
//! This crate provides:
//! - [`Category`] - The hidden category a puzzle asks the player to name
//! - [`CategoryMatcher`] - Structured naming patterns ("words after X", ...)
//! - [`Puzzle`] - Five display words plus their category
//! - [`MatchVerdict`] - The outcome of comparing a guess to a category
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod category;
pub mod error;
pub mod puzzle;
pub mod verdict;

pub use category::{Category, CategoryMatcher, MatcherKind};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use puzzle::{PUZZLE_WORD_COUNT, Puzzle, PuzzleId};
pub use verdict::{MatchReason, MatchVerdict};
