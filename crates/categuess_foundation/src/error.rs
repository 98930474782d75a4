//! Error types for the Categuess system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! The match engine itself never fails; these errors belong to the puzzle
//! source, the selector, and the terminal front end.

use std::fmt;

use thiserror::Error;

use crate::puzzle::PuzzleId;

/// The main error type for Categuess operations.
#[derive(Debug, Error)]
#[error("{kind}{}", render_context(.context))]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a "no puzzles available" error.
    #[must_use]
    pub fn no_puzzles() -> Self {
        Self::new(ErrorKind::NoPuzzles)
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Creates an invalid puzzle error.
    #[must_use]
    pub fn invalid_puzzle(id: &PuzzleId, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPuzzle {
            id: id.to_string(),
            message: message.into(),
        })
    }

    /// Creates an unknown puzzle error.
    #[must_use]
    pub fn unknown_puzzle(id: &PuzzleId) -> Self {
        Self::new(ErrorKind::UnknownPuzzle(id.to_string()))
    }
}

#[allow(clippy::ref_option)]
fn render_context(context: &Option<ErrorContext>) -> String {
    context.as_ref().map(|c| format!(" {c}")).unwrap_or_default()
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The puzzle collection is empty.
    #[error("no puzzles available")]
    NoPuzzles,

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Encoding or decoding a puzzle collection failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The file extension does not name a known collection format.
    #[error("unsupported puzzle file format: {0}")]
    UnsupportedFormat(String),

    /// A puzzle violates the data model invariants.
    #[error("invalid puzzle {id}: {message}")]
    InvalidPuzzle {
        /// The offending puzzle id.
        id: String,
        /// What is wrong with it.
        message: String,
    },

    /// Two puzzles in one collection share an id.
    #[error("duplicate puzzle id: {0}")]
    DuplicatePuzzleId(String),

    /// A puzzle id was requested that the collection does not contain.
    #[error("unknown puzzle: {0}")]
    UnknownPuzzle(String),

    /// The line editor failed.
    #[error("editor error: {0}")]
    Editor(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file the error relates to.
    pub source: Option<String>,
    /// Stack of operations that were in progress.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        for frame in &self.stack {
            write!(f, "\n  in {frame}")?;
        }
        Ok(())
    }
}

/// Result type alias using the Categuess [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
