//! Categuess - Guess the category five words share
//!
//! This crate re-exports all layers of the Categuess system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: categuess_runtime    — Puzzle collections, rounds, REPL, CLI
//! Layer 2: categuess_debug      — Match traces and trace formatting
//! Layer 1: categuess_matcher    — Normalizer, patterns, match evaluator
//! Layer 0: categuess_foundation — Core types (Category, Puzzle, MatchVerdict, Error)
//! ```

pub use categuess_debug as debug;
pub use categuess_foundation as foundation;
pub use categuess_matcher as matcher;
pub use categuess_runtime as runtime;
