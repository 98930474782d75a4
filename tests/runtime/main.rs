//! Integration tests for Layer 3: Runtime
//!
//! Tests for puzzle collections, sessions and rounds, and the REPL.

mod repl;
mod sessions;
